//! Transport seam and the production ureq-backed implementation.
//!
//! # Design
//! `Transport` is the one primitive `HttpClient` consumes from the outside
//! world: execute a request, leaving the response attached to it. The
//! request keeps the connection until `Request::release_connection` is
//! called, at which point ureq's agent takes it back into its pool.
//!
//! `UreqTransport` does not follow redirects and does not treat 4xx/5xx as
//! errors; whatever the server answered is what the caller gets.

use tracing::debug;

use crate::config::HttpConfig;
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, Request};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Executes requests of one concrete type.
pub trait Transport {
    type Request: Request;

    /// Send `request` and attach the response to it. Returns the status code.
    fn execute(&self, request: &mut Self::Request) -> Result<u16, TransportError>;
}

/// Blocking transport over a pooled `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    user_agent: String,
}

impl UreqTransport {
    pub fn new(config: &HttpConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .max_redirects(0)
            .max_redirects_will_error(false)
            .timeout_connect(Some(config.connect_timeout))
            .timeout_global(Some(config.request_timeout))
            .max_idle_connections_per_host(config.max_idle_connections_per_host)
            .build()
            .new_agent();
        Self {
            agent,
            user_agent: config.user_agent.clone(),
        }
    }

    fn decorate<B>(
        &self,
        mut builder: ureq::RequestBuilder<B>,
        headers: &[(String, String)],
    ) -> ureq::RequestBuilder<B> {
        builder = builder.header("user-agent", self.user_agent.as_str());
        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&HttpConfig::default())
    }
}

impl Transport for UreqTransport {
    type Request = HttpRequest;

    fn execute(&self, request: &mut HttpRequest) -> Result<u16, TransportError> {
        debug!(method = %request.method, url = %request.url, "executing request");

        let response = match request.method {
            HttpMethod::Get => self
                .decorate(self.agent.get(request.url.as_str()), &request.headers)
                .call(),
            HttpMethod::Post => {
                let body = request.params.to_form_urlencoded();
                self.decorate(self.agent.post(request.url.as_str()), &request.headers)
                    .content_type(FORM_CONTENT_TYPE)
                    .send(body.as_bytes())
            }
        }?;

        let status = response.status().as_u16();
        debug!(status, url = %request.url, "received response");
        request.attach(response);
        Ok(status)
    }
}
