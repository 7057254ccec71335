//! Request execution with guaranteed connection release.
//!
//! # Design
//! `HttpClient` is a thin layer over a `Transport`. `request` takes the
//! request by value, so each one is executed at most once, and calls
//! `release_connection` exactly once on every path before the outcome is
//! returned. Body decoding happens after release: a malformed body can never
//! leak a pooled connection. Failures are passed through, never retried.

use tracing::{debug, warn};

use crate::config::HttpConfig;
use crate::error::HttpError;
use crate::http::{HttpMethod, HttpRequest, Request};
use crate::params::HttpParameters;
use crate::response::Response;
use crate::transport::{Transport, UreqTransport};

/// Executes prepared requests and builds new ones.
#[derive(Debug, Clone)]
pub struct HttpClient<T = UreqTransport> {
    transport: T,
}

impl HttpClient {
    /// Client over a ureq transport with default settings.
    pub fn new() -> Self {
        Self::with_config(HttpConfig::default())
    }

    pub fn with_config(config: HttpConfig) -> Self {
        Self::with_transport(UreqTransport::new(&config))
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HttpClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST request targeting `url` verbatim, with `params` as its form body.
    ///
    /// The URL is not validated here; a bad one fails at execution time.
    pub fn build_post_method(&self, url: &str, params: HttpParameters) -> HttpRequest {
        HttpRequest::new(HttpMethod::Post, url).with_params(params)
    }

    /// GET request targeting `url` verbatim.
    pub fn build_get_method(&self, url: &str) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, url)
    }
}

impl<T: Transport> HttpClient<T> {
    /// Execute `request` and decode its body as UTF-8.
    ///
    /// The request's connection is released exactly once, whether the
    /// transport fails, the body read fails, or everything succeeds.
    pub fn request(&self, mut request: T::Request) -> Result<Response, HttpError> {
        let outcome = self
            .transport
            .execute(&mut request)
            .and_then(|_| request.response_body());
        request.release_connection();

        let bytes = match outcome {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(url = %request.target_url(), error = %e, "request failed");
                return Err(e.into());
            }
        };

        let body = String::from_utf8(bytes).map_err(|e| {
            debug!(url = %request.target_url(), "response body is not valid UTF-8");
            HttpError::from(e)
        })?;
        Ok(Response::new(body))
    }
}
