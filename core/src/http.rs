//! Request types and the capability interface the client drives.
//!
//! # Design
//! `HttpClient` never looks inside a request. It needs exactly three things
//! from one: a transport that can execute it, a way to read the response
//! bytes afterwards, and a way to hand the connection back to the pool.
//! `Request` captures the last two; `Transport` (see `transport.rs`) the
//! first. Test doubles implement both directly.
//!
//! `HttpRequest` is the concrete request used with `UreqTransport`. Its
//! public fields are plain data; the live connection held between execute
//! and release is private.

use std::fmt;

use tracing::debug;

use crate::error::TransportError;
use crate::params::HttpParameters;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-use request as seen by `HttpClient::request`.
pub trait Request {
    /// The URL the request is bound to, exactly as given at build time.
    fn target_url(&self) -> &str;

    /// Raw response bytes. Only meaningful after a successful execute.
    fn response_body(&mut self) -> Result<Vec<u8>, TransportError>;

    /// Return any held connection to the transport's pool. Calling it on a
    /// request that holds nothing is a no-op.
    fn release_connection(&mut self);
}

pub(crate) type Connection = ureq::http::Response<ureq::Body>;

/// A prepared GET or POST request.
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub params: HttpParameters,
    connection: Option<Connection>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            params: HttpParameters::new(),
            connection: None,
        }
    }

    pub fn with_params(mut self, params: HttpParameters) -> Self {
        self.params = params;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Value stored under `name` in the request body parameters.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Whether a connection is currently held.
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    pub(crate) fn attach(&mut self, connection: Connection) {
        // A leftover connection from an earlier execute goes back first.
        self.release_connection();
        self.connection = Some(connection);
    }
}

impl Request for HttpRequest {
    fn target_url(&self) -> &str {
        &self.url
    }

    fn response_body(&mut self) -> Result<Vec<u8>, TransportError> {
        let connection = self.connection.as_mut().ok_or(TransportError::NotExecuted)?;
        // ureq caps bodies at 10MB by default; read whatever the server sent.
        let bytes = connection
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()?;
        Ok(bytes)
    }

    fn release_connection(&mut self) {
        if self.connection.take().is_some() {
            debug!(method = %self.method, url = %self.url, "released connection");
        }
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &self.headers)
            .field("params", &self.params)
            .field("connected", &self.connection.is_some())
            .finish()
    }
}
