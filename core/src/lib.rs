//! Blocking HTTP client core for the Selenium Grid hub.
//!
//! # Overview
//! Executes prepared GET/POST requests, decodes response bodies as UTF-8
//! and guarantees the request's pooled connection is handed back no matter
//! how the call ends. Also builds form-encoded POST requests from a URL and
//! an ordered set of parameters.
//!
//! # Design
//! - `HttpClient::request` is the only place a connection is released; it
//!   does so exactly once per request, before decoding the body.
//! - The transport is a trait (`Transport` + `Request`), so the release
//!   contract is testable with plain hand-written doubles. `UreqTransport`
//!   is the production implementation.
//! - Transport failures reach the caller as `HttpError::Transport` with the
//!   original error inside. There are no retries, redirects or auth.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod params;
pub mod response;
pub mod transport;

pub use client::HttpClient;
pub use config::HttpConfig;
pub use error::{ConfigError, HttpError, TransportError};
pub use http::{HttpMethod, HttpRequest, Request};
pub use params::HttpParameters;
pub use response::Response;
pub use transport::{Transport, UreqTransport};
