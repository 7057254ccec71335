//! Error types for the grid HTTP client.
//!
//! # Design
//! Two layers. `TransportError` describes what went wrong on the wire and is
//! produced by `Transport` implementations. `HttpError` is what
//! `HttpClient::request` returns: either the transport failure, passed
//! through untouched, or a UTF-8 decode failure of the response body.

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Failures raised by the transport while executing a request.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection refused: {0}")]
    ConnectionRefused(#[source] io::Error),

    #[error("request timed out ({0:?})")]
    Timeout(ureq::Timeout),

    #[error("host not found")]
    HostNotFound,

    #[error("i/o error: {0}")]
    Io(#[source] io::Error),

    /// Anything else the underlying HTTP library reports.
    #[error("transport error: {0}")]
    Protocol(#[source] ureq::Error),

    /// The response body was requested before the request was executed.
    #[error("request has not been executed")]
    NotExecuted,
}

impl From<ureq::Error> for TransportError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Timeout(which) => TransportError::Timeout(which),
            ureq::Error::HostNotFound => TransportError::HostNotFound,
            ureq::Error::Io(io) if io.kind() == io::ErrorKind::ConnectionRefused => {
                TransportError::ConnectionRefused(io)
            }
            ureq::Error::Io(io) => TransportError::Io(io),
            other => TransportError::Protocol(other),
        }
    }
}

/// Errors returned by `HttpClient::request`.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("response body is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
}

impl HttpError {
    pub fn is_connection_refused(&self) -> bool {
        matches!(
            self,
            HttpError::Transport(TransportError::ConnectionRefused(_))
        )
    }
}

/// Invalid client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_connection_refused_is_classified() {
        let err = TransportError::from(ureq::Error::Io(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "an error",
        )));
        assert!(matches!(err, TransportError::ConnectionRefused(_)));
    }

    #[test]
    fn other_io_errors_stay_io() {
        let err = TransportError::from(ureq::Error::Io(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "pipe",
        )));
        assert!(matches!(err, TransportError::Io(_)));
    }

    #[test]
    fn host_not_found_is_classified() {
        let err = TransportError::from(ureq::Error::HostNotFound);
        assert!(matches!(err, TransportError::HostNotFound));
    }

    #[test]
    fn timeout_keeps_which_timer_fired() {
        let err = TransportError::from(ureq::Error::Timeout(ureq::Timeout::Connect));
        assert!(matches!(err, TransportError::Timeout(ureq::Timeout::Connect)));
    }

    #[test]
    fn transport_error_display_passes_through() {
        let err = HttpError::from(TransportError::Timeout(ureq::Timeout::Global));
        assert_eq!(err.to_string(), "request timed out (Global)");
        assert!(!err.is_connection_refused());
    }

    #[test]
    fn connection_refused_helper() {
        let err = HttpError::from(TransportError::ConnectionRefused(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "an error",
        )));
        assert!(err.is_connection_refused());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn decode_error_display() {
        let utf8 = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = HttpError::from(utf8);
        assert!(err.to_string().starts_with("response body is not valid UTF-8"));
    }
}
