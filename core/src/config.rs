//! Client configuration.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable names read by `HttpConfig::from_env`.
pub mod vars {
    pub const CONNECT_TIMEOUT_SECS: &str = "GRID_HTTP_CONNECT_TIMEOUT_SECS";
    pub const REQUEST_TIMEOUT_SECS: &str = "GRID_HTTP_REQUEST_TIMEOUT_SECS";
    pub const USER_AGENT: &str = "GRID_HTTP_USER_AGENT";
    pub const MAX_IDLE_PER_HOST: &str = "GRID_HTTP_MAX_IDLE_PER_HOST";
}

/// Settings for the pooled transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Connection timeout.
    #[serde(with = "duration_secs")]
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    #[serde(with = "duration_secs")]
    pub request_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Idle pooled connections kept per host.
    pub max_idle_connections_per_host: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: format!("grid-http/{}", env!("CARGO_PKG_VERSION")),
            max_idle_connections_per_host: 10,
        }
    }
}

impl HttpConfig {
    /// Defaults, overridden by whichever `GRID_HTTP_*` variables are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(secs) = parse_var::<u64>(&lookup, vars::CONNECT_TIMEOUT_SECS)? {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var::<u64>(&lookup, vars::REQUEST_TIMEOUT_SECS)? {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(agent) = lookup(vars::USER_AGENT) {
            config.user_agent = agent;
        }
        if let Some(n) = parse_var::<usize>(&lookup, vars::MAX_IDLE_PER_HOST)? {
            config.max_idle_connections_per_host = n;
        }
        Ok(config)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                var: var.to_string(),
                message: e.to_string(),
            }),
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}
