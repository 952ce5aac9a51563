//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults,
//! so the server starts with no setup. `Config::from_env` is the single
//! loading point; validation lives there too.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Keeping them public lets tests refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";

/// Default development values used when environment variables are absent.
/// 3001 matches the port the frontend expects.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(bind_addr: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        if !bind_addr.contains(':') {
            return Err(ConfigError::InvalidValue {
                field: ENV_BIND_ADDR,
                reason: "expected host:port".to_string(),
            });
        }
        Ok(Self { bind_addr })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
