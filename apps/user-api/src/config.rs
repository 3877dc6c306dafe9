//! Application configuration loaded from environment variables.
//!
//! Configuration loading is fail-fast: a present but invalid value
//! aborts startup with a clear error message rather than falling back
//! silently.

use std::env;
use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was present but could not be parsed.
    #[error("invalid value for {name}: {value}")]
    Invalid {
        /// The variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address. `HOST`, default `0.0.0.0`.
    pub host: String,

    /// Bind port. `PORT`, default `8080`.
    pub port: u16,

    /// Log filter directive. `RUST_LOG`, default `info`.
    pub rust_log: String,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            Err(_) => 8080,
        };

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            host,
            port,
            rust_log,
        })
    }
}
