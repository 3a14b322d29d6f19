//! Configuration management

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::errors::{Error, Result};
use crate::core::options::DEFAULT_SERVER_URL;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "INTENTO_API_KEY";
/// Environment variable overriding the server URL
pub const SERVER_URL_ENV: &str = "INTENTO_SERVER_URL";
/// Environment variable setting the request timeout in milliseconds
pub const TIMEOUT_ENV: &str = "INTENTO_REQUEST_TIMEOUT_MS";

/// Configuration for a [`Client`](crate::Client) built from plain values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    pub server_url: String,
    /// 0 disables the timeout
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout_ms: 30000,
        }
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::config(format!("{} environment variable is required", API_KEY_ENV)))?;

        let server_url =
            std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        let timeout_ms = match std::env::var(TIMEOUT_ENV) {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|e| Error::config(format!("{}: {}", TIMEOUT_ENV, e)))?,
            Err(_) => Self::default().timeout_ms,
        };

        let config = Self {
            api_key,
            server_url,
            timeout_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::config("API key is required"));
        }

        if self.server_url.is_empty() {
            return Err(Error::config("server URL is required"));
        }

        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            return Err(Error::config(format!(
                "server URL must start with http:// or https://, got {}",
                self.server_url
            )));
        }

        Ok(())
    }

    /// Request timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}
