//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | MESA_API_URL | http://localhost:5000 | Backend base URL |
//! | MESA_TIMEOUT_SECS | 30 | Request timeout, 0 disables it |
//! | MESA_LOG_LEVEL | info | Log filter when RUST_LOG is unset |
//! | MESA_LOG_JSON | false | JSON log output |
//! | MESA_LOG_DIR | (unset) | Directory for daily rotated log files |

use std::time::Duration;

use crate::{ClientError, ClientResult, NetworkHttpClient};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the restaurant backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Request timeout in seconds, `None` waits forever
    pub timeout: Option<u64>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Some(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load from the environment (after `.env`, if present)
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys use defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("MESA_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let timeout = lookup("MESA_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(base_url).with_timeout(timeout)
    }

    /// Set the request timeout; 0 disables it
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = (seconds > 0).then_some(seconds);
        self
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Check the base URL before building a client
    pub fn validate(&self) -> ClientResult<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got '{url}'"
            )));
        }
        Ok(())
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Logging options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
    pub dir: Option<String>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            level: lookup("MESA_LOG_LEVEL").unwrap_or_else(|| "info".into()),
            json: lookup("MESA_LOG_JSON")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(false),
            dir: lookup("MESA_LOG_DIR").filter(|v| !v.trim().is_empty()),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
            dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout, Some(30));
    }

    #[test]
    fn zero_timeout_disables_it() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("MESA_API_URL", "http://10.0.0.2:8000"),
            ("MESA_TIMEOUT_SECS", "0"),
        ]));
        assert_eq!(config.base_url, "http://10.0.0.2:8000");
        assert_eq!(config.timeout_duration(), None);
    }

    #[test]
    fn rejects_url_without_scheme() {
        assert!(ClientConfig::new("localhost:5000").validate().is_err());
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn log_config_from_lookup() {
        let config = LogConfig::from_lookup(lookup(&[
            ("MESA_LOG_LEVEL", "debug"),
            ("MESA_LOG_JSON", "true"),
        ]));
        assert_eq!(config.level, "debug");
        assert!(config.json);
        assert_eq!(config.dir, None);
    }
}
