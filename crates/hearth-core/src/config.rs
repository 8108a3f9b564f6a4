//! Client configuration model.
//!
//! Loading from disk and environment lives in `hearth-client`; this is the
//! version-agnostic model the rest of the application consumes.

use serde::{Deserialize, Serialize};

/// Default base URL of the backend, matching the development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings shared by the auth and listings clients.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the backend server
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Returns the base URL without a trailing slash.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: ClientConfig = toml::from_str(r#"base_url = "https://hearth.example""#).unwrap();
        assert_eq!(config.base_url, "https://hearth.example");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_base_url_trimmed() {
        let config: ClientConfig = toml::from_str(r#"base_url = "https://hearth.example/""#).unwrap();
        assert_eq!(config.base_url_trimmed(), "https://hearth.example");
    }
}
