//! Client configuration loading.
//!
//! Reads `~/.config/hearth/config.toml` into the core
//! [`ClientConfig`] model, falling back to defaults when no file exists.
//! `HEARTH_BASE_URL` overrides the configured base URL.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use hearth_core::Result;
use hearth_core::config::ClientConfig;

use crate::paths::HearthPaths;

/// Environment variable overriding the configured base URL.
pub const BASE_URL_ENV: &str = "HEARTH_BASE_URL";

/// Loads the client configuration from the default location.
///
/// A missing file yields the defaults; a present-but-invalid file is an
/// error.
pub async fn load() -> Result<ClientConfig> {
    let path = HearthPaths::config_file()?;
    let config = load_from(&path).await?;
    Ok(apply_base_url_override(
        config,
        std::env::var(BASE_URL_ENV).ok(),
    ))
}

/// Loads the client configuration from a specific path.
pub async fn load_from(path: &Path) -> Result<ClientConfig> {
    match tokio::fs::read_to_string(path).await {
        Ok(raw) => {
            let config: ClientConfig = toml::from_str(&raw)?;
            debug!(path = %path.display(), base_url = %config.base_url, "loaded client config");
            Ok(config)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(ClientConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn apply_base_url_override(mut config: ClientConfig, base_url: Option<String>) -> ClientConfig {
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_from(&temp_dir.path().join("config.toml")).await.unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[tokio::test]
    async fn test_loads_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        tokio::fs::write(&path, "base_url = \"https://hearth.example\"\nrequest_timeout_secs = 5\n")
            .await
            .unwrap();

        let config = load_from(&path).await.unwrap();
        assert_eq!(config.base_url, "https://hearth.example");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[tokio::test]
    async fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        tokio::fs::write(&path, "base_url = [nope").await.unwrap();

        assert!(load_from(&path).await.is_err());
    }

    #[test]
    fn test_env_override_wins() {
        let config = apply_base_url_override(
            ClientConfig::default(),
            Some("https://staging.hearth.example".to_string()),
        );
        assert_eq!(config.base_url, "https://staging.hearth.example");

        let config = apply_base_url_override(ClientConfig::default(), None);
        assert_eq!(config.base_url, ClientConfig::default().base_url);
    }
}
