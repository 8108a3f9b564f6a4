//! Shared HTTP plumbing for the remote clients.
//!
//! The auth client and the properties client share one `reqwest::Client`
//! backed by one cookie jar, so the session cookie captured at sign-in is
//! carried on every subsequent request automatically.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use reqwest::{Client, Url};

use hearth_core::config::ClientConfig;
use hearth_core::{HearthError, Result};

/// Name of the session cookie issued by the auth service.
pub(crate) const SESSION_COOKIE: &str = "better-auth.session_token";

/// Builds the shared HTTP client with the given cookie jar.
pub fn build_http_client(config: &ClientConfig, jar: Arc<Jar>) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .cookie_provider(jar)
        .build()
        .map_err(|e| HearthError::internal(format!("failed to build HTTP client: {}", e)))
}

/// Parses the configured base URL.
pub(crate) fn parse_base_url(config: &ClientConfig) -> Result<Url> {
    config
        .base_url_trimmed()
        .parse()
        .map_err(|e| HearthError::config(format!("invalid base URL '{}': {}", config.base_url, e)))
}

/// Finds the session cookie value among `Set-Cookie` header values.
pub(crate) fn find_session_cookie<'a>(mut values: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    values.find_map(|raw| {
        let name_value = raw.split(';').next()?;
        let (name, value) = name_value.split_once('=')?;
        (name.trim() == SESSION_COOKIE && !value.trim().is_empty()).then(|| value.trim())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_session_cookie_picks_the_right_header() {
        let headers = [
            "theme=dark; Path=/",
            "better-auth.session_token=tok_abc123; Path=/; HttpOnly; SameSite=Lax",
        ];
        assert_eq!(
            find_session_cookie(headers.iter().copied()),
            Some("tok_abc123")
        );
    }

    #[test]
    fn test_find_session_cookie_ignores_empty_and_foreign_values() {
        let headers = ["better-auth.session_token=; Max-Age=0", "other=1"];
        assert_eq!(find_session_cookie(headers.iter().copied()), None);
    }
}
