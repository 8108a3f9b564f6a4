//! AuthClient - remote auth service wrapper.
//!
//! Hearth never manages sessions itself: the remote service creates and
//! destroys them, and this client only reads the result. Accordingly,
//! every failure while resolving a session is normalized to "signed out"
//! rather than surfaced as an error.
//!
//! The client also carries the supplementary account operations
//! (sign-in, sign-up, sign-out) and owns the session watch channel that
//! the route guard consumes.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, warn};

use hearth_core::config::ClientConfig;
use hearth_core::session::{Session, SessionAccessor, SessionSnapshot};
use hearth_core::{HearthError, Result};

use crate::credentials::CredentialStore;
use crate::http::{SESSION_COOKIE, find_session_cookie, parse_base_url};

#[derive(Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct AuthErrorBody {
    message: Option<String>,
}

/// Client for the remote auth service.
///
/// Shares its `reqwest::Client` (and thus its cookie jar) with the
/// properties client, so a captured session cookie is sent on every
/// request to the backend.
pub struct AuthClient {
    http: Client,
    jar: Arc<Jar>,
    base_url: Url,
    credentials: CredentialStore,
    sessions: watch::Sender<SessionSnapshot>,
}

impl AuthClient {
    /// Creates the client and primes the cookie jar from the persisted
    /// credential, if one exists.
    ///
    /// # Arguments
    ///
    /// * `http` - The shared HTTP client (must use `jar` as its cookie provider)
    /// * `jar` - The shared cookie jar
    /// * `config` - Connection settings
    /// * `credentials` - The persisted-credential store
    pub async fn new(
        http: Client,
        jar: Arc<Jar>,
        config: &ClientConfig,
        credentials: CredentialStore,
    ) -> Result<Self> {
        let base_url = parse_base_url(config)?;

        if let Some(token) = credentials.load().await? {
            jar.add_cookie_str(&format!("{}={}", SESSION_COOKIE, token), &base_url);
            debug!("restored persisted session credential");
        }

        let (sessions, _) = watch::channel(SessionSnapshot::pending());

        Ok(Self {
            http,
            jar,
            base_url,
            credentials,
            sessions,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Resolves the current session and publishes a settled snapshot to
    /// all subscribers.
    pub async fn refresh(&self) -> Option<Session> {
        let session = self.get_session().await;
        self.sessions
            .send_replace(SessionSnapshot::resolved(session.clone()));
        session
    }

    /// Signs in with email and password.
    ///
    /// On success the session cookie from the response is persisted and a
    /// settled snapshot is published.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Auth`] with the server's message when the
    /// credentials are rejected.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let response = self
            .http
            .post(self.endpoint("/api/auth/sign-in/email"))
            .json(&SignInRequest { email, password })
            .send()
            .await?;

        self.accept_auth_response(response, "Failed to sign in").await
    }

    /// Registers a new account and signs it in.
    ///
    /// Password confirmation is form logic and belongs to the caller; this
    /// method takes the already-confirmed password.
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<Session> {
        let response = self
            .http
            .post(self.endpoint("/api/auth/sign-up/email"))
            .json(&SignUpRequest {
                name,
                email,
                password,
            })
            .send()
            .await?;

        self.accept_auth_response(response, "Failed to sign up").await
    }

    /// Signs out.
    ///
    /// The stored credential is dropped and a signed-out snapshot is
    /// published even when the server call fails; a failed revocation is
    /// indistinguishable from "already signed out" on this side.
    pub async fn sign_out(&self) -> Result<()> {
        match self.http.post(self.endpoint("/api/auth/sign-out")).send().await {
            Ok(response) if !response.status().is_success() => {
                warn!(status = %response.status(), "sign-out rejected by server");
            }
            Err(e) => warn!(error = %e, "sign-out request failed"),
            Ok(_) => {}
        }

        // Expire the cookie locally; the jar has no removal API.
        self.jar.add_cookie_str(
            &format!("{}=; Max-Age=0", SESSION_COOKIE),
            &self.base_url,
        );
        self.credentials.clear().await?;
        self.sessions.send_replace(SessionSnapshot::resolved(None));
        Ok(())
    }

    async fn accept_auth_response(
        &self,
        response: reqwest::Response,
        fallback_message: &str,
    ) -> Result<Session> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<AuthErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| fallback_message.to_string());
            return Err(HearthError::auth(message));
        }

        // The jar already absorbed the Set-Cookie; persist the raw value so
        // later invocations can restore it.
        let set_cookies: Vec<String> = response
            .headers()
            .get_all(reqwest::header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok().map(str::to_string))
            .collect();
        if let Some(token) = find_session_cookie(set_cookies.iter().map(String::as_str)) {
            self.credentials.save(token).await?;
        } else {
            warn!("auth response carried no session cookie");
        }

        self.refresh()
            .await
            .ok_or_else(|| HearthError::internal("session not established after sign-in"))
    }
}

#[async_trait]
impl SessionAccessor for AuthClient {
    /// Resolves the current session via `GET /api/auth/get-session`.
    ///
    /// Never errors: transport failures, non-success statuses, and
    /// undecodable bodies all resolve to `None`.
    async fn get_session(&self) -> Option<Session> {
        let response = match self
            .http
            .get(self.endpoint("/api/auth/get-session"))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                debug!(error = %e, "session resolution failed");
                return None;
            }
        };

        if response.status() == StatusCode::UNAUTHORIZED {
            return None;
        }
        if !response.status().is_success() {
            debug!(status = %response.status(), "session endpoint answered non-success");
            return None;
        }

        // The service answers `null` when no session exists.
        match response.json::<Option<Session>>().await {
            Ok(session) => session,
            Err(e) => {
                debug!(error = %e, "undecodable session payload");
                None
            }
        }
    }

    fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.sessions.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    use crate::http::build_http_client;

    async fn offline_client(temp_dir: &TempDir) -> AuthClient {
        // Unroutable port: any issued request fails at the transport layer.
        let config = ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: 1,
        };
        let jar = Arc::new(Jar::default());
        let http = build_http_client(&config, jar.clone()).unwrap();
        let credentials = CredentialStore::with_path(temp_dir.path().join("session.json"));
        AuthClient::new(http, jar, &config, credentials).await.unwrap()
    }

    #[tokio::test]
    async fn test_get_session_normalizes_transport_failure_to_none() {
        let temp_dir = TempDir::new().unwrap();
        let client = offline_client(&temp_dir).await;
        assert!(client.get_session().await.is_none());
    }

    #[tokio::test]
    async fn test_subscribe_starts_pending_and_refresh_settles() {
        let temp_dir = TempDir::new().unwrap();
        let client = offline_client(&temp_dir).await;

        let rx = client.subscribe();
        assert!(rx.borrow().pending);

        client.refresh().await;
        let snapshot = rx.borrow().clone();
        assert!(!snapshot.pending);
        assert!(snapshot.session.is_none());
    }

    #[tokio::test]
    async fn test_sign_out_clears_persisted_credential_even_offline() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::with_path(temp_dir.path().join("session.json"));
        store.save("tok_stale").await.unwrap();

        let config = ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: 1,
        };
        let jar = Arc::new(Jar::default());
        let http = build_http_client(&config, jar.clone()).unwrap();
        let client = AuthClient::new(http, jar, &config, store).await.unwrap();

        client.sign_out().await.unwrap();

        let store = CredentialStore::with_path(temp_dir.path().join("session.json"));
        assert_eq!(store.load().await.unwrap(), None);
        assert!(!client.subscribe().borrow().pending);
    }
}
