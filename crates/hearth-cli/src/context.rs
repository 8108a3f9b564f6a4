//! Wiring of the remote clients for the CLI commands.

use std::sync::Arc;

use anyhow::Result;
use reqwest::cookie::Jar;

use hearth_app::{GuardState, RouteGuard};
use hearth_client::{AuthClient, CredentialStore, PropertiesClient, build_http_client, settings};
use hearth_core::session::SessionAccessor;

/// The assembled client stack: one HTTP client and cookie jar shared by
/// the auth and properties clients.
pub struct AppContext {
    pub auth: Arc<AuthClient>,
    pub properties: Arc<PropertiesClient<AuthClient>>,
}

impl AppContext {
    /// Loads configuration and connects the client stack.
    pub async fn connect() -> Result<Self> {
        let config = settings::load().await?;
        let jar = Arc::new(Jar::default());
        let http = build_http_client(&config, jar.clone())?;
        let credentials = CredentialStore::new()?;
        let auth = Arc::new(AuthClient::new(http.clone(), jar, &config, credentials).await?);
        let properties = Arc::new(PropertiesClient::new(http, &config, auth.clone())?);
        Ok(Self { auth, properties })
    }

    /// Resolves the route guard for the protected commands: kicks off a
    /// session refresh and waits for the guard's decision.
    pub async fn resolve_guard(&self) -> GuardState {
        let mut guard = RouteGuard::new(self.auth.subscribe());
        let auth = self.auth.clone();
        tokio::spawn(async move {
            auth.refresh().await;
        });
        guard.resolve().await
    }
}
