//! PropertiesClient - REST implementation of the listing fetchers.
//!
//! Both operations follow the same discipline: verify a session exists
//! before touching the network, issue exactly one request with the session
//! credentials, and map the outcome onto the fetch-level error kinds.
//! In-flight requests are never cancelled; dropping stale settlements is
//! the dashboard controller's job.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use hearth_core::config::ClientConfig;
use hearth_core::listing::{ListingProvider, PropertyDetail, PropertySummary};
use hearth_core::session::SessionAccessor;
use hearth_core::{HearthError, Result};

use crate::http::parse_base_url;

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    #[allow(dead_code)]
    success: bool,
    data: Vec<PropertySummary>,
    meta: ListMeta,
}

#[derive(Debug, Deserialize)]
struct ListMeta {
    total: u64,
    user: String,
    timestamp: String,
}

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    success: bool,
    data: PropertyDetail,
    meta: DetailMeta,
}

#[derive(Debug, Deserialize)]
struct DetailMeta {
    timestamp: String,
}

/// Client for the listings endpoints.
///
/// Generic over the session accessor so the precondition logic can be
/// exercised without a live auth service.
pub struct PropertiesClient<S> {
    http: Client,
    base_url: Url,
    sessions: Arc<S>,
}

impl<S: SessionAccessor> PropertiesClient<S> {
    /// Creates a new client sharing the auth client's HTTP stack.
    ///
    /// # Arguments
    ///
    /// * `http` - The shared HTTP client carrying the session cookie jar
    /// * `config` - Connection settings
    /// * `sessions` - Session accessor consulted before every request
    pub fn new(http: Client, config: &ClientConfig, sessions: Arc<S>) -> Result<Self> {
        Ok(Self {
            http,
            base_url: parse_base_url(config)?,
            sessions,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn require_session(&self) -> Result<()> {
        if self.sessions.get_session().await.is_none() {
            return Err(HearthError::Unauthenticated);
        }
        Ok(())
    }
}

#[async_trait]
impl<S: SessionAccessor> ListingProvider for PropertiesClient<S> {
    async fn fetch_summaries(&self) -> Result<Vec<PropertySummary>> {
        self.require_session().await?;

        debug!("fetching property listings");
        let response = self.http.get(self.endpoint("/api/properties")).send().await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(HearthError::Unauthenticated);
        }
        if !status.is_success() {
            return Err(HearthError::request_failed(status.as_u16()));
        }

        let envelope: ListEnvelope = response.json().await?;
        // data.len() is the authoritative count; meta.total is advisory.
        if envelope.meta.total as usize != envelope.data.len() {
            warn!(
                advertised = envelope.meta.total,
                received = envelope.data.len(),
                "list meta.total disagrees with payload length"
            );
        }
        debug!(
            received = envelope.data.len(),
            user = %envelope.meta.user,
            timestamp = %envelope.meta.timestamp,
            "listing payload parsed"
        );
        Ok(envelope.data)
    }

    async fn fetch_detail(&self, property_id: &str) -> Result<PropertyDetail> {
        self.require_session().await?;

        debug!(id = %property_id, "fetching property detail");
        let response = self
            .http
            .get(self.endpoint(&format!("/api/properties/{}", property_id)))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(HearthError::Unauthenticated);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(HearthError::not_found(property_id));
        }
        if !status.is_success() {
            return Err(HearthError::request_failed(status.as_u16()));
        }

        let envelope: DetailEnvelope = response.json().await?;
        // A failure envelope on a 2xx status is still a failed request.
        if !envelope.success {
            warn!(id = %property_id, "detail envelope flagged failure on success status");
            return Err(HearthError::request_failed(status.as_u16()));
        }

        debug!(
            id = %envelope.data.summary.id,
            timestamp = %envelope.meta.timestamp,
            "detail payload parsed"
        );
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::listing::ListingStatus;
    use hearth_core::session::{Session, SessionSnapshot};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::watch;

    // Accessor that always reports "signed out" and counts resolutions.
    struct NoSessionAccessor {
        calls: AtomicUsize,
        sessions: watch::Sender<SessionSnapshot>,
    }

    impl NoSessionAccessor {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                sessions: watch::channel(SessionSnapshot::pending()).0,
            }
        }
    }

    #[async_trait]
    impl SessionAccessor for NoSessionAccessor {
        async fn get_session(&self) -> Option<Session> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            None
        }

        fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
            self.sessions.subscribe()
        }
    }

    fn offline_client(sessions: Arc<NoSessionAccessor>) -> PropertiesClient<NoSessionAccessor> {
        // Unroutable port: an issued request would surface as Transport,
        // so an Unauthenticated outcome proves no request was attempted.
        let config = ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: 1,
        };
        PropertiesClient::new(Client::new(), &config, sessions).unwrap()
    }

    #[tokio::test]
    async fn test_list_requires_session_before_any_network_call() {
        let sessions = Arc::new(NoSessionAccessor::new());
        let client = offline_client(sessions.clone());

        let err = client.fetch_summaries().await.unwrap_err();
        assert!(err.is_unauthenticated());
        assert_eq!(sessions.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_detail_requires_session_before_any_network_call() {
        let sessions = Arc::new(NoSessionAccessor::new());
        let client = offline_client(sessions.clone());

        let err = client.fetch_detail("42").await.unwrap_err();
        assert!(err.is_unauthenticated());
    }

    #[test]
    fn test_list_count_comes_from_payload_not_meta() {
        // meta.total disagrees with the payload on purpose; the payload wins.
        let json = r#"{
            "success": true,
            "data": [{
                "id": "prop_001",
                "title": "Sunny Craftsman",
                "address": "14 Alder Way",
                "price": 450000,
                "bedrooms": 3,
                "bathrooms": 2,
                "sqft": 1650,
                "type": "House",
                "status": "For Sale"
            }],
            "meta": { "total": 5, "user": "ada@example.com", "timestamp": "2025-05-01T09:30:00Z" }
        }"#;

        let envelope: ListEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.meta.total, 5);
        assert_eq!(envelope.data[0].status, ListingStatus::ForSale);
    }

    #[test]
    fn test_detail_envelope_keeps_failure_flag() {
        let json = r#"{
            "success": false,
            "data": {
                "id": "prop_001",
                "title": "Sunny Craftsman",
                "address": "14 Alder Way",
                "price": 450000,
                "bedrooms": 3,
                "bathrooms": 2,
                "sqft": 1650,
                "type": "House",
                "status": "Sold"
            },
            "meta": { "timestamp": "2025-05-01T09:30:00Z" }
        }"#;

        let envelope: DetailEnvelope = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
    }
}
