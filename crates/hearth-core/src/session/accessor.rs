//! Session accessor trait.
//!
//! Defines the read-only seam between Hearth and the remote auth service.

use async_trait::async_trait;
use tokio::sync::watch;

use super::model::{Session, SessionSnapshot};

/// Read-only access to the externally managed session.
///
/// This trait abstracts the auth service so the fetchers and the route
/// guard can be exercised against mock implementations. Implementations
/// never mutate the session; the remote service is its only writer.
///
/// # Contract
///
/// - `get_session` never errors: any transport or validation failure is
///   normalized to `None`.
/// - `subscribe` hands out a receiver whose current value may still be
///   pending; consumers must wait for a settled [`SessionSnapshot`]
///   before acting on it.
#[async_trait]
pub trait SessionAccessor: Send + Sync {
    /// Resolves the current session, or `None` when no valid session exists.
    async fn get_session(&self) -> Option<Session>;

    /// Subscribes to session changes.
    ///
    /// The watch channel buffers the latest value, so late subscribers
    /// still observe the most recent snapshot immediately.
    fn subscribe(&self) -> watch::Receiver<SessionSnapshot>;
}
