//! Session domain model.
//!
//! A session is created and destroyed entirely by the remote auth service;
//! Hearth only reads it. It is surfaced to the rest of the application as
//! present/absent plus the user attributes carried on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated session as reported by the auth service.
///
/// The wire format nests the user attributes under `user` and the session
/// attributes under `session`; field names are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Attributes of the signed-in user
    pub user: UserAccount,
    /// Attributes of the session itself
    #[serde(rename = "session")]
    pub info: SessionInfo,
}

/// User attributes carried on a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Server-issued user identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Whether the email address has been verified
    #[serde(default)]
    pub email_verified: bool,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Attributes of the session itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    /// When the session expires
    pub expires_at: DateTime<Utc>,
}

/// One observation on the session stream.
///
/// The stream's initial value is pending; consumers must not make any
/// gating decision until they have seen a settled (non-pending) snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// The current session, if any. Meaningless while `pending` is true.
    pub session: Option<Session>,
    /// True until the first session resolution completes.
    pub pending: bool,
}

impl SessionSnapshot {
    /// The initial, not-yet-resolved snapshot.
    pub fn pending() -> Self {
        Self {
            session: None,
            pending: true,
        }
    }

    /// A settled snapshot carrying the resolved session (or its absence).
    pub fn resolved(session: Option<Session>) -> Self {
        Self {
            session,
            pending: false,
        }
    }

    /// Returns true once resolved with a present session.
    pub fn is_authenticated(&self) -> bool {
        !self.pending && self.session.is_some()
    }
}
