//! Error types for the Hearth application.
//!
//! This provides typed, structured error variants with automatic conversion
//! from common error types via the `From` trait.

use thiserror::Error;

/// A shared error type for the entire Hearth application.
///
/// The first four variants are the fetch-level kinds surfaced to the
/// dashboard as `FetchState::Failed(message)`; the rest cover transport,
/// configuration, and IO concerns of the surrounding application.
#[derive(Error, Debug, Clone)]
pub enum HearthError {
    /// No valid session exists for an operation that requires one
    #[error("You must be signed in to access this resource")]
    Unauthenticated,

    /// The server answered with a non-success status (or a failure envelope)
    #[error("Request failed with status {status}")]
    RequestFailed { status: u16 },

    /// The requested entity does not exist on the server
    #[error("Property not found: '{id}'")]
    NotFound { id: String },

    /// The response body could not be decoded into the expected envelope
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// The request never produced an HTTP status (connection, DNS, timeout)
    #[error("Network error: {message}")]
    Transport { message: String },

    /// Sign-in/sign-up rejected by the auth service
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HearthError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a RequestFailed error
    pub fn request_failed(status: u16) -> Self {
        Self::RequestFailed { status }
    }

    /// Creates a NotFound error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Creates a MalformedResponse error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates an Auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an Unauthenticated error
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// Check if this is a RequestFailed error
    pub fn is_request_failed(&self) -> bool {
        matches!(self, Self::RequestFailed { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a MalformedResponse error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for HearthError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for HearthError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for HearthError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<reqwest::Error> for HearthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse {
                message: err.to_string(),
            }
        } else {
            Self::Transport {
                message: err.to_string(),
            }
        }
    }
}

/// A type alias for `Result<T, HearthError>`.
pub type Result<T> = std::result::Result<T, HearthError>;
