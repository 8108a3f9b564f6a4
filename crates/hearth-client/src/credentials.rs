//! Persisted session credential.
//!
//! Stores the raw session-cookie value at `~/.config/hearth/session.json`
//! so separate CLI invocations share one session. This file holds a
//! credential only — listing data is never cached.
//!
//! # Security Note
//!
//! The credential is stored as plaintext JSON; the file should carry
//! restrictive permissions.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use hearth_core::{HearthError, Result};

use crate::paths::HearthPaths;

#[derive(Serialize, Deserialize)]
struct StoredCredential {
    token: String,
}

/// Read/write access to the persisted session credential.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Creates a store at the default path (`~/.config/hearth/session.json`).
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: HearthPaths::session_file()?,
        })
    }

    /// Creates a store at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the stored session token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(token))`: a credential is stored
    /// - `Ok(None)`: no credential file exists
    /// - `Err(_)`: the file exists but could not be read or parsed
    pub async fn load(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let stored: StoredCredential = serde_json::from_str(&raw)
                    .map_err(|e| HearthError::config(format!("invalid session file: {}", e)))?;
                Ok(Some(stored.token))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Persists a session token, creating the config directory if needed.
    pub async fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let stored = StoredCredential {
            token: token.to_string(),
        };
        let raw = serde_json::to_string_pretty(&stored)
            .map_err(|e| HearthError::internal(format!("failed to encode credential: {}", e)))?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }

    /// Removes the stored credential. Succeeds when no file exists.
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::with_path(temp_dir.path().join("session.json"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::with_path(temp_dir.path().join("nested").join("session.json"));

        store.save("tok_abc123").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some("tok_abc123".to_string()));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::with_path(temp_dir.path().join("session.json"));

        store.save("tok_abc123").await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let store = CredentialStore::with_path(path);
        assert!(store.load().await.is_err());
    }
}
