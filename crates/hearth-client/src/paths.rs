//! Centralized path management for Hearth's on-disk files.
//!
//! Everything lives under the platform config directory, e.g.
//! `~/.config/hearth/` on Linux.

use std::path::PathBuf;

use hearth_core::{HearthError, Result};

/// Resolves the paths of Hearth's configuration and credential files.
pub struct HearthPaths;

impl HearthPaths {
    /// Returns the Hearth configuration directory.
    ///
    /// # Errors
    ///
    /// Fails when the platform config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("hearth"))
            .ok_or_else(|| HearthError::config("could not determine config directory"))
    }

    /// Path of the client configuration file (`config.toml`).
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Path of the persisted session credential (`session.json`).
    pub fn session_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("session.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_hearth() {
        let config_dir = HearthPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("hearth"));
    }

    #[test]
    fn test_files_live_under_config_dir() {
        let config_dir = HearthPaths::config_dir().unwrap();
        assert!(HearthPaths::config_file().unwrap().starts_with(&config_dir));
        assert!(HearthPaths::session_file().unwrap().starts_with(&config_dir));
    }
}
