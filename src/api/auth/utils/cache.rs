//! Persisted session storage for the report bearer token.
//!
//! The token is kept as a small JSON file in the platform cache directory so
//! that the command line front end can reuse it across runs. Reading the file
//! only ever happens when a caller asks for a credential; request builders get
//! the resulting [`BearerToken`] passed in explicitly.

use super::token::BearerToken;
use crate::handler::error::ApiError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// A stored session: the bearer token and when it was saved.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionData {
    /// Raw bearer token as issued by the backend.
    pub token: String,
    /// Unix timestamp (seconds) when this entry was last written.
    pub timestamp: i64,
}

impl SessionData {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            timestamp: now(),
        }
    }

    /// Converts the stored token into a credential.
    ///
    /// # Errors
    /// Returns [`ApiError::NotAuthenticated`] if the stored token is blank.
    pub fn bearer(&self) -> Result<BearerToken, ApiError> {
        BearerToken::new(self.token.clone())
    }
}

/// Reads and writes the session file.
///
/// On Linux the file lives at `~/.cache/librassetdesk/session.json`
/// (or under `$XDG_CACHE_HOME` when set).
#[derive(Clone)]
pub struct SessionManager {
    cache_dir: PathBuf,
    cache_file: PathBuf,
}

impl SessionManager {
    /// Creates a manager rooted in the system cache directory.
    ///
    /// # Errors
    /// Returns [`ApiError::SessionError`] if the cache directory cannot be
    /// determined or created.
    pub fn new() -> Result<Self, ApiError> {
        let proj_dirs = ProjectDirs::from("com", "assetdesk", "librassetdesk").ok_or_else(|| {
            ApiError::SessionError("Cannot determine cache directory".to_string())
        })?;
        let cache_dir = proj_dirs.cache_dir().to_path_buf();
        let cache_file = cache_dir.join("session.json");
        fs::create_dir_all(&cache_dir)
            .map_err(|e| ApiError::SessionError(format!("Failed to create cache dir: {}", e)))?;
        Ok(Self {
            cache_dir,
            cache_file,
        })
    }

    /// Creates a manager with custom paths, mostly for tests.
    pub fn with_paths(cache_dir: PathBuf, cache_file: PathBuf) -> Self {
        Self {
            cache_dir,
            cache_file,
        }
    }

    pub fn save(&self, data: &SessionData) -> Result<(), ApiError> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.cache_file, json)
            .map_err(|e| ApiError::SessionError(format!("Failed to write session: {}", e)))
    }

    /// Validates and stores a new token, replacing any previous session.
    pub fn save_token(&self, token: &BearerToken) -> Result<SessionData, ApiError> {
        let data = SessionData::new(token.as_str());
        self.save(&data)?;
        log::info!("Session token {} saved", token.masked());
        Ok(data)
    }

    /// Loads the session file; `Ok(None)` if it does not exist.
    pub fn load(&self) -> Result<Option<SessionData>, ApiError> {
        if !self.cache_file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.cache_file)
            .map_err(|e| ApiError::SessionError(format!("Failed to read session: {}", e)))?;
        let data: SessionData = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    pub fn clear(&self) -> Result<(), ApiError> {
        if self.cache_file.exists() {
            fs::remove_file(&self.cache_file)
                .map_err(|e| ApiError::SessionError(format!("Failed to clear session: {}", e)))?;
        }
        Ok(())
    }

    pub fn cache_file_path(&self) -> &Path {
        &self.cache_file
    }

    pub fn cache_dir_path(&self) -> &Path {
        &self.cache_dir
    }
}

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(dir: &tempfile::TempDir) -> SessionManager {
        SessionManager::with_paths(dir.path().to_path_buf(), dir.path().join("session.json"))
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(manager(&dir).load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let sessions = manager(&dir);
        let token = BearerToken::new("tok-42").unwrap();
        sessions.save_token(&token).unwrap();

        let loaded = sessions.load().unwrap().expect("session stored");
        assert_eq!(loaded.bearer().unwrap(), token);
        assert_eq!(sessions.cache_dir_path(), dir.path());

        sessions.clear().unwrap();
        assert!(!sessions.cache_file_path().exists());
        sessions.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let sessions = manager(&dir);
        fs::write(sessions.cache_file_path(), "{not json").unwrap();
        assert!(matches!(sessions.load(), Err(ApiError::JsonError(_))));
    }
}
