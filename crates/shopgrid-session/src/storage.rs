//! Durable session storage.
//!
//! One JSON file holding the token pair and the principal snapshot. Writes
//! go through a sibling temp file and an atomic rename so a crash never
//! leaves a half-written session behind.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SessionResult;
use shopgrid_core::types::User;

/// The persisted shape: token pair plus the principal snapshot adopted
/// optimistically on restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    /// Stored but never exchanged; expiry surfaces as a 401.
    pub refresh_token: String,
    pub user: User,
}

/// File-backed session persistence.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored session, if one exists.
    ///
    /// A missing file is `Ok(None)`; an unreadable or unparseable file is an
    /// error the caller treats as an invalid session.
    pub fn load(&self) -> SessionResult<Option<StoredSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&raw)?;
        Ok(Some(session))
    }

    /// Persists the session, replacing any previous one.
    pub fn save(&self, session: &StoredSession) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(session)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Deletes the stored session. Deleting a session that does not exist is
    /// not an error.
    pub fn clear(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopgrid_core::types::Role;

    fn sample_user() -> User {
        serde_json::from_str(r#"{"id":1,"username":"alice","role":"staff","shop":2}"#).unwrap()
    }

    #[test]
    fn save_load_clear_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SessionStorage::new(dir.path().join("session.json"));

        assert!(storage.load().unwrap().is_none());

        storage
            .save(&StoredSession {
                access_token: "tok".to_string(),
                refresh_token: "rtok".to_string(),
                user: sample_user(),
            })
            .unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded.access_token, "tok");
        assert_eq!(loaded.user.role, Role::Staff);
        assert_eq!(loaded.user.shop_id(), Some(2));

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());

        // Clearing twice is fine
        storage.clear().unwrap();
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = SessionStorage::new(path);
        assert!(storage.load().is_err());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SessionStorage::new(dir.path().join("nested/dir/session.json"));

        storage
            .save(&StoredSession {
                access_token: "tok".to_string(),
                refresh_token: "rtok".to_string(),
                user: sample_user(),
            })
            .unwrap();

        assert!(storage.load().unwrap().is_some());
    }
}
