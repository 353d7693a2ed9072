//! Session storage implementation
//!
//! The login flow persists identity records in a JSON key-value file, the
//! terminal counterpart of browser local storage. Values are usually
//! JSON-encoded strings (`"hostel": "{\"_id\":\"h1\"}"`), but inline objects
//! are accepted too. This module only reads the file.

use std::path::{Path, PathBuf};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use crate::utils::errors::{HostelMateError, Result};
use super::context::{SessionContext, ADMIN_KEY, HOSTEL_KEY, STUDENT_KEY};

/// File-backed, read-only view of client session storage
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a new session store for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all entries; a missing file is an empty store
    pub async fn entries(&self) -> Result<Map<String, Value>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No session storage file found");
                return Ok(Map::new());
            }
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(entries) => Ok(entries),
            _ => Err(HostelMateError::InvalidInput(format!(
                "Session storage {} is not a JSON object",
                self.path.display()
            ))),
        }
    }

    /// Load the session identities into an immutable context.
    ///
    /// An entry that cannot be parsed is treated as absent, so the affected
    /// views fail with a missing-session error instead of sending a
    /// malformed request.
    pub async fn load_context(&self) -> Result<SessionContext> {
        let entries = self.entries().await?;

        let context = SessionContext {
            admin: parse_entry(&entries, ADMIN_KEY),
            hostel: parse_entry(&entries, HOSTEL_KEY),
            student: parse_entry(&entries, STUDENT_KEY),
        };

        debug!(
            has_admin = context.admin.is_some(),
            has_hostel = context.hostel.is_some(),
            has_student = context.student.is_some(),
            "Session context loaded"
        );
        Ok(context)
    }
}

fn parse_entry<T: DeserializeOwned>(entries: &Map<String, Value>, key: &str) -> Option<T> {
    let parsed = match entries.get(key)? {
        Value::Null => return None,
        Value::String(encoded) => serde_json::from_str::<T>(encoded),
        other => serde_json::from_value::<T>(other.clone()),
    };

    match parsed {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key = key, error = %e, "Ignoring unreadable session entry");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn store_with(content: &str) -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(&path, content).await.unwrap();
        (dir, SessionStore::new(path))
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("absent.json"));
        let context = store.load_context().await.unwrap();
        assert!(context.is_empty());
    }

    #[tokio::test]
    async fn test_string_encoded_entries() {
        let content = json!({
            "admin": "{\"_id\":\"a1\",\"name\":\"Warden\"}",
            "hostel": "{\"_id\":\"h1\",\"name\":\"Block A\"}"
        })
        .to_string();
        let (_dir, store) = store_with(&content).await;

        let context = store.load_context().await.unwrap();
        assert_eq!(context.hostel_id().unwrap(), "h1");
        assert_eq!(context.admin.unwrap().name.as_deref(), Some("Warden"));
        assert!(context.student.is_none());
    }

    #[tokio::test]
    async fn test_inline_objects_and_bad_entries() {
        let content = json!({
            "student": {"_id": "s1", "name": "Ayesha", "cms_id": 366, "room_no": 12},
            "hostel": "not json"
        })
        .to_string();
        let (_dir, store) = store_with(&content).await;

        let context = store.load_context().await.unwrap();
        assert_eq!(context.student_id().unwrap(), "s1");
        assert!(context.hostel.is_none());
    }

    #[tokio::test]
    async fn test_non_object_file_is_rejected() {
        let (_dir, store) = store_with("[1, 2, 3]").await;
        assert!(store.load_context().await.is_err());
    }
}
