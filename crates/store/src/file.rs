//! File-backed session store.
//!
//! Persists the single session slot as a JSON file so it survives client
//! restarts. The file path is injected by the caller (typically under the
//! platform's app-data directory).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use frontdesk_auth::{Session, SessionSource};

use crate::{SessionStore, SessionStoreError};

/// Session store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn write(&self, session: &Session) -> Result<(), SessionStoreError> {
        let payload = serde_json::to_string(session)
            .map_err(|e| SessionStoreError::Serialize(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SessionStoreError::Storage(format!(
                    "failed to create session directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        std::fs::write(&self.path, payload).map_err(|e| {
            SessionStoreError::Storage(format!(
                "failed to write session file {}: {e}",
                self.path.display()
            ))
        })
    }

    fn read(&self) -> Option<Session> {
        let payload = match std::fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                // Storage unavailable reads as "no session" (fail closed).
                tracing::warn!(%err, path = %self.path.display(), "session file unreadable; treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&payload) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(%err, path = %self.path.display(), "session file did not parse; treating as absent");
                None
            }
        }
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionStoreError::Storage(format!(
                "failed to remove session file {}: {err}",
                self.path.display()
            ))),
        }
    }
}

impl SessionSource for FileSessionStore {
    fn current(&self) -> Option<Session> {
        self.read()
    }
}
