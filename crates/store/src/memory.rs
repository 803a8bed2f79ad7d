//! In-memory session store for tests/dev.

use std::sync::RwLock;

use frontdesk_auth::{Session, SessionSource};

use crate::{SessionStore, SessionStoreError};

/// Session store backed by an in-process slot.
///
/// Holds the *serialized* payload rather than the deserialized value, so it
/// exercises the same parse-on-read path as the file store and lets tests
/// inject malformed payloads.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    slot: RwLock<Option<String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a raw payload in the slot, bypassing serialization. For tests
    /// simulating corrupted or hand-edited storage.
    pub fn inject_raw(&self, payload: impl Into<String>) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(payload.into());
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn write(&self, session: &Session) -> Result<(), SessionStoreError> {
        let payload = serde_json::to_string(session)
            .map_err(|e| SessionStoreError::Serialize(e.to_string()))?;
        let mut slot = self
            .slot
            .write()
            .map_err(|_| SessionStoreError::Storage("session slot lock poisoned".to_string()))?;
        *slot = Some(payload);
        Ok(())
    }

    fn read(&self) -> Option<Session> {
        // A poisoned lock reads as "no session" (fail closed).
        let slot = self.slot.read().ok()?;
        let payload = slot.as_deref()?;
        match serde_json::from_str(payload) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(%err, "stored session payload did not parse; treating as absent");
                None
            }
        }
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| SessionStoreError::Storage("session slot lock poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}

impl SessionSource for InMemorySessionStore {
    fn current(&self) -> Option<Session> {
        self.read()
    }
}
