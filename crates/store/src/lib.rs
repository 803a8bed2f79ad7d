//! `frontdesk-store` — the session store boundary.
//!
//! Holds the single current [`Session`] across page reloads. Two
//! implementations of the same contract: an in-memory store for tests/dev
//! and a file-backed store for real clients. The read side never fails:
//! an absent slot, an unparseable payload, and an inaccessible backing
//! medium all read as "no session", which the guard's deny-by-default
//! policy turns into a denial rather than a grant.

pub mod file;
pub mod memory;

use thiserror::Error;

use frontdesk_auth::Session;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;

/// Session store error (write/clear side only; reads fail soft).
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("failed to serialize session: {0}")]
    Serialize(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Read/write/clear access to the single current session.
///
/// Exactly one session slot exists per store; `write` overwrites any prior
/// value (last write wins, single-writer assumed). Implementations also
/// provide [`frontdesk_auth::SessionSource`] so they can be handed to the
/// guard by reference.
pub trait SessionStore: Send + Sync {
    /// Persist `session`, replacing any prior one. No role validation
    /// happens here; the closed role enum already makes invalid roles
    /// unrepresentable in a `Session` value.
    fn write(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// The persisted session, or `None` when the slot is empty, the
    /// payload does not parse, or the backing medium is unavailable.
    /// Never errors, never panics.
    fn read(&self) -> Option<Session>;

    /// Remove the persisted session. Idempotent: clearing an empty store
    /// is `Ok(())`.
    fn clear(&self) -> Result<(), SessionStoreError>;
}
