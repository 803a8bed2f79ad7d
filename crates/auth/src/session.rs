//! Session model.
//!
//! The client-held record of the currently authenticated principal. Written
//! by the login flow, read by the guard on every protected navigation,
//! destroyed on logout. Exactly one session exists at a time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use frontdesk_core::{Role, UserId};

/// The authenticated principal's client-visible state.
///
/// # Invariants
/// - `role` is always one of the closed set of variants; a persisted
///   payload carrying an unknown role fails to deserialize and is treated
///   as "no session" by the store.
/// - `username` is display-only and never consulted for access control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Backend-issued stable identifier of the principal.
    pub user_id: UserId,

    /// Role granted at login.
    pub role: Role,

    /// Display name, if the backend supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// When this session was established (client clock at login).
    pub issued_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: UserId, role: Role, issued_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            role,
            username: None,
            issued_at,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Deterministically check this session's age against a maximum.
    ///
    /// `now` is passed explicitly so callers (and tests) control the clock.
    /// A session issued in the future counts as expired: a client clock
    /// that has moved backwards is not a basis for extended trust.
    pub fn validate_age(&self, max_age: Duration, now: DateTime<Utc>) -> Result<(), SessionAgeError> {
        if now < self.issued_at {
            return Err(SessionAgeError::IssuedInFuture);
        }
        if now - self.issued_at > max_age {
            return Err(SessionAgeError::Expired);
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionAgeError {
    #[error("session has expired")]
    Expired,

    #[error("session issued_at is in the future")]
    IssuedInFuture,
}
