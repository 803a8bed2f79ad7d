//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (validation, invariants).
/// Storage concerns belong to `frontdesk-store`; access denials are not
/// errors at all (the guard is infallible).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an empty allowed-role set).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty user id).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A role string was not one of the known variants.
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
