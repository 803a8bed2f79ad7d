//! `frontdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage or transport
//! concerns): the closed role model, the opaque user identifier, and the
//! domain error model shared by the session and guard layers.

pub mod error;
pub mod id;
pub mod role;

pub use error::{DomainError, DomainResult};
pub use id::UserId;
pub use role::Role;
