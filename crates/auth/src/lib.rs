//! `frontdesk-auth` — pure route-access-control boundary.
//!
//! This crate decides, per navigation, whether the current session may
//! render a given screen. It is intentionally decoupled from storage and
//! the UI host: sessions come in as values (read elsewhere), decisions go
//! out as values (acted on elsewhere).

pub mod config;
pub mod guard;
pub mod routes;
pub mod session;

pub use config::GuardConfig;
pub use guard::{AccessDecision, AccessGuard, DenialReason, RouteTarget, SessionSource};
pub use routes::{RouteRegistry, RouteRule};
pub use session::{Session, SessionAgeError};
