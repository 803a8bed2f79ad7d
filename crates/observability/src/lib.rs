//! `frontdesk-observability` — logging/tracing bootstrap.

pub mod tracing;

pub use tracing::{init, init_compact};
