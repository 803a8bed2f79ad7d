//! Guard configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use frontdesk_core::{DomainError, DomainResult};

use crate::guard::{AccessGuard, RouteTarget};

/// Deserializable guard settings.
///
/// Defaults preserve the historical behavior: a single `/unauthorized`
/// denial target and no client-side session expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Destination for every denial, regardless of reason.
    pub unauthorized_target: String,

    /// Maximum session age in seconds; `None` disables expiry.
    pub max_session_age_secs: Option<u64>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            unauthorized_target: AccessGuard::DEFAULT_UNAUTHORIZED.to_string(),
            max_session_age_secs: None,
        }
    }
}

impl GuardConfig {
    pub fn build(&self) -> DomainResult<AccessGuard> {
        if self.unauthorized_target.is_empty() {
            return Err(DomainError::validation(
                "unauthorized_target must not be empty",
            ));
        }

        let mut guard =
            AccessGuard::new().with_unauthorized_target(RouteTarget::new(&self.unauthorized_target));

        if let Some(secs) = self.max_session_age_secs {
            let max_age = i64::try_from(secs)
                .ok()
                .and_then(Duration::try_seconds)
                .ok_or_else(|| DomainError::validation("max_session_age_secs is out of range"))?;
            guard = guard.with_max_session_age(max_age);
        }

        Ok(guard)
    }
}
