//! Access guard.
//!
//! The decision function gating every protected navigation. Policy is
//! deny-by-default: a missing session, an expired session, or a role not
//! explicitly listed all resolve to denial, never allowance.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::routes::{RouteRegistry, RouteRule};
use crate::session::Session;

/// Navigation destination (path within the host UI's router).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteTarget(String);

impl RouteTarget {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a navigation was denied.
///
/// Every reason collapses to the same redirect target; the code is carried
/// so logs can tell the cases apart and a future split stays a local change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// No session (absent, unreadable, or cleared).
    Unauthenticated,
    /// Session present but older than the configured maximum age.
    SessionExpired,
    /// Session present and current, but its role is not in the rule's set.
    RoleNotPermitted,
}

/// Outcome of one guard evaluation. Both variants are terminal for the
/// navigation attempt; the next attempt starts from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Render the requested content unchanged.
    Allow,
    /// Redirect to the unauthorized destination instead of rendering.
    Redirect {
        target: RouteTarget,
        reason: DenialReason,
    },
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

/// Read seam for the current session.
///
/// The guard takes the provider by reference instead of reaching into
/// ambient state, so tests can substitute an in-memory implementation.
pub trait SessionSource {
    /// The current session, or `None` when unauthenticated. Implementations
    /// must treat unreadable state as `None` (fail closed) and never panic.
    fn current(&self) -> Option<Session>;
}

/// Gate for rendering protected views.
///
/// Stateless across evaluations; each call is a pure function of the rule,
/// the session, and the clock.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    unauthorized_target: RouteTarget,
    max_session_age: Option<Duration>,
}

impl AccessGuard {
    pub const DEFAULT_UNAUTHORIZED: &'static str = "/unauthorized";

    /// Guard with the default denial target and no session expiry.
    pub fn new() -> Self {
        Self {
            unauthorized_target: RouteTarget::new(Self::DEFAULT_UNAUTHORIZED),
            max_session_age: None,
        }
    }

    pub fn with_unauthorized_target(mut self, target: RouteTarget) -> Self {
        self.unauthorized_target = target;
        self
    }

    /// Enforce a maximum session age. Without this, sessions never expire
    /// client-side (the historical behavior).
    pub fn with_max_session_age(mut self, max_age: Duration) -> Self {
        self.max_session_age = Some(max_age);
        self
    }

    pub fn unauthorized_target(&self) -> &RouteTarget {
        &self.unauthorized_target
    }

    /// Decide whether the current session may render a route guarded by
    /// `rule`.
    ///
    /// - No IO
    /// - No panics
    /// - Never raises: denial is an ordinary outcome, not an error
    pub fn evaluate(
        &self,
        rule: &RouteRule,
        session: Option<&Session>,
        now: DateTime<Utc>,
    ) -> AccessDecision {
        let Some(session) = session else {
            return self.deny(DenialReason::Unauthenticated);
        };

        if let Some(max_age) = self.max_session_age {
            if session.validate_age(max_age, now).is_err() {
                return self.deny(DenialReason::SessionExpired);
            }
        }

        if !rule.permits(session.role) {
            return self.deny(DenialReason::RoleNotPermitted);
        }

        AccessDecision::Allow
    }

    /// Evaluate a navigation to `path`: look up the rule, read the session
    /// from the provider, decide. Unregistered paths pass through.
    pub fn check(
        &self,
        registry: &RouteRegistry,
        path: &str,
        sessions: &dyn SessionSource,
        now: DateTime<Utc>,
    ) -> AccessDecision {
        let Some(rule) = registry.rule_for(path) else {
            tracing::debug!(path, "route is not guarded; passing through");
            return AccessDecision::Allow;
        };

        let session = sessions.current();
        let decision = self.evaluate(rule, session.as_ref(), now);

        match &decision {
            AccessDecision::Allow => {
                tracing::debug!(path, "navigation allowed");
            }
            AccessDecision::Redirect { target, reason } => {
                tracing::info!(path, ?reason, target = %target, "navigation denied");
            }
        }

        decision
    }

    fn deny(&self, reason: DenialReason) -> AccessDecision {
        AccessDecision::Redirect {
            target: self.unauthorized_target.clone(),
            reason,
        }
    }
}

impl Default for AccessGuard {
    fn default() -> Self {
        Self::new()
    }
}
