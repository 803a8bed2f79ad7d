//! Route access rules.
//!
//! Each protected route declares the set of roles allowed to render it.
//! Rules are declared once at registration time and immutable thereafter;
//! a route with no rule is outside the guard's scope entirely.

use std::collections::{HashMap, HashSet};

use frontdesk_core::{DomainError, DomainResult, Role};

/// Allowed-role set declared by a protected route.
///
/// # Invariants
/// - The set is non-empty (an empty set would make the route permanently
///   unreachable; constructing one is a registration bug, caught here).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    allowed_roles: HashSet<Role>,
}

impl RouteRule {
    pub fn new(allowed_roles: impl IntoIterator<Item = Role>) -> DomainResult<Self> {
        let allowed_roles: HashSet<Role> = allowed_roles.into_iter().collect();
        if allowed_roles.is_empty() {
            return Err(DomainError::validation(
                "route rule requires at least one allowed role",
            ));
        }
        Ok(Self { allowed_roles })
    }

    pub fn permits(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }

    pub fn allowed_roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.allowed_roles.iter().copied()
    }
}

/// Static map from route path to its access rule.
///
/// Built once at startup via [`register`](RouteRegistry::register), then
/// only read. Paths without an entry are unguarded by this core.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    rules: HashMap<String, RouteRule>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a protected route. Re-registering a path replaces its rule.
    pub fn register(
        mut self,
        path: impl Into<String>,
        allowed_roles: impl IntoIterator<Item = Role>,
    ) -> DomainResult<Self> {
        self.rules.insert(path.into(), RouteRule::new(allowed_roles)?);
        Ok(self)
    }

    pub fn rule_for(&self, path: &str) -> Option<&RouteRule> {
        self.rules.get(path)
    }

    pub fn is_guarded(&self, path: &str) -> bool {
        self.rules.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_rejects_empty_role_set() {
        assert!(RouteRule::new([]).is_err());
    }

    #[test]
    fn rule_membership() {
        let rule = RouteRule::new([Role::Host, Role::Admin]).unwrap();
        assert!(rule.permits(Role::Host));
        assert!(rule.permits(Role::Admin));
        assert!(!rule.permits(Role::Visitor));
        assert!(!rule.permits(Role::Security));
    }

    #[test]
    fn duplicate_roles_collapse() {
        let rule = RouteRule::new([Role::Admin, Role::Admin]).unwrap();
        assert_eq!(rule.allowed_roles().count(), 1);
    }

    #[test]
    fn registry_lookup() {
        let registry = RouteRegistry::new()
            .register("/admin/users", [Role::Admin])
            .unwrap()
            .register("/visits", [Role::Host, Role::Security])
            .unwrap();

        assert!(registry.is_guarded("/admin/users"));
        assert!(registry.rule_for("/visits").unwrap().permits(Role::Security));
        // Unregistered paths fall outside the guard's scope.
        assert!(registry.rule_for("/login").is_none());
    }

    #[test]
    fn re_registration_replaces_rule() {
        let registry = RouteRegistry::new()
            .register("/visits", [Role::Host])
            .unwrap()
            .register("/visits", [Role::Security])
            .unwrap();

        let rule = registry.rule_for("/visits").unwrap();
        assert!(rule.permits(Role::Security));
        assert!(!rule.permits(Role::Host));
    }
}
