//! Closed role model.
//!
//! Roles form a closed sum type rather than free-form strings: a persisted
//! session carrying anything outside these four variants fails to
//! deserialize, and an unreadable session denies access downstream.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Principal category determining route access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// External visitor checking in/out of a site.
    Visitor,
    /// Employee hosting visitors.
    Host,
    /// Security staff screening arrivals.
    Security,
    /// System administrator.
    Admin,
}

impl Role {
    /// All known roles, in declaration order.
    pub const ALL: [Role; 4] = [Role::Visitor, Role::Host, Role::Security, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Visitor => "visitor",
            Role::Host => "host",
            Role::Security => "security",
            Role::Admin => "admin",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visitor" => Ok(Role::Visitor),
            "host" => Ok(Role::Host),
            "security" => Ok(Role::Security),
            "admin" => Ok(Role::Admin),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn rejects_unknown_role() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert_eq!(err, DomainError::UnknownRole("superuser".to_string()));
    }

    #[test]
    fn rejects_wrong_case() {
        // Serialization is lowercase; anything else is not a known role.
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn serde_round_trip_is_lowercase() {
        let json = serde_json::to_string(&Role::Security).unwrap();
        assert_eq!(json, "\"security\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Security);
    }

    #[test]
    fn serde_rejects_unknown_variant() {
        assert!(serde_json::from_str::<Role>("\"root\"").is_err());
    }
}
