//! Roles and role assignments.
//!
//! A role assignment is what the storefront UI keys its capabilities off:
//! a tag, optionally paired with the object the role applies to (for a
//! franchisee, the franchise they administer).

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::FranchiseId;

/// Capability tag granted to a user.
///
/// Serialized lowercase to match the storefront wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular customer; the default role for registrations.
    Diner,
    /// Global administrator.
    Admin,
    /// Administers one franchise (carried in the assignment's `objectId`).
    Franchisee,
}

impl Role {
    /// The lowercase wire name of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diner => "diner",
            Self::Admin => "admin",
            Self::Franchisee => "franchisee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role plus the object it applies to, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    /// The granted role.
    pub role: Role,
    /// Identifier of the owned object (the administered franchise).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<FranchiseId>,
}

impl RoleAssignment {
    /// A plain diner assignment.
    #[must_use]
    pub const fn diner() -> Self {
        Self {
            role: Role::Diner,
            object_id: None,
        }
    }

    /// A global admin assignment.
    #[must_use]
    pub const fn admin() -> Self {
        Self {
            role: Role::Admin,
            object_id: None,
        }
    }

    /// A franchisee assignment over the given franchise.
    #[must_use]
    pub const fn franchisee(franchise: FranchiseId) -> Self {
        Self {
            role: Role::Franchisee,
            object_id: Some(franchise),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Diner).unwrap(), "\"diner\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&Role::Franchisee).unwrap(),
            "\"franchisee\""
        );
    }

    #[test]
    fn test_plain_assignment_omits_object_id() {
        let json = serde_json::to_string(&RoleAssignment::diner()).unwrap();
        assert_eq!(json, r#"{"role":"diner"}"#);
    }

    #[test]
    fn test_franchisee_assignment_carries_object_id() {
        let assignment = RoleAssignment::franchisee(FranchiseId::new(999));
        let json = serde_json::to_string(&assignment).unwrap();
        assert_eq!(json, r#"{"role":"franchisee","objectId":999}"#);
    }

    #[test]
    fn test_deserializes_without_object_id() {
        let assignment: RoleAssignment = serde_json::from_str(r#"{"role":"admin"}"#).unwrap();
        assert_eq!(assignment, RoleAssignment::admin());
    }

    #[test]
    fn test_display() {
        assert_eq!(Role::Franchisee.to_string(), "franchisee");
    }
}
