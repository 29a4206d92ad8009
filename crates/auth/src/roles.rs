use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::Permission;

/// Role identifier reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const ADMIN: Role = Role(Cow::Borrowed("admin"));
    pub const STAFF: Role = Role(Cow::Borrowed("staff"));
    pub const CUSTOMER: Role = Role(Cow::Borrowed("customer"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps roles to the permissions they grant.
///
/// The default policy: `admin` gets everything, `staff` may view inventory,
/// everyone else (including `customer`) gets nothing extra.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RolePolicy {
    overrides: Vec<(Role, Vec<Permission>)>,
}

impl RolePolicy {
    /// Replace the permissions granted to `role`.
    pub fn with_role(mut self, role: Role, permissions: Vec<Permission>) -> Self {
        self.overrides.retain(|(r, _)| r != &role);
        self.overrides.push((role, permissions));
        self
    }

    pub fn permissions_for(&self, role: &Role) -> Vec<Permission> {
        if let Some((_, perms)) = self.overrides.iter().find(|(r, _)| r == role) {
            return perms.clone();
        }
        match role.as_str() {
            "admin" => vec![Permission::WILDCARD],
            "staff" => vec![Permission::INVENTORY_READ],
            _ => Vec::new(),
        }
    }

    /// Union of permissions across roles, deduplicated.
    pub fn effective(&self, roles: &[Role]) -> Vec<Permission> {
        let mut out: Vec<Permission> = Vec::new();
        for role in roles {
            for perm in self.permissions_for(role) {
                if !out.contains(&perm) {
                    out.push(perm);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_grants_by_role() {
        let policy = RolePolicy::default();
        assert_eq!(policy.permissions_for(&Role::ADMIN), vec![Permission::WILDCARD]);
        assert_eq!(policy.permissions_for(&Role::STAFF), vec![Permission::INVENTORY_READ]);
        assert!(policy.permissions_for(&Role::CUSTOMER).is_empty());
        assert!(policy.permissions_for(&Role::new("auditor")).is_empty());
    }

    #[test]
    fn overrides_replace_defaults_and_dedupe() {
        let policy = RolePolicy::default().with_role(
            Role::STAFF,
            vec![Permission::INVENTORY_READ, Permission::INVENTORY_WRITE],
        );
        let effective = policy.effective(&[Role::STAFF, Role::STAFF, Role::CUSTOMER]);
        assert_eq!(
            effective,
            vec![Permission::INVENTORY_READ, Permission::INVENTORY_WRITE]
        );
    }
}
