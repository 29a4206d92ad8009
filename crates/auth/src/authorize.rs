use thiserror::Error;

use crate::Permission;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("not signed in")]
    Unauthenticated,

    #[error("forbidden: missing permission '{0}'")]
    Forbidden(String),
}

/// Check a permission against an effective permission set.
///
/// - No IO
/// - No panics
/// - Wildcard `"*"` grants everything
pub fn authorize(granted: &[Permission], required: &Permission) -> Result<(), AuthzError> {
    if granted.iter().any(|p| p.is_wildcard() || p == required) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required.as_str().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_grants_everything() {
        assert!(authorize(&[Permission::WILDCARD], &Permission::INVENTORY_WRITE).is_ok());
    }

    #[test]
    fn exact_permission_required() {
        let granted = [Permission::INVENTORY_READ];
        assert!(authorize(&granted, &Permission::INVENTORY_READ).is_ok());
        assert_eq!(
            authorize(&granted, &Permission::INVENTORY_WRITE),
            Err(AuthzError::Forbidden("inventory.write".into()))
        );
        assert!(authorize(&[], &Permission::INVENTORY_READ).is_err());
    }
}
