use crate::domain::entities::AuthUser;
use crate::domain::permissions::{grant_key, GrantSet};

/// Service for checking module/action permissions against a grant set
/// Every (module, action) pair must be granted explicitly; nothing implies anything else
pub struct PermissionService;

impl PermissionService {
    /// Check if the grant set contains `"<module>.<action>"`
    pub fn has_permission(grants: &GrantSet, module: &str, action: &str) -> bool {
        grants.contains(&grant_key(module, action))
    }

    /// Check a possibly absent user; no user means no permissions at all
    pub fn user_has_permission(user: Option<&AuthUser>, module: &str, action: &str) -> bool {
        match user {
            Some(user) => Self::has_permission(&user.permissions, module, action),
            None => false,
        }
    }

    /// Returns true if at least one of the (module, action) pairs is granted
    pub fn has_any_permission(grants: &GrantSet, checks: &[(&str, &str)]) -> bool {
        checks
            .iter()
            .any(|(module, action)| Self::has_permission(grants, module, action))
    }

    /// Returns true only if every (module, action) pair is granted
    pub fn has_all_permissions(grants: &GrantSet, checks: &[(&str, &str)]) -> bool {
        checks
            .iter()
            .all(|(module, action)| Self::has_permission(grants, module, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{EntityMeta, Role};
    use crate::domain::permissions::PermissionMatrix;

    fn grants(items: &[&str]) -> GrantSet {
        items.iter().copied().collect()
    }

    fn create_test_user(permissions: &[&str]) -> AuthUser {
        let now = time::OffsetDateTime::UNIX_EPOCH;
        let role = Role {
            id: "role-1".to_string(),
            name: "Support".to_string(),
            description: "Support role".to_string(),
            is_system_role: false,
            permissions: PermissionMatrix::from_grants(permissions).unwrap(),
            meta: EntityMeta::new("system", now),
        };
        AuthUser::new(
            "u-1".to_string(),
            "support@example.com".to_string(),
            "Support".to_string(),
            role,
        )
    }

    #[test]
    fn test_has_permission_is_set_membership() {
        let g = grants(&["users.view", "users.edit", "audit.view"]);

        assert!(PermissionService::has_permission(&g, "users", "view"));
        assert!(PermissionService::has_permission(&g, "users", "edit"));
        assert!(PermissionService::has_permission(&g, "audit", "view"));
        assert!(!PermissionService::has_permission(&g, "users", "delete"));
        assert!(!PermissionService::has_permission(&g, "roles", "view"));
    }

    #[test]
    fn test_no_implied_permissions() {
        // edit does not imply view
        let g = grants(&["users.edit"]);
        assert!(!PermissionService::has_permission(&g, "users", "view"));
    }

    #[test]
    fn test_unknown_module_or_action_is_a_miss() {
        let g = grants(&["users.view"]);
        assert!(!PermissionService::has_permission(&g, "payroll", "view"));
        assert!(!PermissionService::has_permission(&g, "users", "approve"));
        assert!(!PermissionService::has_permission(&g, "", ""));
    }

    #[test]
    fn test_no_normalization() {
        let g = grants(&["users.view"]);
        assert!(!PermissionService::has_permission(&g, "Users", "view"));
        assert!(!PermissionService::has_permission(&g, "users", "VIEW"));
    }

    #[test]
    fn test_absent_user_denies_everything() {
        assert!(!PermissionService::user_has_permission(None, "users", "view"));

        let user = create_test_user(&["users.view"]);
        assert!(PermissionService::user_has_permission(Some(&user), "users", "view"));
        assert!(!PermissionService::user_has_permission(Some(&user), "users", "edit"));
    }

    #[test]
    fn test_has_any_permission() {
        let g = grants(&["roles.delete"]);
        assert!(PermissionService::has_any_permission(
            &g,
            &[("roles", "edit"), ("roles", "delete")]
        ));
        assert!(!PermissionService::has_any_permission(
            &g,
            &[("roles", "edit"), ("users", "delete")]
        ));
        assert!(!PermissionService::has_any_permission(&g, &[]));
    }

    #[test]
    fn test_has_all_permissions() {
        let g = grants(&["roles.edit", "roles.delete"]);
        assert!(PermissionService::has_all_permissions(
            &g,
            &[("roles", "edit"), ("roles", "delete")]
        ));
        assert!(!PermissionService::has_all_permissions(
            &g,
            &[("roles", "edit"), ("roles", "create")]
        ));
    }

    #[test]
    fn test_user_grants_derive_from_role_matrix() {
        let user = create_test_user(&["reports.view", "reports.create"]);
        assert_eq!(user.permissions, user.role.permissions.grants());
        assert_eq!(user.permissions.len(), 2);
    }
}
