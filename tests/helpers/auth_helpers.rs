use admin_console::bootstrap::AppState;
use admin_console::domain::entities::{AuthUser, EntityMeta, Role};
use admin_console::domain::permissions::PermissionMatrix;
use admin_console::AuthContext;
use time::OffsetDateTime;

pub const ADMIN_EMAIL: &str = "john.doe@healthengage.com";
pub const MANAGER_EMAIL: &str = "jane.smith@healthengage.com";
pub const INACTIVE_EMAIL: &str = "mike.johnson@healthengage.com";
pub const PENDING_EMAIL: &str = "sarah.wilson@healthengage.com";

/// Signs in the seeded administrator, John Doe.
pub async fn admin_ctx(state: &AppState) -> AuthContext {
    state
        .auth
        .sign_in(ADMIN_EMAIL)
        .await
        .expect("Failed to sign in admin")
}

/// Signs in the seeded reporting manager, Jane Smith.
pub async fn manager_ctx(state: &AppState) -> AuthContext {
    state
        .auth
        .sign_in(MANAGER_EMAIL)
        .await
        .expect("Failed to sign in reporting manager")
}

/// Context for a user whose role is not stored, built from raw grant strings.
pub fn ctx_with_grants(grants: &[&str]) -> AuthContext {
    let role = Role {
        id: "role-test".to_string(),
        name: "Test Role".to_string(),
        description: "Role built for a test".to_string(),
        is_system_role: false,
        permissions: PermissionMatrix::from_grants(grants).expect("Invalid test grants"),
        meta: EntityMeta::new("system", OffsetDateTime::UNIX_EPOCH),
    };
    AuthContext::authenticated(AuthUser::new(
        "test-user".to_string(),
        "tester@example.com".to_string(),
        "Tester".to_string(),
        role,
    ))
}
