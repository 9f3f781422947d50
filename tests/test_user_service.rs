/// Integration tests for user management through the service layer
mod helpers;
use admin_console::domain::entities::{CreateUserRequest, UpdateUserRequest, UserStatus};
use admin_console::domain::errors::DomainError;
use admin_console::domain::table::{SortDirection, TableQuery};
use helpers::*;

fn new_user_request(email: &str) -> CreateUserRequest {
    CreateUserRequest {
        name: "Priya Patel".to_string(),
        email: email.to_string(),
        phone: Some("+1-555-0199".to_string()),
        status: None,
        role_id: "reporting-manager".to_string(),
    }
}

#[tokio::test]
async fn test_list_users_sorted_by_name_by_default() {
    let state = setup_state();
    let ctx = admin_ctx(&state).await;

    let page = state
        .users
        .list_users(&ctx, &state.users.default_query())
        .await
        .expect("Failed to list users");

    let names: Vec<&str> = page.rows.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Jane Smith", "John Doe", "Mike Johnson", "Sarah Wilson"]);
    assert_eq!(page.pagination.total, 4);
    assert_eq!(page.pagination.limit, 25);
}

#[tokio::test]
async fn test_list_users_filters_by_role_and_status() {
    let state = setup_state();
    let ctx = admin_ctx(&state).await;

    let query = TableQuery::new()
        .with_filter("roleId", "reporting-manager")
        .with_filter("status", "active");
    let page = state.users.list_users(&ctx, &query).await.unwrap();
    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.rows[0].name, "Jane Smith");

    let query = TableQuery::new().sorted_by("meta.updatedAt", SortDirection::Desc);
    let page = state.users.list_users(&ctx, &query).await.unwrap();
    assert_eq!(page.rows[0].name, "John Doe");
}

#[tokio::test]
async fn test_list_users_requires_view_permission() {
    let state = setup_state();
    let ctx = manager_ctx(&state).await;

    let result = state.users.list_users(&ctx, &TableQuery::new()).await;
    match result {
        Err(DomainError::Forbidden(msg)) => assert_eq!(msg, "Requires 'users.view' permission"),
        other => panic!("Expected Forbidden error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_create_user_normalizes_and_audits() {
    let state = setup_state();
    let ctx = admin_ctx(&state).await;

    let user = state
        .users
        .create_user(&ctx, new_user_request("  Priya.Patel@HealthEngage.com "))
        .await
        .expect("Failed to create user");

    assert_eq!(user.email, "priya.patel@healthengage.com");
    assert_eq!(user.status, UserStatus::Pending);
    assert_eq!(user.meta.created_by, "1");
    assert_eq!(user.meta.created_at, FIXED_NOW);

    let logs = state.audit.list_audit_logs(&ctx).await.unwrap();
    assert_eq!(logs.len(), 5);
    assert_eq!(logs[0].action, "user.create");
    assert_eq!(logs[0].entity_id, user.id);
    assert_eq!(logs[0].actor_name, "John Doe");
    assert!(logs[0].is_creation());
}

#[tokio::test]
async fn test_create_user_validation() {
    let state = setup_state();
    let ctx = admin_ctx(&state).await;

    let mut missing_name = new_user_request("priya@healthengage.com");
    missing_name.name = "   ".to_string();
    assert!(matches!(
        state.users.create_user(&ctx, missing_name).await,
        Err(DomainError::ValidationError(_))
    ));

    assert!(matches!(
        state.users.create_user(&ctx, new_user_request("not-an-email")).await,
        Err(DomainError::ValidationError(_))
    ));

    let mut unknown_role = new_user_request("priya@healthengage.com");
    unknown_role.role_id = "role-missing".to_string();
    assert!(matches!(
        state.users.create_user(&ctx, unknown_role).await,
        Err(DomainError::ValidationError(_))
    ));

    match state
        .users
        .create_user(&ctx, new_user_request("JANE.SMITH@healthengage.com"))
        .await
    {
        Err(DomainError::Conflict(msg)) => assert_eq!(msg, "Email already exists"),
        other => panic!("Expected Conflict error, got: {:?}", other),
    }

    // Nothing was written or audited
    let logs = state.audit.list_audit_logs(&ctx).await.unwrap();
    assert_eq!(logs.len(), 4);
}

#[tokio::test]
async fn test_update_user_records_before_and_after() {
    let state = setup_state();
    let ctx = admin_ctx(&state).await;

    let updated = state
        .users
        .update_user(
            &ctx,
            "3",
            UpdateUserRequest {
                status: Some(UserStatus::Active),
                role_id: Some("admin".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update user");

    assert_eq!(updated.status, UserStatus::Active);
    assert_eq!(updated.role_id, "admin");
    assert_eq!(updated.name, "Mike Johnson");
    assert_eq!(updated.meta.updated_at, FIXED_NOW);
    assert_eq!(updated.meta.updated_by, "1");

    let logs = state
        .audit
        .list_by_entity(&ctx, admin_console::domain::entities::EntityType::User, "3")
        .await
        .unwrap();
    assert_eq!(logs.len(), 1);
    let before = logs[0].before.as_ref().expect("before snapshot");
    let after = logs[0].after.as_ref().expect("after snapshot");
    assert_eq!(before["status"], "inactive");
    assert_eq!(after["status"], "active");
}

#[tokio::test]
async fn test_update_user_email_conflict() {
    let state = setup_state();
    let ctx = admin_ctx(&state).await;

    let result = state
        .users
        .update_user(
            &ctx,
            "3",
            UpdateUserRequest {
                email: Some("jane.smith@healthengage.com".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::Conflict(_))));

    // Keeping one's own email is not a conflict
    let result = state
        .users
        .update_user(
            &ctx,
            "3",
            UpdateUserRequest {
                email: Some("Mike.Johnson@healthengage.com".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let state = setup_state();
    let ctx = admin_ctx(&state).await;

    match state.users.get_user(&ctx, "404").await {
        Err(DomainError::NotFound(msg)) => assert_eq!(msg, "User with id 404 not found"),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
    assert!(matches!(
        state.users.delete_user(&ctx, "404").await,
        Err(DomainError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_user() {
    let state = setup_state();
    let ctx = admin_ctx(&state).await;

    state
        .users
        .delete_user(&ctx, "4")
        .await
        .expect("Failed to delete user");

    assert!(matches!(
        state.users.get_user(&ctx, "4").await,
        Err(DomainError::NotFound(_))
    ));

    let logs = state.audit.list_audit_logs(&ctx).await.unwrap();
    assert_eq!(logs[0].action, "user.delete");
    assert!(logs[0].is_deletion());
}

#[tokio::test]
async fn test_delete_requires_delete_permission() {
    let state = setup_state();
    let ctx = ctx_with_grants(&["users.view", "users.edit"]);

    match state.users.delete_user(&ctx, "4").await {
        Err(DomainError::Forbidden(msg)) => assert_eq!(msg, "Requires 'users.delete' permission"),
        other => panic!("Expected Forbidden error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_bulk_status_update_skips_unknown_ids() {
    let state = setup_state();
    let ctx = admin_ctx(&state).await;

    let ids = vec!["2".to_string(), "missing".to_string(), "4".to_string()];
    let updated = state
        .users
        .bulk_update_status(&ctx, &ids, UserStatus::Suspended)
        .await
        .expect("Bulk update failed");
    assert_eq!(updated, 2);

    let page = state
        .users
        .list_users(&ctx, &TableQuery::new().with_filter("status", "suspended"))
        .await
        .unwrap();
    let names: Vec<&str> = page.rows.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Jane Smith", "Sarah Wilson"]);

    // One audit entry per updated user
    let logs = state.audit.list_audit_logs(&ctx).await.unwrap();
    assert_eq!(logs.len(), 6);
}
