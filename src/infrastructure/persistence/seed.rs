use crate::domain::entities::{AuditLog, EntityMeta, EntityType, Role, User, UserStatus};
use crate::domain::permissions::catalog::{BI_DASHBOARDS, CORPORATE_WELLNESS, REPORTS, SMART_ENGAGE};
use crate::domain::permissions::{ModuleAction, PermissionMatrix, MODULE_DEFINITIONS};
use serde_json::json;
use time::macros::datetime;
use time::OffsetDateTime;

pub const SYSTEM_ACTOR: &str = "system";
pub const ADMIN_ROLE_ID: &str = "admin";
pub const REPORTING_MANAGER_ROLE_ID: &str = "reporting-manager";

fn seed_meta(actor: &str, created: OffsetDateTime, updated: OffsetDateTime) -> EntityMeta {
    EntityMeta {
        created_by: actor.to_string(),
        updated_by: actor.to_string(),
        created_at: created,
        updated_at: updated,
    }
}

/// Administrator gets every action each module offers; Reporting Manager is view-only analytics.
pub fn default_roles() -> Vec<Role> {
    let created = datetime!(2024-01-01 00:00 UTC);

    let admin_permissions = MODULE_DEFINITIONS
        .iter()
        .fold(PermissionMatrix::new(), |matrix, module| {
            matrix.with_module(module.id, module.actions.iter().copied())
        });

    let reporting_permissions = [REPORTS, BI_DASHBOARDS, CORPORATE_WELLNESS, SMART_ENGAGE]
        .into_iter()
        .fold(PermissionMatrix::new(), |matrix, module| {
            matrix.with_module(module, [ModuleAction::View])
        });

    vec![
        Role {
            id: ADMIN_ROLE_ID.to_string(),
            name: "Administrator".to_string(),
            description: "Full system access with all permissions".to_string(),
            is_system_role: true,
            permissions: admin_permissions,
            meta: seed_meta(SYSTEM_ACTOR, created, created),
        },
        Role {
            id: REPORTING_MANAGER_ROLE_ID.to_string(),
            name: "Reporting Manager".to_string(),
            description: "Access to reports and analytics only".to_string(),
            is_system_role: true,
            permissions: reporting_permissions,
            meta: seed_meta(SYSTEM_ACTOR, created, created),
        },
    ]
}

pub fn demo_users() -> Vec<User> {
    let user = |id: &str,
                name: &str,
                email: &str,
                phone: &str,
                status: UserStatus,
                role_id: &str,
                auth_uid: Option<&str>,
                meta: EntityMeta| User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()),
        status,
        role_id: role_id.to_string(),
        auth_uid: auth_uid.map(str::to_string),
        meta,
    };

    vec![
        user(
            "1",
            "John Doe",
            "john.doe@healthengage.com",
            "+1 (555) 123-4567",
            UserStatus::Active,
            ADMIN_ROLE_ID,
            Some("auth-1"),
            seed_meta(
                SYSTEM_ACTOR,
                datetime!(2024-01-15 00:00 UTC),
                datetime!(2024-01-20 00:00 UTC),
            ),
        ),
        user(
            "2",
            "Jane Smith",
            "jane.smith@healthengage.com",
            "+1 (555) 234-5678",
            UserStatus::Active,
            REPORTING_MANAGER_ROLE_ID,
            Some("auth-2"),
            seed_meta("1", datetime!(2024-01-16 00:00 UTC), datetime!(2024-01-16 00:00 UTC)),
        ),
        user(
            "3",
            "Mike Johnson",
            "mike.johnson@healthengage.com",
            "+1 (555) 345-6789",
            UserStatus::Inactive,
            REPORTING_MANAGER_ROLE_ID,
            Some("auth-3"),
            seed_meta("1", datetime!(2024-01-17 00:00 UTC), datetime!(2024-01-18 00:00 UTC)),
        ),
        user(
            "4",
            "Sarah Wilson",
            "sarah.wilson@healthengage.com",
            "+1 (555) 456-7890",
            UserStatus::Pending,
            REPORTING_MANAGER_ROLE_ID,
            None,
            seed_meta("1", datetime!(2024-01-19 00:00 UTC), datetime!(2024-01-19 00:00 UTC)),
        ),
    ]
}

pub fn demo_audit_logs() -> Vec<AuditLog> {
    let entry = |id: &str,
                 entity_type: EntityType,
                 entity_id: &str,
                 action: &str,
                 before: Option<serde_json::Value>,
                 after: Option<serde_json::Value>,
                 timestamp: OffsetDateTime| AuditLog {
        id: id.to_string(),
        entity_type,
        entity_id: entity_id.to_string(),
        actor_id: SYSTEM_ACTOR.to_string(),
        actor_name: "System Administrator".to_string(),
        action: action.to_string(),
        before,
        after,
        timestamp,
    };

    vec![
        entry(
            "audit-seed-1",
            EntityType::User,
            "1",
            "user.create",
            None,
            Some(json!({ "name": "John Doe", "email": "john.doe@healthengage.com", "status": "active" })),
            datetime!(2024-01-15 10:30 UTC),
        ),
        entry(
            "audit-seed-2",
            EntityType::User,
            "1",
            "user.update",
            Some(json!({ "status": "pending" })),
            Some(json!({ "status": "active" })),
            datetime!(2024-01-15 14:20 UTC),
        ),
        entry(
            "audit-seed-3",
            EntityType::Role,
            "role-custom-manager",
            "role.create",
            None,
            Some(json!({ "name": "Custom Manager", "description": "Custom role for managers" })),
            datetime!(2024-01-14 09:15 UTC),
        ),
        entry(
            "audit-seed-4",
            EntityType::User,
            "legacy-7",
            "user.delete",
            Some(json!({ "name": "Alex Turner", "email": "alex.turner@healthengage.com", "status": "suspended" })),
            None,
            datetime!(2024-01-13 16:45 UTC),
        ),
    ]
}
