//! Column descriptors for the Users, Roles and Audit Log tables.
//!
//! Column sets depend on the caller: the Actions column is only present when
//! the context holds edit or delete on the table's module.

use crate::application::auth_context::AuthContext;
use crate::domain::entities::{AuditLog, Role, User, UserStatus};
use crate::domain::permissions::catalog::{ROLES, USERS};
use crate::domain::permissions::{module_name, ModuleAction};
use crate::domain::table::{FieldValue, TableColumn};
use std::collections::HashMap;
use std::str::FromStr;
use time::OffsetDateTime;

/// Module badges shown in the roles table before collapsing into "+N more".
pub const MAX_MODULE_BADGES: usize = 3;

fn date_only(ts: OffsetDateTime) -> String {
    ts.date().to_string()
}

/// Grants that put an Actions column on a module's table.
fn row_action_grants(module: &str) -> [(&str, &str); 2] {
    [
        (module, ModuleAction::Edit.as_str()),
        (module, ModuleAction::Delete.as_str()),
    ]
}

fn actions_column<T>(key: &str, actions: Vec<(&'static str, fn(&T) -> bool)>) -> TableColumn<T>
where
    T: 'static,
{
    TableColumn::new(key, "Actions", move |record: &T| {
        let labels: Vec<&str> = actions
            .iter()
            .filter(|(_, applies)| applies(record))
            .map(|(label, _)| *label)
            .collect();
        FieldValue::Text(labels.join(" "))
    })
    .width("100px")
}

pub fn users_columns(ctx: &AuthContext, roles: &[Role]) -> Vec<TableColumn<User>> {
    let role_names: HashMap<String, String> = roles
        .iter()
        .map(|r| (r.id.clone(), r.name.clone()))
        .collect();

    let mut columns = vec![
        TableColumn::new("name", "Name", |u: &User| u.name.as_str().into()).sortable(),
        TableColumn::new("email", "Email", |u: &User| u.email.as_str().into()).sortable(),
        TableColumn::new("phone", "Phone", |u: &User| u.phone.as_deref().into()),
        TableColumn::new("status", "Status", |u: &User| u.status.as_str().into())
            .sortable()
            .render(|value, _| {
                value
                    .as_text()
                    .and_then(|s| UserStatus::from_str(s).ok())
                    .map(|s| s.label().to_string())
                    .unwrap_or_default()
            }),
        TableColumn::new("roleId", "Role", |u: &User| u.role_id.as_str().into()).render(
            move |value, _| {
                let id = value.display();
                role_names.get(&id).cloned().unwrap_or(id)
            },
        ),
        TableColumn::new("meta.updatedAt", "Last Updated", |u: &User| {
            u.meta.updated_at.into()
        })
        .sortable()
        .render(|_, u| date_only(u.meta.updated_at)),
    ];

    if ctx.has_any(&row_action_grants(USERS)) {
        let mut actions: Vec<(&'static str, fn(&User) -> bool)> = Vec::new();
        if ctx.can(USERS, ModuleAction::Edit) {
            actions.push(("Edit", |_: &User| true));
        }
        if ctx.can(USERS, ModuleAction::Delete) {
            actions.push(("Delete", |_: &User| true));
        }
        columns.push(actions_column("actions", actions));
    }

    columns
}

/// Catalog names of the first three granted modules, then `+N more`.
pub fn module_badges(role: &Role) -> Vec<String> {
    let modules = role.permissions.modules();
    let mut badges: Vec<String> = modules
        .iter()
        .take(MAX_MODULE_BADGES)
        .map(|m| module_name(&m.id).to_string())
        .collect();
    if modules.len() > MAX_MODULE_BADGES {
        badges.push(format!("+{} more", modules.len() - MAX_MODULE_BADGES));
    }
    badges
}

pub fn roles_columns(ctx: &AuthContext) -> Vec<TableColumn<Role>> {
    let mut columns = vec![
        TableColumn::new("name", "Role Name", |r: &Role| r.name.as_str().into())
            .sortable()
            .render(|value, role| {
                if role.is_system_role {
                    format!("{} [System]", value.display())
                } else {
                    value.display()
                }
            }),
        TableColumn::new("description", "Description", |r: &Role| {
            r.description.as_str().into()
        }),
        TableColumn::new("permissions", "Modules", |r: &Role| {
            FieldValue::Number(r.permissions.modules().len() as f64)
        })
        .render(|_, role| module_badges(role).join(", ")),
        TableColumn::new("meta.createdAt", "Created", |r: &Role| {
            r.meta.created_at.into()
        })
        .render(|_, role| date_only(role.meta.created_at)),
    ];

    if ctx.has_any(&row_action_grants(ROLES)) {
        let mut actions: Vec<(&'static str, fn(&Role) -> bool)> = Vec::new();
        if ctx.can(ROLES, ModuleAction::Edit) {
            actions.push(("Edit", |_: &Role| true));
        }
        if ctx.can(ROLES, ModuleAction::Create) {
            actions.push(("Clone", |r: &Role| !r.is_system_role));
        }
        if ctx.can(ROLES, ModuleAction::Delete) {
            actions.push(("Delete", |r: &Role| !r.is_system_role));
        }
        columns.push(actions_column("id", actions));
    }

    columns
}

pub fn audit_columns() -> Vec<TableColumn<AuditLog>> {
    vec![
        TableColumn::new("timestamp", "Time", |l: &AuditLog| {
            l.timestamp.into()
        })
        .sortable(),
        TableColumn::new("actorName", "Actor", |l: &AuditLog| {
            l.actor_name.as_str().into()
        }),
        TableColumn::new("action", "Action", |l: &AuditLog| l.action.as_str().into()),
        TableColumn::new("entityType", "Entity", |l: &AuditLog| {
            l.entity_type.as_str().into()
        })
        .render(|value, log| format!("{} {}", value.display(), log.entity_id)),
        TableColumn::new("before", "Changes", |l: &AuditLog| l.has_changes().into()).render(
            |_, log| {
                if log.is_creation() {
                    "Created".to_string()
                } else if log.is_deletion() {
                    "Deleted".to_string()
                } else if log.has_changes() {
                    "Updated".to_string()
                } else {
                    "-".to_string()
                }
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EntityMeta;
    use crate::domain::permissions::catalog::{AUDIT, BI_DASHBOARDS, REPORTS, SMART_ENGAGE};
    use crate::domain::permissions::PermissionMatrix;

    fn role_with_modules(modules: &[&str]) -> Role {
        let mut matrix = PermissionMatrix::new();
        for m in modules {
            matrix.grant(m, ModuleAction::View);
        }
        Role {
            id: "role-x".to_string(),
            name: "X".to_string(),
            description: "x".to_string(),
            is_system_role: false,
            permissions: matrix,
            meta: EntityMeta::new("system", OffsetDateTime::UNIX_EPOCH),
        }
    }

    #[test]
    fn test_module_badges_collapse_after_three() {
        let role = role_with_modules(&[USERS, ROLES, AUDIT, REPORTS, BI_DASHBOARDS]);
        let badges = module_badges(&role);

        assert_eq!(badges.len(), 4);
        assert_eq!(badges[0], module_name(USERS));
        assert_eq!(badges[2], module_name(AUDIT));
        assert_eq!(badges[3], "+2 more");
    }

    #[test]
    fn test_module_badges_without_overflow() {
        let role = role_with_modules(&[REPORTS, SMART_ENGAGE]);
        let badges = module_badges(&role);
        assert_eq!(badges.len(), 2);
        assert!(!badges.iter().any(|b| b.ends_with("more")));
    }

    #[test]
    fn test_actions_column_requires_edit_or_delete() {
        let anonymous = AuthContext::anonymous();
        let columns = users_columns(&anonymous, &[]);
        assert!(columns.iter().all(|c| c.label != "Actions"));
        assert_eq!(roles_columns(&anonymous).len(), 4);
    }
}
