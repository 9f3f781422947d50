use crate::application::auth_context::AuthContext;
use crate::domain::permissions::catalog::{AUDIT, REPORTS, ROLES, USERS};
use crate::domain::permissions::ModuleAction;
use serde::Serialize;

/// Sidebar entry, shown only to holders of `module.action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    pub module: &'static str,
    pub action: ModuleAction,
}

pub const NAVIGATION: &[NavItem] = &[
    NavItem {
        title: "Users",
        href: "/users",
        module: USERS,
        action: ModuleAction::View,
    },
    NavItem {
        title: "Roles",
        href: "/roles",
        module: ROLES,
        action: ModuleAction::View,
    },
    NavItem {
        title: "Audit Log",
        href: "/audit",
        module: AUDIT,
        action: ModuleAction::View,
    },
    NavItem {
        title: "Reports",
        href: "/reports",
        module: REPORTS,
        action: ModuleAction::View,
    },
];

pub fn visible_navigation(ctx: &AuthContext) -> Vec<NavItem> {
    NAVIGATION
        .iter()
        .filter(|item| ctx.can(item.module, item.action))
        .copied()
        .collect()
}

/// The visible item whose href is `path` or a parent of it.
pub fn active_item(ctx: &AuthContext, path: &str) -> Option<NavItem> {
    visible_navigation(ctx).into_iter().find(|item| {
        path == item.href
            || path
                .strip_prefix(item.href)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardOutcome {
    /// No signed-in user; redirect to login.
    Unauthenticated,
    /// Signed in but missing the required grant.
    Denied,
    Granted,
}

/// Route guard. `required` of `None` only demands a signed-in user.
pub fn guard(ctx: &AuthContext, required: Option<(&str, ModuleAction)>) -> GuardOutcome {
    if !ctx.is_authenticated() {
        return GuardOutcome::Unauthenticated;
    }
    match required {
        Some((module, action)) if !ctx.can(module, action) => {
            tracing::debug!(module, action = %action, "Route denied");
            GuardOutcome::Denied
        }
        _ => GuardOutcome::Granted,
    }
}

/// Guard for a sidebar route by href; unknown paths only need authentication.
pub fn guard_path(ctx: &AuthContext, path: &str) -> GuardOutcome {
    let required = NAVIGATION
        .iter()
        .find(|item| path == item.href || path.starts_with(&format!("{}/", item.href)))
        .map(|item| (item.module, item.action));
    guard(ctx, required)
}
