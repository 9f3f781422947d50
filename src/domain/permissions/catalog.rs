use super::ModuleAction;
use serde::Serialize;

pub const USERS: &str = "users";
pub const ROLES: &str = "roles";
pub const AUDIT: &str = "audit";
pub const REPORTS: &str = "reports";
pub const BI_DASHBOARDS: &str = "bi_dashboards";

pub const CORPORATE_WELLNESS: &str = "corporate_wellness_360";
pub const REWARD_PROGRAM: &str = "reward_program_management";
pub const REWARD_SHELF: &str = "reward_shelf";
pub const REWARD_PARTNER: &str = "reward_partner";
pub const USER_ROLE: &str = "user_role_management";
pub const CONFIGURATION: &str = "configuration_portal";
pub const SMART_ENGAGE: &str = "smart_engage";

const ALL_ACTIONS: &[ModuleAction] = &ModuleAction::ALL;
const VIEW_ONLY: &[ModuleAction] = &[ModuleAction::View];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub actions: &'static [ModuleAction],
}

impl ModuleDefinition {
    pub fn supports(&self, action: ModuleAction) -> bool {
        self.actions.contains(&action)
    }
}

/// Every module a role can be granted access to, in grid order.
pub const MODULE_DEFINITIONS: &[ModuleDefinition] = &[
    ModuleDefinition {
        id: USERS,
        name: "Users",
        description: "Manage console users and their status",
        actions: ALL_ACTIONS,
    },
    ModuleDefinition {
        id: ROLES,
        name: "Roles",
        description: "Manage roles and their permission matrix",
        actions: ALL_ACTIONS,
    },
    ModuleDefinition {
        id: AUDIT,
        name: "Audit Log",
        description: "Review the history of user and role changes",
        actions: VIEW_ONLY,
    },
    ModuleDefinition {
        id: REPORTS,
        name: "Reports",
        description: "System insights and performance metrics",
        actions: ALL_ACTIONS,
    },
    ModuleDefinition {
        id: BI_DASHBOARDS,
        name: "BI Dashboards",
        description: "Business intelligence dashboards",
        actions: ALL_ACTIONS,
    },
    ModuleDefinition {
        id: CORPORATE_WELLNESS,
        name: "Corporate Wellness 360",
        description: "Comprehensive wellness program management",
        actions: ALL_ACTIONS,
    },
    ModuleDefinition {
        id: REWARD_PROGRAM,
        name: "Reward Program Management",
        description: "Create and manage employee reward programs",
        actions: ALL_ACTIONS,
    },
    ModuleDefinition {
        id: REWARD_SHELF,
        name: "Reward Shelf",
        description: "Manage available rewards and catalog",
        actions: ALL_ACTIONS,
    },
    ModuleDefinition {
        id: REWARD_PARTNER,
        name: "Reward Partner",
        description: "Manage reward partners and integrations",
        actions: ALL_ACTIONS,
    },
    ModuleDefinition {
        id: USER_ROLE,
        name: "User Role Management",
        description: "Create and manage user roles and permissions",
        actions: ALL_ACTIONS,
    },
    ModuleDefinition {
        id: CONFIGURATION,
        name: "Configuration Portal",
        description: "System configuration and settings management",
        actions: ALL_ACTIONS,
    },
    ModuleDefinition {
        id: SMART_ENGAGE,
        name: "Smart Engage",
        description: "Employee engagement and communication tools",
        actions: ALL_ACTIONS,
    },
];

pub fn find_module(id: &str) -> Option<&'static ModuleDefinition> {
    MODULE_DEFINITIONS.iter().find(|m| m.id == id)
}

/// Display name for a module id, falling back to the id itself.
pub fn module_name(id: &str) -> &str {
    find_module(id).map(|m| m.name).unwrap_or(id)
}
