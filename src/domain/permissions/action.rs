use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action a role may be granted on a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleAction {
    View,
    Create,
    Edit,
    Delete,
}

impl ModuleAction {
    pub const ALL: [ModuleAction; 4] = [
        ModuleAction::View,
        ModuleAction::Create,
        ModuleAction::Edit,
        ModuleAction::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleAction::View => "view",
            ModuleAction::Create => "create",
            ModuleAction::Edit => "edit",
            ModuleAction::Delete => "delete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModuleAction::View => "View",
            ModuleAction::Create => "Create",
            ModuleAction::Edit => "Edit",
            ModuleAction::Delete => "Delete",
        }
    }
}

impl fmt::Display for ModuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModuleAction {
    type Err = DomainError;

    // Grant strings are matched verbatim, so no case folding here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(ModuleAction::View),
            "create" => Ok(ModuleAction::Create),
            "edit" => Ok(ModuleAction::Edit),
            "delete" => Ok(ModuleAction::Delete),
            _ => Err(DomainError::ValidationError(format!(
                "Invalid module action: '{}'",
                s
            ))),
        }
    }
}
