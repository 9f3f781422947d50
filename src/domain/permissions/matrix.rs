use super::catalog::ModuleDefinition;
use super::grants::{grant_key, split_grant, GrantSet};
use super::ModuleAction;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePermission {
    pub id: String,
    pub actions: BTreeSet<ModuleAction>,
}

/// A role's permissions as an ordered list of modules with their granted actions.
///
/// This is the only stored form. The flattened [`GrantSet`] consulted by the
/// evaluator and the editable grid are both derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionMatrix {
    modules: Vec<ModulePermission>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionGridCell {
    pub action: ModuleAction,
    pub available: bool,
    pub granted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionGridRow {
    pub module_id: String,
    pub name: String,
    pub description: String,
    pub cells: Vec<PermissionGridCell>,
}

impl PermissionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module<I>(mut self, module: &str, actions: I) -> Self
    where
        I: IntoIterator<Item = ModuleAction>,
    {
        for action in actions {
            self.grant(module, action);
        }
        self
    }

    /// Parses `"<module>.<action>"` strings into a matrix, preserving first-seen module order.
    pub fn from_grants<I, S>(grants: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matrix = Self::new();
        for grant in grants {
            let grant = grant.as_ref();
            let (module, action) = split_grant(grant).ok_or_else(|| {
                DomainError::ValidationError(format!(
                    "Invalid permission format: '{}'. Must match pattern 'module.action'",
                    grant
                ))
            })?;
            matrix.grant(module, action.parse()?);
        }
        Ok(matrix)
    }

    /// Returns false when the action was already granted.
    pub fn grant(&mut self, module: &str, action: ModuleAction) -> bool {
        match self.modules.iter_mut().find(|m| m.id == module) {
            Some(entry) => entry.actions.insert(action),
            None => {
                self.modules.push(ModulePermission {
                    id: module.to_string(),
                    actions: BTreeSet::from([action]),
                });
                true
            }
        }
    }

    /// Removes the action; a module left with no actions is dropped.
    pub fn revoke(&mut self, module: &str, action: ModuleAction) -> bool {
        let Some(index) = self.modules.iter().position(|m| m.id == module) else {
            return false;
        };
        let removed = self.modules[index].actions.remove(&action);
        if self.modules[index].actions.is_empty() {
            self.modules.remove(index);
        }
        removed
    }

    /// Flips one checkbox of the grid and returns the new state.
    pub fn toggle(&mut self, module: &str, action: ModuleAction) -> bool {
        if self.allows(module, action) {
            self.revoke(module, action);
            false
        } else {
            self.grant(module, action);
            true
        }
    }

    pub fn allows(&self, module: &str, action: ModuleAction) -> bool {
        self.modules
            .iter()
            .any(|m| m.id == module && m.actions.contains(&action))
    }

    pub fn modules(&self) -> &[ModulePermission] {
        &self.modules
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn grants(&self) -> GrantSet {
        self.modules
            .iter()
            .flat_map(|m| m.actions.iter().map(move |a| grant_key(&m.id, a.as_str())))
            .collect()
    }

    /// Checks every entry against the module catalog.
    pub fn validate(&self, catalog: &[ModuleDefinition]) -> DomainResult<()> {
        for entry in &self.modules {
            let definition = catalog.iter().find(|d| d.id == entry.id).ok_or_else(|| {
                DomainError::ValidationError(format!("Unknown module: '{}'", entry.id))
            })?;
            if let Some(action) = entry.actions.iter().find(|a| !definition.supports(**a)) {
                return Err(DomainError::ValidationError(format!(
                    "Action '{}' is not available for module '{}'",
                    action, entry.id
                )));
            }
        }
        Ok(())
    }

    /// Editable grid: one row per catalog module, one cell per action.
    pub fn grid(&self, catalog: &[ModuleDefinition]) -> Vec<PermissionGridRow> {
        catalog
            .iter()
            .map(|definition| PermissionGridRow {
                module_id: definition.id.to_string(),
                name: definition.name.to_string(),
                description: definition.description.to_string(),
                cells: ModuleAction::ALL
                    .iter()
                    .map(|action| PermissionGridCell {
                        action: *action,
                        available: definition.supports(*action),
                        granted: self.allows(definition.id, *action),
                    })
                    .collect(),
            })
            .collect()
    }
}
