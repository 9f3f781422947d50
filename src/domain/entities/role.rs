use super::meta::EntityMeta;
use crate::domain::permissions::{GrantSet, PermissionMatrix};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_system_role: bool, // System roles cannot be deleted or cloned
    pub permissions: PermissionMatrix,
    pub meta: EntityMeta,
}

impl Role {
    pub fn new(
        name: String,
        description: String,
        permissions: PermissionMatrix,
        actor_id: &str,
        now: OffsetDateTime,
    ) -> Self {
        Self {
            id: format!("role-{}", Uuid::new_v4()),
            name,
            description,
            is_system_role: false,
            permissions,
            meta: EntityMeta::new(actor_id, now),
        }
    }

    pub fn grants(&self) -> GrantSet {
        self.permissions.grants()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    pub name: String,
    pub description: String,
    pub permissions: PermissionMatrix,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<PermissionMatrix>,
}
