use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    User,
    Role,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::User => "user",
            EntityType::Role => "role",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable record of one change. `before` is absent on creation, `after` on deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: String,
    pub entity_type: EntityType,
    pub entity_id: String,
    pub actor_id: String,
    pub actor_name: String,
    pub action: String,
    pub before: Option<Value>,
    pub after: Option<Value>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewAuditLog {
    pub entity_type: EntityType,
    pub entity_id: String,
    pub actor_id: String,
    pub actor_name: String,
    pub action: String,
    pub before: Option<Value>,
    pub after: Option<Value>,
}

impl AuditLog {
    pub fn new(entry: NewAuditLog, timestamp: OffsetDateTime) -> Self {
        Self {
            id: format!("audit-{}", Uuid::new_v4()),
            entity_type: entry.entity_type,
            entity_id: entry.entity_id,
            actor_id: entry.actor_id,
            actor_name: entry.actor_name,
            action: entry.action,
            before: entry.before,
            after: entry.after,
            timestamp,
        }
    }

    pub fn is_creation(&self) -> bool {
        self.before.is_none() && self.after.is_some()
    }

    pub fn is_deletion(&self) -> bool {
        self.before.is_some() && self.after.is_none()
    }

    pub fn has_changes(&self) -> bool {
        self.before.is_some() || self.after.is_some()
    }
}
