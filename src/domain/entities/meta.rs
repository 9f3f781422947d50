use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Who created and last touched a record, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMeta {
    pub created_by: String,
    pub updated_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl EntityMeta {
    pub fn new(actor_id: &str, now: OffsetDateTime) -> Self {
        Self {
            created_by: actor_id.to_string(),
            updated_by: actor_id.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self, actor_id: &str, now: OffsetDateTime) {
        self.updated_by = actor_id.to_string();
        self.updated_at = now;
    }
}
