use crate::domain::entities::{AuditLog, EntityType};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Append-only audit trail.
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Newest first.
    async fn list_audit_logs(&self) -> DomainResult<Vec<AuditLog>>;
    /// Newest first.
    async fn list_audit_logs_by_entity(
        &self,
        entity_type: EntityType,
        entity_id: &str,
    ) -> DomainResult<Vec<AuditLog>>;
    async fn append_audit_log(&self, log: &AuditLog) -> DomainResult<()>;
}
