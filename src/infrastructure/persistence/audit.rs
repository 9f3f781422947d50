use crate::domain::entities::{AuditLog, EntityType};
use crate::domain::errors::DomainResult;
use crate::domain::ports::audit_repository::AuditRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;

// Entries with equal timestamps keep reverse insertion order.
fn newest_first(mut logs: Vec<AuditLog>) -> Vec<AuditLog> {
    logs.reverse();
    logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    logs
}

#[async_trait]
impl AuditRepository for Database {
    async fn list_audit_logs(&self) -> DomainResult<Vec<AuditLog>> {
        self.simulate_latency().await;
        let logs = self.tables.read().await.audit_logs.clone();
        Ok(newest_first(logs))
    }

    async fn list_audit_logs_by_entity(
        &self,
        entity_type: EntityType,
        entity_id: &str,
    ) -> DomainResult<Vec<AuditLog>> {
        self.simulate_latency().await;
        let tables = self.tables.read().await;
        let logs = tables
            .audit_logs
            .iter()
            .filter(|log| log.entity_type == entity_type && log.entity_id == entity_id)
            .cloned()
            .collect();
        Ok(newest_first(logs))
    }

    async fn append_audit_log(&self, log: &AuditLog) -> DomainResult<()> {
        self.simulate_latency().await;
        self.tables.write().await.audit_logs.push(log.clone());
        Ok(())
    }
}
