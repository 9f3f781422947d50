use crate::application::auth_context::AuthContext;
use crate::domain::entities::{AuditLog, AuthUser, EntityType, NewAuditLog};
use crate::domain::errors::DomainResult;
use crate::domain::permissions::catalog::AUDIT;
use crate::domain::permissions::ModuleAction;
use crate::domain::ports::{AuditRepository, TimeService};
use crate::domain::table::{FilterMode, TableEngine, TablePage, TableQuery};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuditStats {
    pub total: usize,
    pub today: usize,
    pub users: usize,
    pub roles: usize,
}

pub fn audit_engine() -> TableEngine<AuditLog> {
    TableEngine::new()
        .field("timestamp", |log: &AuditLog| log.timestamp.into())
        .field("actorName", |log: &AuditLog| log.actor_name.as_str().into())
        .field("action", |log: &AuditLog| log.action.as_str().into())
        .field("entityType", |log: &AuditLog| log.entity_type.as_str().into())
        .field("entityId", |log: &AuditLog| log.entity_id.as_str().into())
        .searchable(&["actorName", "action", "entityType"])
        .filterable("entityType", FilterMode::Exact)
        .filterable("action", FilterMode::Contains)
}

#[derive(Clone)]
pub struct AuditService {
    repository: Arc<dyn AuditRepository>,
    time: Arc<dyn TimeService>,
    engine: TableEngine<AuditLog>,
}

impl AuditService {
    pub fn new(
        repository: Arc<dyn AuditRepository>,
        time: Arc<dyn TimeService>,
        max_page_size: u32,
    ) -> Self {
        Self {
            repository,
            time,
            engine: audit_engine().max_page_size(max_page_size),
        }
    }

    /// Appends one entry attributed to `actor`. Called by the other services on
    /// every mutation, so it performs no permission check of its own.
    pub async fn record(
        &self,
        actor: &AuthUser,
        entity_type: EntityType,
        entity_id: &str,
        action: &str,
        before: Option<Value>,
        after: Option<Value>,
    ) -> DomainResult<AuditLog> {
        let log = AuditLog::new(
            NewAuditLog {
                entity_type,
                entity_id: entity_id.to_string(),
                actor_id: actor.uid.clone(),
                actor_name: actor.name.clone(),
                action: action.to_string(),
                before,
                after,
            },
            self.time.now(),
        );
        self.repository.append_audit_log(&log).await?;
        tracing::debug!(audit_id = %log.id, action, entity_id, "Audit entry recorded");
        Ok(log)
    }

    /// All entries, newest first.
    pub async fn list_audit_logs(&self, ctx: &AuthContext) -> DomainResult<Vec<AuditLog>> {
        ctx.require(AUDIT, ModuleAction::View)?;
        self.repository.list_audit_logs().await
    }

    pub async fn list_by_entity(
        &self,
        ctx: &AuthContext,
        entity_type: EntityType,
        entity_id: &str,
    ) -> DomainResult<Vec<AuditLog>> {
        ctx.require(AUDIT, ModuleAction::View)?;
        self.repository
            .list_audit_logs_by_entity(entity_type, entity_id)
            .await
    }

    /// Search actor/action/entity type, filter by `entityType` (exact) and
    /// `action` (substring). Without a sort key the newest-first order is kept.
    pub async fn query(
        &self,
        ctx: &AuthContext,
        query: &TableQuery,
    ) -> DomainResult<TablePage<AuditLog>> {
        let logs = self.list_audit_logs(ctx).await?;
        Ok(self.engine.query(&logs, query))
    }

    pub async fn stats(&self, ctx: &AuthContext) -> DomainResult<AuditStats> {
        let logs = self.list_audit_logs(ctx).await?;
        let today = self.time.now().date();

        Ok(AuditStats {
            total: logs.len(),
            today: logs.iter().filter(|l| l.timestamp.date() == today).count(),
            users: logs
                .iter()
                .filter(|l| l.entity_type == EntityType::User)
                .count(),
            roles: logs
                .iter()
                .filter(|l| l.entity_type == EntityType::Role)
                .count(),
        })
    }
}
