use crate::application::auth_context::AuthContext;
use crate::application::services::audit_service::AuditService;
use crate::domain::entities::{CreateRoleRequest, EntityType, Role, UpdateRoleRequest};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::permissions::catalog::ROLES;
use crate::domain::permissions::{
    ModuleAction, PermissionGridRow, PermissionMatrix, MODULE_DEFINITIONS,
};
use crate::domain::ports::{RoleRepository, TimeService, UserRepository};
use crate::domain::table::{TableEngine, TablePage, TableQuery};
use std::sync::Arc;

pub fn role_engine() -> TableEngine<Role> {
    TableEngine::new()
        .field("name", |r: &Role| r.name.as_str().into())
        .field("description", |r: &Role| r.description.as_str().into())
        .field("isSystemRole", |r: &Role| r.is_system_role.into())
        .field("meta.createdAt", |r: &Role| r.meta.created_at.into())
        .field("meta.updatedAt", |r: &Role| r.meta.updated_at.into())
        .searchable(&["name", "description"])
        .default_sort("name")
}

#[derive(Clone)]
pub struct RoleService {
    roles: Arc<dyn RoleRepository>,
    users: Arc<dyn UserRepository>,
    audit: AuditService,
    time: Arc<dyn TimeService>,
    engine: TableEngine<Role>,
}

impl RoleService {
    pub fn new(
        roles: Arc<dyn RoleRepository>,
        users: Arc<dyn UserRepository>,
        audit: AuditService,
        time: Arc<dyn TimeService>,
        max_page_size: u32,
    ) -> Self {
        Self {
            roles,
            users,
            audit,
            time,
            engine: role_engine().max_page_size(max_page_size),
        }
    }

    pub async fn list_roles(
        &self,
        ctx: &AuthContext,
        query: &TableQuery,
    ) -> DomainResult<TablePage<Role>> {
        ctx.require(ROLES, ModuleAction::View)?;
        let roles = self.roles.list_roles().await?;
        let page = self.engine.query(&roles, query);
        tracing::debug!(total = page.pagination.total, "Roles query evaluated");
        Ok(page)
    }

    pub async fn get_role(&self, ctx: &AuthContext, id: &str) -> DomainResult<Role> {
        ctx.require(ROLES, ModuleAction::View)?;
        self.find_role(id).await
    }

    async fn find_role(&self, id: &str) -> DomainResult<Role> {
        self.roles
            .get_role_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Role with id {} not found", id)))
    }

    async fn ensure_name_available(&self, name: &str) -> DomainResult<()> {
        if self.roles.get_role_by_name(name).await?.is_some() {
            return Err(DomainError::Conflict("Role name already exists".to_string()));
        }
        Ok(())
    }

    pub async fn create_role(
        &self,
        ctx: &AuthContext,
        request: CreateRoleRequest,
    ) -> DomainResult<Role> {
        let actor = ctx.require(ROLES, ModuleAction::Create)?;

        let name = request.name.trim().to_string();
        let description = request.description.trim().to_string();
        if name.is_empty() || description.is_empty() {
            return Err(DomainError::ValidationError(
                "Name and description are required".to_string(),
            ));
        }
        request.permissions.validate(MODULE_DEFINITIONS)?;
        self.ensure_name_available(&name).await?;

        let role = Role::new(
            name,
            description,
            request.permissions,
            &actor.uid,
            self.time.now(),
        );
        self.roles.create_role(&role).await?;

        self.audit
            .record(
                actor,
                EntityType::Role,
                &role.id,
                "role.create",
                None,
                Some(serde_json::to_value(&role)?),
            )
            .await?;

        tracing::info!(role_id = %role.id, actor_id = %actor.uid, "Role created");
        Ok(role)
    }

    pub async fn update_role(
        &self,
        ctx: &AuthContext,
        id: &str,
        request: UpdateRoleRequest,
    ) -> DomainResult<Role> {
        let actor = ctx.require(ROLES, ModuleAction::Edit)?;
        let before = self.find_role(id).await?;
        let mut role = before.clone();

        if let Some(name) = request.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(DomainError::ValidationError(
                    "Role name cannot be empty".to_string(),
                ));
            }
            if !name.eq_ignore_ascii_case(&role.name) {
                self.ensure_name_available(&name).await?;
            }
            role.name = name;
        }

        if let Some(description) = request.description {
            let description = description.trim().to_string();
            if description.is_empty() {
                return Err(DomainError::ValidationError(
                    "Role description cannot be empty".to_string(),
                ));
            }
            role.description = description;
        }

        if let Some(permissions) = request.permissions {
            permissions.validate(MODULE_DEFINITIONS)?;
            role.permissions = permissions;
        }

        role.meta.touch(&actor.uid, self.time.now());
        self.roles.update_role(&role).await?;

        self.audit
            .record(
                actor,
                EntityType::Role,
                id,
                "role.update",
                Some(serde_json::to_value(&before)?),
                Some(serde_json::to_value(&role)?),
            )
            .await?;

        tracing::info!(role_id = %id, actor_id = %actor.uid, "Role updated");
        Ok(role)
    }

    pub async fn delete_role(&self, ctx: &AuthContext, id: &str) -> DomainResult<()> {
        let actor = ctx.require(ROLES, ModuleAction::Delete)?;
        let role = self.find_role(id).await?;

        if role.is_system_role {
            tracing::warn!(role_id = %id, actor_id = %actor.uid, "Refused to delete system role");
            return Err(DomainError::Forbidden("Cannot delete system role".to_string()));
        }

        let assigned = self.users.count_users_with_role(id).await?;
        if assigned > 0 {
            return Err(DomainError::Conflict(format!(
                "Role is assigned to {} user(s)",
                assigned
            )));
        }

        self.roles.delete_role(id).await?;

        self.audit
            .record(
                actor,
                EntityType::Role,
                id,
                "role.delete",
                Some(serde_json::to_value(&role)?),
                None,
            )
            .await?;

        tracing::info!(role_id = %id, actor_id = %actor.uid, "Role deleted");
        Ok(())
    }

    /// Copies a custom role's description and matrix under `"<name> (Copy)"`,
    /// numbering the copy if that name is taken. The copy is never a system role.
    pub async fn clone_role(&self, ctx: &AuthContext, id: &str) -> DomainResult<Role> {
        let actor = ctx.require(ROLES, ModuleAction::Create)?;
        let source = self.find_role(id).await?;

        if source.is_system_role {
            return Err(DomainError::Forbidden("Cannot clone system role".to_string()));
        }

        let base = format!("{} (Copy)", source.name);
        let mut name = base.clone();
        let mut suffix = 2;
        while self.roles.get_role_by_name(&name).await?.is_some() {
            name = format!("{} {}", base, suffix);
            suffix += 1;
        }

        let role = Role::new(
            name,
            source.description.clone(),
            source.permissions.clone(),
            &actor.uid,
            self.time.now(),
        );
        self.roles.create_role(&role).await?;

        self.audit
            .record(
                actor,
                EntityType::Role,
                &role.id,
                "role.create",
                None,
                Some(serde_json::json!({ "clonedFrom": source.id, "role": role })),
            )
            .await?;

        tracing::info!(role_id = %role.id, source_id = %source.id, "Role cloned");
        Ok(role)
    }

    /// Editing grid over the full module catalog for an existing role.
    pub async fn permission_grid(
        &self,
        ctx: &AuthContext,
        id: &str,
    ) -> DomainResult<Vec<PermissionGridRow>> {
        ctx.require(ROLES, ModuleAction::View)?;
        let role = self.find_role(id).await?;
        Ok(role.permissions.grid(MODULE_DEFINITIONS))
    }

    /// Blank grid for the create form.
    pub fn empty_grid(&self) -> Vec<PermissionGridRow> {
        PermissionMatrix::new().grid(MODULE_DEFINITIONS)
    }
}
