use crate::application::auth_context::AuthContext;
use crate::application::services::audit_service::AuditService;
use crate::domain::entities::{CreateUserRequest, EntityType, UpdateUserRequest, User, UserStatus};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::permissions::catalog::USERS;
use crate::domain::permissions::ModuleAction;
use crate::domain::ports::{RoleRepository, TimeService, UserRepository};
use crate::domain::table::{FilterMode, TableEngine, TablePage, TableQuery};
use crate::shared::utils::normalize_account_email;
use std::sync::Arc;

/// Users are searched by name and email, filtered by `status` and `roleId`,
/// and sorted by name unless the query says otherwise.
pub fn user_engine() -> TableEngine<User> {
    TableEngine::new()
        .field("name", |u: &User| u.name.as_str().into())
        .field("email", |u: &User| u.email.as_str().into())
        .field("phone", |u: &User| u.phone.as_deref().into())
        .field("status", |u: &User| u.status.as_str().into())
        .field("roleId", |u: &User| u.role_id.as_str().into())
        .field("meta.createdAt", |u: &User| u.meta.created_at.into())
        .field("meta.updatedAt", |u: &User| u.meta.updated_at.into())
        .searchable(&["name", "email"])
        .filterable("status", FilterMode::Exact)
        .filterable("roleId", FilterMode::Exact)
        .default_sort("name")
}

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
    audit: AuditService,
    time: Arc<dyn TimeService>,
    engine: TableEngine<User>,
    default_page_size: u32,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        audit: AuditService,
        time: Arc<dyn TimeService>,
        default_page_size: u32,
        max_page_size: u32,
    ) -> Self {
        Self {
            users,
            roles,
            audit,
            time,
            engine: user_engine().max_page_size(max_page_size),
            default_page_size,
        }
    }

    /// The query the users page starts from.
    pub fn default_query(&self) -> TableQuery {
        TableQuery::new().with_limit(self.default_page_size)
    }

    pub async fn list_users(
        &self,
        ctx: &AuthContext,
        query: &TableQuery,
    ) -> DomainResult<TablePage<User>> {
        ctx.require(USERS, ModuleAction::View)?;
        let users = self.users.list_users().await?;
        let page = self.engine.query(&users, query);
        tracing::debug!(
            total = page.pagination.total,
            page = page.pagination.page,
            "Users query evaluated"
        );
        Ok(page)
    }

    pub async fn get_user(&self, ctx: &AuthContext, id: &str) -> DomainResult<User> {
        ctx.require(USERS, ModuleAction::View)?;
        self.find_user(id).await
    }

    async fn find_user(&self, id: &str) -> DomainResult<User> {
        self.users
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("User with id {} not found", id)))
    }

    async fn ensure_role_exists(&self, role_id: &str) -> DomainResult<()> {
        if self.roles.get_role_by_id(role_id).await?.is_none() {
            return Err(DomainError::ValidationError(format!(
                "Role '{}' does not exist",
                role_id
            )));
        }
        Ok(())
    }

    async fn ensure_email_available(&self, email: &str, except_id: Option<&str>) -> DomainResult<()> {
        if let Some(existing) = self.users.get_user_by_email(email).await? {
            if Some(existing.id.as_str()) != except_id {
                return Err(DomainError::Conflict("Email already exists".to_string()));
            }
        }
        Ok(())
    }

    pub async fn create_user(
        &self,
        ctx: &AuthContext,
        request: CreateUserRequest,
    ) -> DomainResult<User> {
        let actor = ctx.require(USERS, ModuleAction::Create)?;

        let name = request.name.trim().to_string();
        if name.is_empty() || request.email.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Name and email are required".to_string(),
            ));
        }
        let email = normalize_account_email(&request.email)?;
        self.ensure_role_exists(&request.role_id).await?;
        self.ensure_email_available(&email, None).await?;

        let user = User::new(
            name,
            email,
            request.phone.filter(|p| !p.trim().is_empty()),
            request.status.unwrap_or_default(),
            request.role_id,
            &actor.uid,
            self.time.now(),
        );
        self.users.create_user(&user).await?;

        self.audit
            .record(
                actor,
                EntityType::User,
                &user.id,
                "user.create",
                None,
                Some(serde_json::to_value(&user)?),
            )
            .await?;

        tracing::info!(user_id = %user.id, actor_id = %actor.uid, "User created");
        Ok(user)
    }

    pub async fn update_user(
        &self,
        ctx: &AuthContext,
        id: &str,
        request: UpdateUserRequest,
    ) -> DomainResult<User> {
        let actor = ctx.require(USERS, ModuleAction::Edit)?;
        let before = self.find_user(id).await?;
        let mut user = before.clone();

        if let Some(name) = request.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(DomainError::ValidationError("Name cannot be empty".to_string()));
            }
            user.name = name;
        }

        if let Some(email) = request.email {
            let email = normalize_account_email(&email)?;
            if email != user.email {
                self.ensure_email_available(&email, Some(id)).await?;
            }
            user.email = email;
        }

        if let Some(phone) = request.phone {
            user.phone = Some(phone).filter(|p| !p.trim().is_empty());
        }

        if let Some(status) = request.status {
            user.status = status;
        }

        if let Some(role_id) = request.role_id {
            if role_id != user.role_id {
                self.ensure_role_exists(&role_id).await?;
            }
            user.role_id = role_id;
        }

        user.meta.touch(&actor.uid, self.time.now());
        self.users.update_user(&user).await?;

        self.audit
            .record(
                actor,
                EntityType::User,
                id,
                "user.update",
                Some(serde_json::to_value(&before)?),
                Some(serde_json::to_value(&user)?),
            )
            .await?;

        tracing::info!(user_id = %id, actor_id = %actor.uid, "User updated");
        Ok(user)
    }

    pub async fn delete_user(&self, ctx: &AuthContext, id: &str) -> DomainResult<()> {
        let actor = ctx.require(USERS, ModuleAction::Delete)?;
        let user = self.find_user(id).await?;
        self.users.delete_user(id).await?;

        self.audit
            .record(
                actor,
                EntityType::User,
                id,
                "user.delete",
                Some(serde_json::to_value(&user)?),
                None,
            )
            .await?;

        tracing::info!(user_id = %id, actor_id = %actor.uid, "User deleted");
        Ok(())
    }

    /// Sets `status` on every listed user. Unknown ids are skipped; returns how
    /// many users were updated.
    pub async fn bulk_update_status(
        &self,
        ctx: &AuthContext,
        ids: &[String],
        status: UserStatus,
    ) -> DomainResult<usize> {
        let actor = ctx.require(USERS, ModuleAction::Edit)?;
        let mut updated = 0;

        for id in ids {
            let Some(before) = self.users.get_user_by_id(id).await? else {
                tracing::debug!(user_id = %id, "Skipping unknown user in bulk update");
                continue;
            };

            let mut user = before.clone();
            user.status = status;
            user.meta.touch(&actor.uid, self.time.now());
            self.users.update_user(&user).await?;

            self.audit
                .record(
                    actor,
                    EntityType::User,
                    id,
                    "user.update",
                    Some(serde_json::json!({ "status": before.status })),
                    Some(serde_json::json!({ "status": status })),
                )
                .await?;
            updated += 1;
        }

        tracing::info!(updated, status = %status, actor_id = %actor.uid, "Bulk status update");
        Ok(updated)
    }
}
