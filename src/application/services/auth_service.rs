use crate::application::auth_context::AuthContext;
use crate::domain::entities::{AuthUser, UserStatus};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{RoleRepository, UserRepository};
use std::sync::Arc;

/// Mock sign-in: resolves an active user by email and builds their context.
/// Credentials are not checked.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, roles: Arc<dyn RoleRepository>) -> Self {
        Self { users, roles }
    }

    pub async fn sign_in(&self, email: &str) -> DomainResult<AuthContext> {
        let user = self
            .users
            .get_user_by_email(email.trim())
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("No user with email {}", email)))?;

        if user.status != UserStatus::Active {
            tracing::warn!(user_id = %user.id, status = %user.status, "Sign-in refused");
            return Err(DomainError::Forbidden(format!(
                "User account is {}",
                user.status
            )));
        }

        let role = self.roles.get_role_by_id(&user.role_id).await?.ok_or_else(|| {
            DomainError::Internal(format!(
                "Role {} assigned to user {} does not exist",
                user.role_id, user.id
            ))
        })?;

        tracing::info!(user_id = %user.id, role_id = %role.id, "User signed in");
        Ok(AuthContext::authenticated(AuthUser::from_user(&user, role)))
    }

    /// Rebuilds the context from the stored role, picking up matrix edits made
    /// since sign-in.
    pub async fn refresh(&self, ctx: &AuthContext) -> DomainResult<AuthContext> {
        let Some(current) = ctx.user() else {
            return Ok(AuthContext::anonymous());
        };
        let role = self
            .roles
            .get_role_by_id(&current.role.id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Role with id {} not found", current.role.id)))?;

        let mut user = current.clone();
        user.refresh_role(role);
        Ok(AuthContext::authenticated(user))
    }
}
