use crate::application::services::permission_service::PermissionService;
use crate::domain::entities::AuthUser;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::permissions::ModuleAction;

/// Explicit per-request authorization context.
///
/// Services and navigation receive this by reference instead of reading any
/// ambient session. An anonymous context denies every check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthContext {
    user: Option<AuthUser>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: AuthUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn has_permission(&self, module: &str, action: &str) -> bool {
        PermissionService::user_has_permission(self.user.as_ref(), module, action)
    }

    pub fn can(&self, module: &str, action: ModuleAction) -> bool {
        self.has_permission(module, action.as_str())
    }

    /// True if any `(module, action)` pair is granted. Anonymous contexts hold none.
    pub fn has_any(&self, checks: &[(&str, &str)]) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| PermissionService::has_any_permission(&u.permissions, checks))
    }

    pub fn has_all(&self, checks: &[(&str, &str)]) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| PermissionService::has_all_permissions(&u.permissions, checks))
    }

    /// The signed-in user if they hold `module.action`, `Forbidden` otherwise.
    pub fn require(&self, module: &str, action: ModuleAction) -> DomainResult<&AuthUser> {
        let user = self
            .user
            .as_ref()
            .ok_or_else(|| DomainError::Forbidden("Authentication required".to_string()))?;

        if !PermissionService::has_permission(&user.permissions, module, action.as_str()) {
            tracing::warn!(
                user_id = %user.uid,
                module,
                action = %action,
                "Permission denied"
            );
            return Err(DomainError::Forbidden(format!(
                "Requires '{}.{}' permission",
                module, action
            )));
        }

        Ok(user)
    }

    /// Consumes the context and returns an anonymous one.
    pub fn sign_out(self) -> Self {
        Self::anonymous()
    }
}
