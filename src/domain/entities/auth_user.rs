use super::{Role, User};
use crate::domain::permissions::GrantSet;
use serde::Serialize;

/// The signed-in console user together with the grants derived from their role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub permissions: GrantSet,
}

impl AuthUser {
    pub fn new(uid: String, email: String, name: String, role: Role) -> Self {
        let permissions = role.grants();
        Self {
            uid,
            email,
            name,
            role,
            permissions,
        }
    }

    pub fn from_user(user: &User, role: Role) -> Self {
        Self::new(user.id.clone(), user.email.clone(), user.name.clone(), role)
    }

    /// Re-derives the flattened grants after the role's matrix changed.
    pub fn refresh_role(&mut self, role: Role) {
        self.permissions = role.grants();
        self.role = role;
    }
}
