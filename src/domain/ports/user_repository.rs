use crate::domain::entities::User;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order.
    async fn list_users(&self) -> DomainResult<Vec<User>>;
    async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn create_user(&self, user: &User) -> DomainResult<()>;
    /// Replaces the stored user with the same id.
    async fn update_user(&self, user: &User) -> DomainResult<()>;
    async fn delete_user(&self, id: &str) -> DomainResult<()>;
    async fn count_users_with_role(&self, role_id: &str) -> DomainResult<i64>;
}
