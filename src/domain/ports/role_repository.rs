use crate::domain::entities::Role;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn list_roles(&self) -> DomainResult<Vec<Role>>;
    async fn get_role_by_id(&self, id: &str) -> DomainResult<Option<Role>>;
    async fn get_role_by_name(&self, name: &str) -> DomainResult<Option<Role>>;
    async fn create_role(&self, role: &Role) -> DomainResult<()>;
    async fn update_role(&self, role: &Role) -> DomainResult<()>;
    async fn delete_role(&self, id: &str) -> DomainResult<()>;
}
