use crate::domain::entities::Role;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::role_repository::RoleRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;

#[async_trait]
impl RoleRepository for Database {
    async fn list_roles(&self) -> DomainResult<Vec<Role>> {
        self.simulate_latency().await;
        Ok(self.tables.read().await.roles.clone())
    }

    async fn get_role_by_id(&self, id: &str) -> DomainResult<Option<Role>> {
        self.simulate_latency().await;
        let tables = self.tables.read().await;
        Ok(tables.roles.iter().find(|r| r.id == id).cloned())
    }

    async fn get_role_by_name(&self, name: &str) -> DomainResult<Option<Role>> {
        self.simulate_latency().await;
        let tables = self.tables.read().await;
        Ok(tables
            .roles
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
            .cloned())
    }

    async fn create_role(&self, role: &Role) -> DomainResult<()> {
        self.simulate_latency().await;
        let mut tables = self.tables.write().await;
        if tables.roles.iter().any(|r| r.id == role.id) {
            return Err(DomainError::Conflict(format!(
                "Role with id {} already exists",
                role.id
            )));
        }
        tables.roles.push(role.clone());
        Ok(())
    }

    async fn update_role(&self, role: &Role) -> DomainResult<()> {
        self.simulate_latency().await;
        let mut tables = self.tables.write().await;
        let existing = tables
            .roles
            .iter_mut()
            .find(|r| r.id == role.id)
            .ok_or_else(|| DomainError::NotFound(format!("Role with id {} not found", role.id)))?;
        *existing = role.clone();
        Ok(())
    }

    async fn delete_role(&self, id: &str) -> DomainResult<()> {
        self.simulate_latency().await;
        let mut tables = self.tables.write().await;
        let index = tables
            .roles
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Role with id {} not found", id)))?;
        tables.roles.remove(index);
        Ok(())
    }
}
