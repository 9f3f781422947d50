use crate::domain::entities::User;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::user_repository::UserRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;

#[async_trait]
impl UserRepository for Database {
    async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.simulate_latency().await;
        Ok(self.tables.read().await.users.clone())
    }

    async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        self.simulate_latency().await;
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.simulate_latency().await;
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create_user(&self, user: &User) -> DomainResult<()> {
        self.simulate_latency().await;
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.id == user.id) {
            return Err(DomainError::Conflict(format!(
                "User with id {} already exists",
                user.id
            )));
        }
        tables.users.push(user.clone());
        Ok(())
    }

    async fn update_user(&self, user: &User) -> DomainResult<()> {
        self.simulate_latency().await;
        let mut tables = self.tables.write().await;
        let existing = tables
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| DomainError::NotFound(format!("User with id {} not found", user.id)))?;
        *existing = user.clone();
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> DomainResult<()> {
        self.simulate_latency().await;
        let mut tables = self.tables.write().await;
        let index = tables
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("User with id {} not found", id)))?;
        tables.users.remove(index);
        Ok(())
    }

    async fn count_users_with_role(&self, role_id: &str) -> DomainResult<i64> {
        self.simulate_latency().await;
        let tables = self.tables.read().await;
        Ok(tables.users.iter().filter(|u| u.role_id == role_id).count() as i64)
    }
}
