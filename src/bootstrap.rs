use crate::application::services::{
    AuditService, AuthService, ReportService, RoleService, UserService,
};
use crate::config::Config;
use crate::domain::ports::{AuditRepository, RoleRepository, TimeService, UserRepository};
use crate::infrastructure::persistence::Database;
use crate::infrastructure::runtime::tokio::TokioTimeService;
use std::sync::Arc;

/// Everything the console needs, wired against one seeded in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub auth: AuthService,
    pub users: UserService,
    pub roles: RoleService,
    pub audit: AuditService,
    pub reports: ReportService,
}

pub fn build_app_state(config: &Config) -> AppState {
    build_app_state_with(config, Arc::new(TokioTimeService::new()))
}

/// Same as [`build_app_state`] with the clock supplied by the caller.
pub fn build_app_state_with(config: &Config, time: Arc<dyn TimeService>) -> AppState {
    let db = Database::seeded(time.clone(), config.mock_latency);

    let user_repo: Arc<dyn UserRepository> = Arc::new(db.clone());
    let role_repo: Arc<dyn RoleRepository> = Arc::new(db.clone());
    let audit_repo: Arc<dyn AuditRepository> = Arc::new(db.clone());

    let audit = AuditService::new(audit_repo.clone(), time.clone(), config.max_page_size);
    let auth = AuthService::new(user_repo.clone(), role_repo.clone());
    let users = UserService::new(
        user_repo.clone(),
        role_repo.clone(),
        audit.clone(),
        time.clone(),
        config.default_page_size,
        config.max_page_size,
    );
    let roles = RoleService::new(
        role_repo.clone(),
        user_repo.clone(),
        audit.clone(),
        time.clone(),
        config.max_page_size,
    );
    let reports = ReportService::new(user_repo, role_repo, audit_repo, time);

    tracing::info!("Application state built");

    AppState {
        config: config.clone(),
        db,
        auth,
        users,
        roles,
        audit,
        reports,
    }
}
