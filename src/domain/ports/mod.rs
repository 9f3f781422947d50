pub mod audit_repository;
pub mod role_repository;
pub mod time_service;
pub mod user_repository;

pub use audit_repository::AuditRepository;
pub use role_repository::RoleRepository;
pub use time_service::TimeService;
pub use user_repository::UserRepository;
