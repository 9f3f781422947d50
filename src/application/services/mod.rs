pub mod audit_service;
pub mod auth_service;
pub mod permission_service;
pub mod report_service;
pub mod role_service;
pub mod user_service;

pub use audit_service::{AuditService, AuditStats};
pub use auth_service::AuthService;
pub use permission_service::PermissionService;
pub use report_service::{ReportService, ReportsData};
pub use role_service::RoleService;
pub use user_service::UserService;
