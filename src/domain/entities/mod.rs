pub mod audit_log;
pub mod auth_user;
pub mod meta;
pub mod role;
pub mod user;

pub use audit_log::*;
pub use auth_user::*;
pub use meta::*;
pub use role::*;
pub use user::*;
