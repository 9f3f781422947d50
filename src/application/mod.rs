pub mod auth_context;
pub mod navigation;
pub mod services;
pub mod tables;

pub use auth_context::AuthContext;
pub use navigation::{guard, visible_navigation, GuardOutcome, NavItem};
pub use services::*;
