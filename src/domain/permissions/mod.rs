pub mod action;
pub mod catalog;
pub mod grants;
pub mod matrix;

pub use action::ModuleAction;
pub use catalog::{find_module, module_name, ModuleDefinition, MODULE_DEFINITIONS};
pub use grants::{grant_key, split_grant, GrantSet};
pub use matrix::{ModulePermission, PermissionGridCell, PermissionGridRow, PermissionMatrix};
