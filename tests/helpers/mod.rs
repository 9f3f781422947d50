#![allow(dead_code)]
pub mod auth_helpers;
pub mod test_state;

pub use auth_helpers::*;
pub use test_state::*;
