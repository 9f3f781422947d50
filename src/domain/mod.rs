pub mod entities;
pub mod errors;
pub mod permissions;
pub mod ports;
pub mod table;
