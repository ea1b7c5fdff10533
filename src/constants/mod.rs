//! Application constants module.
//!
//! Centralizes error messages, machine-readable error codes, greeting
//! strings, view names and the table name used throughout the application.

pub mod error_codes;
pub mod errors;
pub mod messages;
pub mod views;

pub use error_codes::*;
pub use errors::*;
pub use messages::*;
pub use views::*;

/// Table backing the `User` entity.
pub const TABLE_USERS: &str = "users";
