//! Error code constants for API responses.
//!
//! These codes give clients a machine-readable identifier for each error type.

// User errors
pub const CODE_USER_NOT_FOUND: &str = "USER_NOT_FOUND";

// Infrastructure errors
pub const CODE_DATABASE_ERROR: &str = "DATABASE_ERROR";
pub const CODE_TEMPLATE_ERROR: &str = "TEMPLATE_ERROR";
