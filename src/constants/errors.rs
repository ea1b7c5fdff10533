//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";

// Schema errors
pub const ERR_SCHEMA_MISSING: &str = "Table 'users' does not exist";

// Rendering errors
pub const ERR_UNKNOWN_VIEW: &str = "No template registered for view";
pub const ERR_MISSING_CONTEXT: &str = "Render context is missing a required entry";
pub const ERR_NO_TEMPLATES: &str = "Template registry is not configured";
