//! View names, render-context keys and redirect targets.

pub const VIEW_USER_FORM: &str = "users/save";
pub const VIEW_USER_LIST: &str = "users/get-all";
pub const VIEW_USER_EDIT: &str = "users/edit";

/// Render-context key holding a single user.
pub const CTX_USER: &str = "user";
/// Render-context key holding the list of users.
pub const CTX_USER_LIST: &str = "userList";

pub const PATH_FIND_ALL: &str = "/users/find-all";
