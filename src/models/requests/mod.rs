//! Request models for form endpoints.

pub mod user;

pub use user::*;
