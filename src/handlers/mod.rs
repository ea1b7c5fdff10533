//! HTTP request handlers organized by domain.

pub mod greeting_handler;
pub mod user_handler;

pub use greeting_handler::*;
pub use user_handler::*;
