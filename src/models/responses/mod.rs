//! Response models for JSON endpoints.

pub mod api;

pub use api::*;
