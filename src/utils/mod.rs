//! Small text helpers shared across modules.

pub mod html;

pub use html::escape_html;
