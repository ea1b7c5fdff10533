//! Repository layer for database operations.
//!
//! Services own transactions; repositories only issue statements against the
//! connection they are handed.

pub mod user_repository;

pub use user_repository::UserRepository;
