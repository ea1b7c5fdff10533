//! Services organized by domain concern.

pub mod gateway;
pub mod user_service;

pub use gateway::EntityGateway;
pub use user_service::UserService;
