//! Fixed response bodies and log lines.

// Greetings
pub const MSG_HELLO: &str = "hello";
pub const MSG_SALAM: &str = "salam";
pub const MSG_PRIVET: &str = "privet";
pub const LOG_SALAM: &str = "Salam duino";

// Health
pub const MSG_HEALTH_STATUS: &str = "OK";
pub const MSG_HEALTH_OK: &str = "Server is running";
