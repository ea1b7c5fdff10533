//! Generic API response models.

use serde::Serialize;

use crate::constants::{MSG_HEALTH_OK, MSG_HEALTH_STATUS};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: MSG_HEALTH_STATUS.to_string(),
            message: MSG_HEALTH_OK.to_string(),
        }
    }
}
