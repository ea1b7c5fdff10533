use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::constants::{
    CODE_DATABASE_ERROR, CODE_TEMPLATE_ERROR, CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND,
};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    NotFound { code: String, message: String },
    InternalServerError { code: String, message: String },
}

impl ApiError {
    pub fn user_not_found() -> Self {
        ApiError::NotFound {
            code: CODE_USER_NOT_FOUND.to_string(),
            message: ERR_USER_NOT_FOUND.to_string(),
        }
    }

    pub fn internal(code: &str, message: impl Into<String>) -> Self {
        ApiError::InternalServerError {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            ApiError::NotFound { code, .. }
            | ApiError::InternalServerError { code, .. } => code,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::NotFound { message, .. }
            | ApiError::InternalServerError { message, .. } => message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            code: self.code().to_string(),
            message: self.message().to_string(),
        })
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::internal(CODE_DATABASE_ERROR, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal(CODE_TEMPLATE_ERROR, err.to_string())
    }
}
