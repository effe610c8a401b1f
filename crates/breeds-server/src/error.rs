//! Server-specific error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::response::ApiResponse;
use crate::db::DbError;

pub const VALIDATION_FAILED: &str = "Validation failed";
pub const BREED_NOT_FOUND: &str = "Breed not found";
pub const DUPLICATE_BREED_NAME: &str = "A breed with this name already exists";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const ROUTE_NOT_FOUND: &str = "Route not found";

/// Application error types, rendered as the failure envelope
#[derive(Error, Debug)]
pub enum AppError {
    /// Per-field validation failures or an unreadable body
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// Bad parameter or cross-field rule, reported verbatim
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(DbError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn breed_not_found() -> Self {
        Self::NotFound(BREED_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::DuplicateName(_) => AppError::Conflict(DUPLICATE_BREED_NAME.to_string()),
            other => AppError::Database(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::Validation { message } => {
                ApiResponse::error(VALIDATION_FAILED).with_message(message)
            },
            AppError::BadRequest(error) | AppError::NotFound(error) | AppError::Conflict(error) => {
                ApiResponse::error(error)
            },
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                ApiResponse::error(INTERNAL_SERVER_ERROR)
            },
            AppError::Internal(ref message) => {
                tracing::error!("Internal error: {}", message);
                ApiResponse::error(INTERNAL_SERVER_ERROR)
            },
        };

        body.with_status(status)
    }
}

/// Alias for Result with AppError
pub type ApiResult<T> = Result<T, AppError>;
