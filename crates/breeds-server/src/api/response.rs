//! API response types
//!
//! Every endpoint answers with the same envelope:
//!
//! ```json
//! { "success": true, "data": ..., "message": "...", "pagination": {...} }
//! { "success": false, "error": "Breed not found" }
//! ```
//!
//! Absent parts are omitted rather than sent as `null`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::features::shared::pagination::Pagination;

/// Standard response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new success response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            pagination: None,
        }
    }

    /// Success response for one page of a list
    pub fn paginated(data: T, pagination: Pagination) -> Self {
        Self {
            pagination: Some(pagination),
            ..Self::success(data)
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    /// Success envelope without data, e.g. after a delete
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
            pagination: None,
        }
    }

    /// Failure envelope carrying only `error`
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
            pagination: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Pair the envelope with a status code
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = if self.success {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        self.with_status(status)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::features::shared::pagination::PageRequest;
    use serde_json::json;

    #[test]
    fn test_success_omits_absent_parts() {
        let json = serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(json, json!({"success": true, "data": [1, 2]}));
    }

    #[test]
    fn test_success_with_message() {
        let response = ApiResponse::success(json!({"id": 7})).with_message("Breed created successfully");
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["message"], "Breed created successfully");
        assert_eq!(json["data"]["id"], 7);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_paginated() {
        let pagination = Pagination::new(PageRequest { page: 1, limit: 2 }, 3);
        let json = serde_json::to_value(ApiResponse::paginated(vec!["a", "b"], pagination)).unwrap();
        assert_eq!(
            json["pagination"],
            json!({"page": 1, "limit": 2, "total": 3, "totalPages": 2})
        );
    }

    #[test]
    fn test_error_envelope() {
        let json = serde_json::to_value(ApiResponse::error("Breed not found")).unwrap();
        assert_eq!(json, json!({"success": false, "error": "Breed not found"}));
    }
}
