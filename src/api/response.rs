//! Response types for the staffing validator API.
//!
//! This module defines the error body returned when a request cannot be
//! read as a record at all. Rule failures are not errors here: they are
//! returned as the [`ValidationResult`](crate::models::ValidationResult) list.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a missing field error response from serde's message.
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::with_details(
            "VALIDATION_ERROR",
            message,
            "A required field was not provided in the request",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing content type error response.
    pub fn missing_content_type() -> Self {
        Self::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        let error = match rejection {
            JsonRejection::JsonDataError(err) => {
                let body_text = err.body_text();
                if body_text.contains("missing field") {
                    ApiError::missing_field(body_text)
                } else {
                    ApiError::malformed_json(body_text)
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => ApiError::missing_content_type(),
            _ => ApiError::malformed_json("Failed to parse request body"),
        };

        ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}
