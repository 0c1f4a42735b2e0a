//! Response types for the staffing API.
//!
//! This module defines the error response structures and maps engine
//! errors and JSON rejections onto HTTP status codes.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            ),
            EngineError::ConfigParseError { path, message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            ),
            EngineError::StaffNotFound { staff_id } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::with_details(
                    "STAFF_NOT_FOUND",
                    message,
                    format!("No record exists for staff id '{}'", staff_id),
                ),
            ),
            EngineError::DuplicateStaff { .. } => ApiErrorResponse::new(
                StatusCode::CONFLICT,
                ApiError::new("DUPLICATE_STAFF", message),
            ),
            EngineError::InvalidLeave { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_LEAVE", message),
            ),
            EngineError::InvalidSettings { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_SETTINGS", message),
            ),
            EngineError::InvalidPayProfile { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_PAY_PROFILE", message),
            ),
            EngineError::AlreadyCheckedOut { .. } => ApiErrorResponse::new(
                StatusCode::CONFLICT,
                ApiError::new("ALREADY_CHECKED_OUT", message),
            ),
        }
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        let error = match rejection {
            JsonRejection::JsonDataError(err) => {
                let body_text = err.body_text();
                if body_text.contains("missing field") {
                    ApiError::validation_error(body_text)
                } else {
                    ApiError::malformed_json(body_text)
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
            }
            _ => ApiError::malformed_json("Failed to parse request body"),
        };
        ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
    }
}
