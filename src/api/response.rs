//! Response types for the shift calendar API.
//!
//! This module defines the error response structures, the mapping from
//! [`EngineError`] to HTTP statuses, and the success bodies that are not
//! plain domain records.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::access::NavItem;
use crate::error::EngineError;
use crate::models::Profile;

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
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
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
        let (status, error) = match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            EngineError::InvalidShift { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_SHIFT",
                    message,
                    "The shift data contains invalid information",
                ),
            ),
            EngineError::InvalidDepartment { field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details("VALIDATION_ERROR", message, format!("field: {}", field)),
            ),
            EngineError::DepartmentNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("DEPARTMENT_NOT_FOUND", message),
            ),
            EngineError::DepartmentInUse { .. } => (
                StatusCode::CONFLICT,
                ApiError::with_details(
                    "DEPARTMENT_IN_USE",
                    message,
                    "Move or remove the linked users before deleting the department",
                ),
            ),
            EngineError::PermissionDenied { .. } => (
                StatusCode::FORBIDDEN,
                ApiError::new("PERMISSION_DENIED", message),
            ),
            EngineError::InvalidCredentials { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiError::new("INVALID_CREDENTIALS", "Invalid e-mail or password"),
            ),
            EngineError::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                ApiError::new("NOT_AUTHENTICATED", message),
            ),
            EngineError::Backend { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("BACKEND_ERROR", "Backend failure", message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}

/// Body returned by `POST /auth/sign-in`.
#[derive(Debug, Clone, Serialize)]
pub struct SignInResponse {
    /// Bearer token for subsequent requests.
    pub token: Uuid,
    /// The signed-in profile.
    pub profile: Profile,
}

/// Body returned by `GET /navigation`.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationResponse {
    /// Menu entries the session may see.
    pub items: Vec<NavItem>,
}
