//! Error types for the admin user management API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use photark_db::StoreError;
use serde::Serialize;
use utoipa::ToSchema;

/// A single field validation error with detailed information.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldValidationError {
    /// The field name that failed validation.
    pub field: String,
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional constraint details (e.g., `max_length`, pattern).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<serde_json::Value>,
}

impl From<crate::validation::ValidationError> for FieldValidationError {
    fn from(err: crate::validation::ValidationError) -> Self {
        Self {
            field: err.field,
            code: err.code,
            message: err.message,
            constraints: err.constraints,
        }
    }
}

/// Error type for the admin user management API.
#[derive(Debug, thiserror::Error)]
pub enum ApiUsersError {
    /// User not found (or soft-deleted and not requested with `withDeleted`).
    #[error("User not found")]
    NotFound,

    /// Email already in use by another account.
    #[error("Email already exists")]
    EmailConflict,

    /// Validation error (invalid email, weak password, etc.).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation not permitted (e.g., deleting an admin account).
    #[error("{0}")]
    Forbidden(String),

    /// Authentication required.
    #[error("Authentication required")]
    Unauthorized,

    /// Internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Storage layer error.
    #[error("Store error: {0}")]
    Store(StoreError),

    /// Field-level validation errors with detailed information.
    #[error("Validation failed")]
    ValidationErrors {
        /// Individual field validation errors.
        errors: Vec<FieldValidationError>,
    },
}

impl From<StoreError> for ApiUsersError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmailConflict => ApiUsersError::EmailConflict,
            other => ApiUsersError::Store(other),
        }
    }
}

/// RFC 7807 Problem Details response format.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Field-level validation errors (present only for validation failures).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldValidationError>>,
}

impl IntoResponse for ApiUsersError {
    fn into_response(self) -> Response {
        let (status, problem) = match &self {
            ApiUsersError::NotFound => (
                StatusCode::NOT_FOUND,
                ProblemDetails {
                    problem_type: "https://photark.app/problems/not-found".to_string(),
                    title: "Not Found".to_string(),
                    status: 404,
                    detail: Some("User not found".to_string()),
                    errors: None,
                },
            ),
            ApiUsersError::EmailConflict => (
                StatusCode::CONFLICT,
                ProblemDetails {
                    problem_type: "https://photark.app/problems/conflict".to_string(),
                    title: "Conflict".to_string(),
                    status: 409,
                    detail: Some("Email already in use by another account".to_string()),
                    errors: None,
                },
            ),
            ApiUsersError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ProblemDetails {
                    problem_type: "https://photark.app/problems/validation-error".to_string(),
                    title: "Validation Error".to_string(),
                    status: 400,
                    detail: Some(msg.clone()),
                    errors: None,
                },
            ),
            ApiUsersError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                ProblemDetails {
                    problem_type: "https://photark.app/problems/forbidden".to_string(),
                    title: "Forbidden".to_string(),
                    status: 403,
                    detail: Some(msg.clone()),
                    errors: None,
                },
            ),
            ApiUsersError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ProblemDetails {
                    problem_type: "https://photark.app/problems/unauthorized".to_string(),
                    title: "Unauthorized".to_string(),
                    status: 401,
                    detail: Some("Missing or invalid authentication token".to_string()),
                    errors: None,
                },
            ),
            ApiUsersError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails {
                        problem_type: "https://photark.app/problems/internal-error".to_string(),
                        title: "Internal Server Error".to_string(),
                        status: 500,
                        detail: Some("An internal error occurred".to_string()),
                        errors: None,
                    },
                )
            }
            ApiUsersError::Store(e) => {
                tracing::error!("Store error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails {
                        problem_type: "https://photark.app/problems/internal-error".to_string(),
                        title: "Internal Server Error".to_string(),
                        status: 500,
                        detail: Some("A storage error occurred".to_string()),
                        errors: None,
                    },
                )
            }
            ApiUsersError::ValidationErrors { errors } => (
                StatusCode::BAD_REQUEST,
                ProblemDetails {
                    problem_type: "https://photark.app/problems/validation-error".to_string(),
                    title: "Validation Error".to_string(),
                    status: 400,
                    detail: Some(format!("{} validation error(s)", errors.len())),
                    errors: Some(errors.clone()),
                },
            ),
        };

        (status, Json(problem)).into_response()
    }
}
