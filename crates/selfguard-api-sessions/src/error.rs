//! Error types for the session self-service API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during session/device self-service operations.
///
/// A missing target row is not represented here: revoking a session or
/// device that is already gone is a benign no-op, never an error.
#[derive(Debug, Error)]
pub enum ApiSessionsError {
    /// Validation error for request input (with optional field).
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Supplied password does not match the stored hash.
    #[error("This password does not match our records.")]
    InvalidCredentials,

    /// Authentication required or caller context missing.
    #[error("{0}")]
    Unauthorized(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response format for API errors.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiSessionsError {
    /// Create a validation error for a specific field.
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a validation error without a specific field.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<selfguard_auth::AuthError> for ApiSessionsError {
    fn from(err: selfguard_auth::AuthError) -> Self {
        // Hash-format or hashing failures are operational, not a wrong
        // password; the reverifier maps mismatches itself.
        Self::Internal(format!("Password verification failed: {err}"))
    }
}

impl IntoResponse for ApiSessionsError {
    fn into_response(self) -> Response {
        let (status, error_code, message, field) = match &self {
            ApiSessionsError::Validation { message, field } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message.clone(),
                field.clone(),
            ),
            ApiSessionsError::InvalidCredentials => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_credentials",
                self.to_string(),
                Some("password".to_string()),
            ),
            ApiSessionsError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "unauthorized", msg.clone(), None)
            }
            ApiSessionsError::Database(err) => {
                tracing::error!(error = %err, "Database error in session self-service");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
            ApiSessionsError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error in session self-service");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: error_code.to_string(),
            message,
            field,
        };

        (status, Json(body)).into_response()
    }
}
