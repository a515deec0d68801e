//! Error types for Parley
//!
//! This module defines custom error types used throughout the application.
//! Every error is surfaced to the client as a short generic message; detail
//! stays in the server logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Password is required")]
    MissingCredential,

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Forbidden")]
    Forbidden,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body, `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingCredential => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::AuthenticationFailed => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
            // Provider and transport failures all collapse to the same
            // generic message; the cause is logged where it happened.
            AppError::Upstream(_) | AppError::HttpError(_) | AppError::JsonError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while processing your request.".to_string(),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = ErrorResponse { error: message };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
