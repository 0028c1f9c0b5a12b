//! # Centralized Error Handling
//!
//! This module defines the server-wide error type [`AppError`]. It follows the
//! `thiserror` pattern and maps every variant onto an HTTP reply.
//!
//! ## Error Categories
//!
//! 1. **Client Errors** (4xx)
//!    - [`InvalidInput`](AppError::InvalidInput) → 400 Bad Request
//!
//! 2. **Server Errors** (5xx)
//!    - [`Storage`](AppError::Storage) → 500, reported as "Failed to save submission"
//!    - [`Config`](AppError::Config) / [`Internal`](AppError::Internal) → 500
//!
//! ## Reply Body
//!
//! Every error renders as `{"message": ..., "code": ...}`. The contact form
//! shows `message` after "Submission failed: ", so client errors carry their
//! text verbatim while server errors are replaced by a fixed phrase.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require(value: &str) -> Result<&str> {
//!     if value.trim().is_empty() {
//!         return Err(AppError::InvalidInput("Missing required fields".to_string()));
//!     }
//!     Ok(value)
//! }
//! ```

use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Server-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request rejected because of its content.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Writing a submission failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Unexpected failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Storage(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message shown to the submitter.
    ///
    /// Server-side failures never expose their detail.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::Storage(_) => "Failed to save submission".to_string(),
            AppError::Config(_) | AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Config",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Storage(_) => "Storage",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = Json(json!({
            "message": self.user_message(),
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}

/// Environment problems surface while loading [`crate::Config`].
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

/// IO failures only happen while writing submissions.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
