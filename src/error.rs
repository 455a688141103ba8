//! Error types for the code share server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Share Error Enum ==
/// Unified error type for the code share server.
#[derive(Error, Debug)]
pub enum ShareError {
    /// Code is unknown or its entry has expired
    #[error("Code not found or has expired: {0}")]
    NotFound(String),

    /// Text is empty after trimming whitespace
    #[error("Text cannot be empty")]
    EmptyInput,

    /// Text exceeds the configured length cap
    #[error("Text is {length} characters long, maximum is {max}")]
    TextTooLong { length: usize, max: usize },

    /// Malformed request body
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ShareError {
    fn into_response(self) -> Response {
        let status = match &self {
            ShareError::NotFound(_) => StatusCode::NOT_FOUND,
            ShareError::EmptyInput
            | ShareError::TextTooLong { .. }
            | ShareError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the code share server.
pub type Result<T> = std::result::Result<T, ShareError>;
