//! Error body shared by every HTTP adapter.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;

/// JSON error body: a stable machine-readable code plus a human message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(code.to_string(), message)
    }

    /// Generic 500 body; the cause is logged, never returned.
    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError.to_string(), "Internal server error")
    }
}

/// Builds an error response, logging and masking infrastructure failures.
pub fn error_response(status: StatusCode, code: ErrorCode, message: String) -> Response {
    if status.is_server_error() {
        tracing::error!(code = %code, "Request failed: {}", message);
        return (status, Json(ErrorResponse::internal())).into_response();
    }
    (status, Json(ErrorResponse::from_code(code, message))).into_response()
}
