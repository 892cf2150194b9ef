//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bandwise_core::CoreError;
use serde_json::json;
use thiserror::Error;

/// Message returned to clients for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors returned by API handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body is missing, malformed, or incomplete.
    #[error("{0}")]
    BadRequest(String),

    /// Something failed after validation. The detail is logged, never sent.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience alias for handler results.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg) => {
                tracing::debug!(error = %msg, "rejected request");
                msg
            }
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "request failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
