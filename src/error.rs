// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::services::gemini::GeminiError;

/// Request-scoped failures, mapped straight to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// The payload was not JSON, had no `message` key, or the message
    /// was empty. Detected before any upstream call.
    #[error("Invalid input, 'message' field is required.")]
    InvalidMessage,
    /// Anything the model client reported back: transport, auth, quota,
    /// unusable reply. One attempt, surfaced verbatim.
    #[error("Failed to process request: {0}")]
    Upstream(#[from] GeminiError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidMessage => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
