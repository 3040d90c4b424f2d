//! API error types and their HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Result type for HTTP handlers
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by the request handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed input: missing/empty/wrong-typed fields, non-JSON body
    #[error("{0}")]
    BadRequest(String),

    /// Storage-layer failure (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
