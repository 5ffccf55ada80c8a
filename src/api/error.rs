//! Error types for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors a book handler can answer with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The requested book id is not in the seeded store.
    #[error("Book not found: {0}")]
    BookNotFound(u64),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BookNotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
