//! Error responses for the mocked API.
//!
//! The contract models exactly one failure - `unauthorized` on bad
//! credentials - plus 4xx rejections for malformed payloads and unknown
//! target identifiers. Handlers return `Result<T, BackendError>`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors a fixture endpoint can return.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Bad or missing credentials during authenticate.
    #[error("unauthorized")]
    Unauthorized,

    /// A request addressed an identifier the fixture does not know.
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed payload.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        tracing::debug!(%status, error = %self, "request rejected");

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type alias for `BackendError`.
pub type Result<T> = std::result::Result<T, BackendError>;
