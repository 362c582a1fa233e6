//! Error types for the puzzle API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use wordle_core::GuessError;

/// Errors that can occur in the puzzle API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No puzzle is registered under the requested slug.
    #[error("no puzzle named {0}")]
    NotFound(String),

    /// The request body could not be decoded.
    #[error("invalid request body: {0}")]
    BadRequest(String),

    /// The guess broke the puzzle's constraints.
    #[error(transparent)]
    Guess(#[from] GuessError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::Guess(_) => StatusCode::BAD_REQUEST,
        };

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
