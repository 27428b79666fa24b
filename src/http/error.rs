//! Mapping of handler failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::dice::RollError;

/// Errors surfaced by request handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Roll(#[from] RollError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Details stay in the logs and on the span.
        match self {
            AppError::Roll(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
