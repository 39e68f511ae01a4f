//! The two user-visible failure kinds and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

/// Result type for store and handler operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to API clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Lookup by id found no matching user.
    #[error("User not found")]
    NotFound,

    /// Create request missing a required field (or it was empty).
    #[error("Name and email are required.")]
    MissingFields,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MissingFields => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "message": self.to_string() }));
        (self.status(), body).into_response()
    }
}
