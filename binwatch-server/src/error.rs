//! HTTP error mapping.

use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use binwatch_core::BinError;
use serde_json::json;

/// Errors surfaced to HTTP clients as `{"detail": ...}` payloads.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ApiError {
    /// Requested bin does not exist.
    #[error("Bin not found")]
    NotFound,
    /// Path or query parameters could not be coerced to their types.
    #[error("{0}")]
    InvalidInput(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<BinError> for ApiError {
    fn from(err: BinError) -> Self {
        match err {
            BinError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
