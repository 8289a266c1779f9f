use crate::api::AniListError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to add-on clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// AniList failed; the request fails as a whole, nothing partial is served
    #[error("AniList request failed: {0}")]
    Upstream(#[from] AniListError),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    err: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Upstream(e) => {
                tracing::error!(error = %e, upstream_status = ?e.status(), "Upstream request failed");
                StatusCode::BAD_GATEWAY
            }
        };

        let body = ErrorResponse {
            err: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
