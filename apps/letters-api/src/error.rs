//! Error types for the letters API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use letters_core::GenerateError;

/// Errors surfaced to HTTP clients. Per-email failures never land here;
/// they come back as failed entries inside a 200 response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Generate(err) => err.to_string(),
        };
        tracing::error!("letter generation failed: {}", message);

        let body = Json(json!({
            "Message": "Internal Server Error",
            "InternalMessage": message,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
