//! HTTP handlers for the letters API

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use letters_core::{LetterRequest, LetterResult};

use crate::error::ApiError;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Success envelope, field names kept from the original service
#[derive(Serialize)]
pub struct GenerateLetterResponse {
    #[serde(rename = "Message")]
    pub message: &'static str,
    #[serde(rename = "Response")]
    pub response: Vec<LetterResult>,
}

/// Handler: POST /generate-letter
pub async fn generate_letter(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LetterRequest>,
) -> Result<Json<GenerateLetterResponse>, ApiError> {
    info!("generate-letter request for {} email(s)", request.email.len());

    let results = state.generator.generate(&request).await?;

    Ok(Json(GenerateLetterResponse {
        message: "Success",
        response: results,
    }))
}
