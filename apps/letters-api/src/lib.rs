//! Letters API server library
//!
//! Wires the letter generation workflow from `letters-core` to an HTTP
//! endpoint and to the Google store clients. The binary in `main.rs` only
//! parses arguments, loads configuration and serves the router built here.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod google;
pub mod handlers;
pub mod state;

use state::AppState;

/// Build the application router over the given state.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/generate-letter", post(handlers::generate_letter))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
