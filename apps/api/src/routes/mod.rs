pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS reference data
        .route("/api/v1/ats/systems", get(handlers::handle_list_systems))
        .route("/api/v1/ats/systems/:id", get(handlers::handle_get_system))
        // Detection & recommendation
        .route("/api/v1/ats/detect", post(handlers::handle_detect))
        .route(
            "/api/v1/ats/recommendation",
            get(handlers::handle_recommendation),
        )
        .route(
            "/api/v1/ats/download-advice",
            get(handlers::handle_download_advice),
        )
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
