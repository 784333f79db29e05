use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether a dataset is loaded (fetched or imported).
    pub dataset_loaded: bool,
}

/// GET /health -- returns service health and whether data is loaded.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let dataset_loaded = !state.session.read().await.is_import_required();

    let status = if dataset_loaded { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        dataset_loaded,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
