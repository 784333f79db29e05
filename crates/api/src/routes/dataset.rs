//! Route definitions for loading the dataset.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::dataset;
use crate::state::AppState;

/// Dataset routes, merged into `/api/v1`.
///
/// Uploads to `/dataset/import` may be up to `max_import_bytes`; larger
/// bodies are refused with 413 before the handler runs.
///
/// ```text
/// GET  /dataset        -> get_dataset
/// POST /dataset/sync   -> sync_dataset
/// POST /dataset/import -> import_dataset
/// ```
pub fn router(max_import_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/dataset", get(dataset::get_dataset))
        .route("/dataset/sync", post(dataset::sync_dataset))
        .route(
            "/dataset/import",
            post(dataset::import_dataset).layer(DefaultBodyLimit::max(max_import_bytes)),
        )
}
