//! Route definitions for options, changelog and exports.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Read-only catalog routes, merged into `/api/v1`.
///
/// ```text
/// GET /options     -> get_options
/// GET /changelog   -> get_changelog
/// GET /export/json -> export_json
/// GET /export/csv  -> export_csv
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/options", get(catalog::get_options))
        .route("/changelog", get(catalog::get_changelog))
        .route("/export/json", get(catalog::export_json))
        .route("/export/csv", get(catalog::export_csv))
}
