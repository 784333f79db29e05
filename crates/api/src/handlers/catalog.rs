//! Read-only views over the working copy: dropdown options, the changelog
//! and file exports.

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use modelcat_core::changelog::ChangeEntry;
use modelcat_core::options::FieldOptions;
use modelcat_core::transfer::{CSV_FILE_NAME, JSON_FILE_NAME};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Changelog of the working copy against the loaded snapshot.
#[derive(Debug, Serialize)]
pub struct ChangelogView {
    pub has_changes: bool,
    pub change_count: usize,
    pub entries: Vec<ChangeEntry>,
    /// Rendered text, one entry per line.
    pub text: String,
}

/// GET /api/v1/options
pub async fn get_options(State(state): State<AppState>) -> Json<DataResponse<FieldOptions>> {
    let options = state.session.read().await.options();
    Json(DataResponse { data: options })
}

/// GET /api/v1/changelog
pub async fn get_changelog(State(state): State<AppState>) -> Json<DataResponse<ChangelogView>> {
    let report = state.session.read().await.changelog();
    Json(DataResponse {
        data: ChangelogView {
            has_changes: report.has_changes(),
            change_count: report.change_count(),
            entries: report.entries().to_vec(),
            text: report.to_string(),
        },
    })
}

/// GET /api/v1/export/json
///
/// Download the working copy as `models.json`.
pub async fn export_json(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let json = state.session.read().await.export_json()?;
    Ok(attachment("application/json", JSON_FILE_NAME, json))
}

/// GET /api/v1/export/csv
///
/// Download one row per model as `models.csv`. 409 when there are no models.
pub async fn export_csv(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let csv = state.session.read().await.export_csv()?;
    Ok(attachment("text/csv; charset=utf-8", CSV_FILE_NAME, csv))
}

fn attachment(content_type: &'static str, file_name: &str, body: String) -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, content_type.to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
}
