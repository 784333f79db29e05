//! Handlers for loading the catalog into the session.

use axum::extract::State;
use axum::Json;
use modelcat_core::catalog::Company;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Working copy as seen by the editor.
#[derive(Debug, Serialize)]
pub struct DatasetView {
    /// No data is loaded; the operator has to import a file.
    pub import_required: bool,
    pub source_url: String,
    pub companies: Vec<Company>,
}

/// Outcome of a sync or import.
#[derive(Debug, Serialize)]
pub struct LoadSummary {
    pub companies: usize,
    pub models: usize,
}

impl LoadSummary {
    fn of(companies: &[Company]) -> Self {
        Self {
            companies: companies.len(),
            models: companies.iter().map(|c| c.models.len()).sum(),
        }
    }
}

/// GET /api/v1/dataset
pub async fn get_dataset(State(state): State<AppState>) -> Json<DataResponse<DatasetView>> {
    let session = state.session.read().await;
    Json(DataResponse {
        data: DatasetView {
            import_required: session.is_import_required(),
            source_url: state.dataset.url().to_string(),
            companies: session.companies().to_vec(),
        },
    })
}

/// POST /api/v1/dataset/sync
///
/// Re-fetch the canonical dataset, discarding local edits. A failed fetch
/// leaves the session untouched and answers 502.
pub async fn sync_dataset(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<LoadSummary>>> {
    state.sync_dataset().await?;

    let session = state.session.read().await;
    Ok(Json(DataResponse {
        data: LoadSummary::of(session.companies()),
    }))
}

/// POST /api/v1/dataset/import
///
/// The body is the raw text of a `models.json` file.
pub async fn import_dataset(
    State(state): State<AppState>,
    body: String,
) -> AppResult<Json<DataResponse<LoadSummary>>> {
    let mut session = state.session.write().await;
    session.import_text(&body)?;

    Ok(Json(DataResponse {
        data: LoadSummary::of(session.companies()),
    }))
}
