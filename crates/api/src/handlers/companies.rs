//! Handlers for company records.
//!
//! Companies are addressed by their position in the working copy. Deleting
//! a company shifts the indices of those after it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use modelcat_core::catalog::Company;
use modelcat_core::validation::CompanyForm;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// One row of the company list.
#[derive(Debug, Serialize)]
pub struct CompanySummary {
    pub index: usize,
    pub name: String,
    pub icon_path: Option<String>,
    pub model_count: usize,
}

/// A company together with its current index.
#[derive(Debug, Serialize)]
pub struct IndexedCompany {
    pub index: usize,
    pub company: Company,
}

/// GET /api/v1/companies
pub async fn list_companies(
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<CompanySummary>>> {
    let session = state.session.read().await;
    let summaries = session
        .companies()
        .iter()
        .enumerate()
        .map(|(index, c)| CompanySummary {
            index,
            name: c.name.clone(),
            icon_path: c.icon_path.clone(),
            model_count: c.models.len(),
        })
        .collect();
    Json(DataResponse { data: summaries })
}

/// POST /api/v1/companies
pub async fn create_company(
    State(state): State<AppState>,
    Json(form): Json<CompanyForm>,
) -> AppResult<(StatusCode, Json<DataResponse<IndexedCompany>>)> {
    let mut session = state.session.write().await;
    let index = session.add_company(&form)?;
    let company = session.company(index)?.clone();

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: IndexedCompany { index, company },
        }),
    ))
}

/// GET /api/v1/companies/{index}
pub async fn get_company(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> AppResult<Json<DataResponse<Company>>> {
    let session = state.session.read().await;
    let company = session.company(index)?.clone();
    Ok(Json(DataResponse { data: company }))
}

/// PUT /api/v1/companies/{index}
///
/// Replaces the company's own fields; its models are kept.
pub async fn update_company(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(form): Json<CompanyForm>,
) -> AppResult<Json<DataResponse<Company>>> {
    let mut session = state.session.write().await;
    let company = session.update_company(index, &form)?.clone();
    Ok(Json(DataResponse { data: company }))
}

/// DELETE /api/v1/companies/{index}
pub async fn delete_company(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> AppResult<StatusCode> {
    state.session.write().await.delete_company(index)?;
    Ok(StatusCode::NO_CONTENT)
}
