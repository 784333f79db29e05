//! Handlers for the models of a company, plus the form dry-run check.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use modelcat_core::catalog::Model;
use modelcat_core::validation::{
    length_advisories, validate_model, FieldViolation, LengthAdvisory, ModelForm,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// A stored model with its position and any length advisories for the
/// form it came from.
#[derive(Debug, Serialize)]
pub struct SavedModel {
    pub index: usize,
    pub model: Model,
    pub advisories: Vec<LengthAdvisory>,
}

/// Result of checking a model form without saving it.
#[derive(Debug, Serialize)]
pub struct ModelCheck {
    pub valid: bool,
    pub errors: Vec<FieldViolation>,
    pub advisories: Vec<LengthAdvisory>,
    /// The sanitized record that would be stored.
    pub model: Option<Model>,
}

/// GET /api/v1/companies/{index}/models
pub async fn list_models(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> AppResult<Json<DataResponse<Vec<Model>>>> {
    let session = state.session.read().await;
    let models = session.company(index)?.models.clone();
    Ok(Json(DataResponse { data: models }))
}

/// POST /api/v1/companies/{index}/models
pub async fn create_model(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(form): Json<ModelForm>,
) -> AppResult<(StatusCode, Json<DataResponse<SavedModel>>)> {
    let mut session = state.session.write().await;
    let model_index = session.add_model(index, &form)?;
    let model = session.model(index, model_index)?.clone();

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SavedModel {
                index: model_index,
                model,
                advisories: length_advisories(&form),
            },
        }),
    ))
}

/// PUT /api/v1/companies/{index}/models/{model}
pub async fn update_model(
    State(state): State<AppState>,
    Path((index, model_index)): Path<(usize, usize)>,
    Json(form): Json<ModelForm>,
) -> AppResult<Json<DataResponse<SavedModel>>> {
    let mut session = state.session.write().await;
    let model = session.update_model(index, model_index, &form)?.clone();

    Ok(Json(DataResponse {
        data: SavedModel {
            index: model_index,
            model,
            advisories: length_advisories(&form),
        },
    }))
}

/// DELETE /api/v1/companies/{index}/models/{model}
pub async fn delete_model(
    State(state): State<AppState>,
    Path((index, model_index)): Path<(usize, usize)>,
) -> AppResult<StatusCode> {
    state
        .session
        .write()
        .await
        .delete_model(index, model_index)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/companies/{index}/models/{model}/form
///
/// The edit form prefilled from the stored model.
pub async fn get_model_form(
    State(state): State<AppState>,
    Path((index, model_index)): Path<(usize, usize)>,
) -> AppResult<Json<DataResponse<ModelForm>>> {
    let form = state.session.read().await.model_form(index, model_index)?;
    Ok(Json(DataResponse { data: form }))
}

/// POST /api/v1/models/check
///
/// Validate a form without touching the session.
pub async fn check_model(Json(form): Json<ModelForm>) -> Json<DataResponse<ModelCheck>> {
    let advisories = length_advisories(&form);
    let check = match validate_model(&form) {
        Ok(model) => ModelCheck {
            valid: true,
            errors: Vec::new(),
            advisories,
            model: Some(model),
        },
        Err(errors) => ModelCheck {
            valid: false,
            errors: errors.violations().to_vec(),
            advisories,
            model: None,
        },
    };
    Json(DataResponse { data: check })
}
