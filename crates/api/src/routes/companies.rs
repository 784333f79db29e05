//! Route definitions for companies and their models.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{companies, models};
use crate::state::AppState;

/// Company and model routes, merged into `/api/v1`.
///
/// ```text
/// GET    /companies                                  -> list_companies
/// POST   /companies                                  -> create_company
/// GET    /companies/{index}                          -> get_company
/// PUT    /companies/{index}                          -> update_company
/// DELETE /companies/{index}                          -> delete_company
/// GET    /companies/{index}/models                   -> list_models
/// POST   /companies/{index}/models                   -> create_model
/// PUT    /companies/{index}/models/{model}           -> update_model
/// DELETE /companies/{index}/models/{model}           -> delete_model
/// GET    /companies/{index}/models/{model}/form      -> get_model_form
/// POST   /models/check                               -> check_model
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/companies",
            get(companies::list_companies).post(companies::create_company),
        )
        .route(
            "/companies/{index}",
            get(companies::get_company)
                .put(companies::update_company)
                .delete(companies::delete_company),
        )
        .route(
            "/companies/{index}/models",
            get(models::list_models).post(models::create_model),
        )
        .route(
            "/companies/{index}/models/{model}",
            put(models::update_model).delete(models::delete_model),
        )
        .route(
            "/companies/{index}/models/{model}/form",
            get(models::get_model_form),
        )
        .route("/models/check", post(models::check_model))
}
