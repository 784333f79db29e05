pub mod catalog;
pub mod companies;
pub mod dataset;
pub mod health;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dataset                                         working copy (GET)
/// /dataset/sync                                    re-fetch upstream (POST)
/// /dataset/import                                  load raw JSON text (POST)
///
/// /companies                                       list, create
/// /companies/{index}                               get, update, delete
/// /companies/{index}/models                        list, create
/// /companies/{index}/models/{model}                update, delete
/// /companies/{index}/models/{model}/form           prefilled edit form (GET)
/// /models/check                                    dry-run validation (POST)
///
/// /options                                         dropdown value sets (GET)
/// /changelog                                       changes since load (GET)
/// /export/json                                     models.json download (GET)
/// /export/csv                                      models.csv download (GET)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .merge(dataset::router(config.max_import_bytes))
        .merge(companies::router())
        .merge(catalog::router())
}
