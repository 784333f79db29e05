#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use modelcat_api::config::ServerConfig;
use modelcat_api::router::build_app_router;
use modelcat_api::state::AppState;

/// A small catalog with two companies and three models.
pub const DATASET: &str = r#"[
    {"name": "Mistral AI", "icon_path": "mistral.svg", "models": [
        {"simple_name": "Mistral Small", "license": "Apache-2.0", "params": 24,
         "arch": "dense", "release_date": "01/2025",
         "endpoint": {"api_type": "openai", "api_model_id": "mistral-small"}},
        {"simple_name": "Mistral Large", "license": "MRL", "params": "XL"}
    ]},
    {"name": "Meta", "models": [
        {"simple_name": "Llama 3.1 8B", "license": "Llama 3.1", "status": "archived"}
    ]}
]"#;

/// Build a test `ServerConfig` with safe defaults.
///
/// The dataset URL points at a closed local port so sync attempts fail fast.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        dataset_url: "http://127.0.0.1:9/models.json".to_string(),
        sync_on_startup: false,
        max_import_bytes: 64 * 1024,
    }
}

/// Build the full application router over an empty session.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config())
}

/// Same as [`build_test_app`] with a caller-supplied configuration.
pub fn build_test_app_with(config: ServerConfig) -> Router {
    let state = AppState::new(config.clone());
    build_app_router(state, &config)
}

/// Build the application router with [`DATASET`] already loaded.
pub async fn build_loaded_app() -> Router {
    let config = test_config();
    let state = AppState::new(config.clone());
    state
        .session
        .write()
        .await
        .import_text(DATASET)
        .expect("test dataset should parse");
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Body, json: bool) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    if json {
        request = request.header("content-type", "application/json");
    }
    app.oneshot(request.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty(), false).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty(), false).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(body.to_string()), true).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Body::from(body.to_string()), true).await
}

/// POST a raw text body, as a file upload would.
pub async fn post_text(app: Router, uri: &str, body: &str) -> Response {
    send(app, Method::POST, uri, Body::from(body.to_string()), false).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
