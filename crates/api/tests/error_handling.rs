//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use assert_matches::assert_matches;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use modelcat_api::error::AppError;
use modelcat_core::error::CoreError;
use modelcat_core::validation::ValidationErrors;
use modelcat_sync::SyncError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "model",
        index: 3,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "model at index 3 not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::InvalidFields maps to 400 with per-field details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_fields_return_400_with_details() {
    let mut errors = ValidationErrors::default();
    errors.push("simple_name", "Le nom simple est requis");
    errors.push("url", "Invalid URL format");

    let (status, json) = error_to_response(CoreError::from(errors).into()).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Le nom simple est requis; Invalid URL format");
    assert_eq!(json["details"][1]["field"], "url");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Import maps to 400 with IMPORT_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn import_error_returns_400() {
    let err = AppError::Core(CoreError::Import("no JSON data provided".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "IMPORT_ERROR");
    assert_eq!(json["error"], "no JSON data provided");
    assert!(json.get("details").is_none());
}

// ---------------------------------------------------------------------------
// Test: CoreError::NothingToExport maps to 409 without details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn nothing_to_export_returns_409() {
    let (status, json) = error_to_response(CoreError::NothingToExport.into()).await;

    assert_matches!(
        (status.as_u16(), json["code"].as_str(), json.get("details")),
        (409, Some("CONFLICT"), None)
    );
}

// ---------------------------------------------------------------------------
// Test: SyncError maps to 502 with UPSTREAM_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sync_error_returns_502() {
    let err = AppError::Sync(SyncError::ApiError {
        status: 404,
        body: "404: Not Found".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    assert_eq!(json["error"], "Dataset source error (404): 404: Not Found");
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

// ---------------------------------------------------------------------------
// Test: Internal errors are sanitized
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_errors_return_sanitized_500() {
    for err in [
        AppError::InternalError("secret detail".into()),
        AppError::Core(CoreError::Internal("serializer exploded".into())),
    ] {
        let (status, json) = error_to_response(err).await;

        assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_matches!(json["code"].as_str(), Some("INTERNAL_ERROR"));
        assert_eq!(json["error"], "An internal error occurred");
    }
}
