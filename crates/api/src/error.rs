use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use modelcat_core::error::CoreError;
use modelcat_sync::SyncError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`SyncError`] for upstream
/// fetch failures, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `modelcat_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The dataset source could not be reached or returned garbage.
    #[error(transparent)]
    Sync(#[from] SyncError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut details = None;

        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, index } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} at index {index} not found"),
                ),
                CoreError::InvalidFields(errors) => {
                    details = serde_json::to_value(errors).ok();
                    (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        errors.to_string(),
                    )
                }
                CoreError::Import(msg) => (StatusCode::BAD_REQUEST, "IMPORT_ERROR", msg.clone()),
                CoreError::NothingToExport => {
                    (StatusCode::CONFLICT, "CONFLICT", core.to_string())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Upstream errors ---
            AppError::Sync(err) => {
                tracing::warn!(error = %err, "Dataset sync failed");
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", err.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, axum::Json(body)).into_response()
    }
}
