use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use menugen_core::error::CoreError;
use menugen_provider::ProviderError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`ProviderError`] for
/// synchronous capability failures. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
///
/// Capability failures inside variant pipelines never pass through here;
/// they are recorded as the slot's `error` status instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `menugen_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A synchronous provider capability failure.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Provider(err) => {
                tracing::error!(error = %err, "Provider capability call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_ERROR",
                    format!("AI provider request failed: {err}"),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
