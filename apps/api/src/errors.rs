use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::chat::ChatError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Snapshot read failures are deliberately NOT represented here: a missing
/// or malformed snapshot degrades to empty results, never an error response.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream responses pass through with their original status and body,
    /// not the error envelope.
    #[error("Upstream returned status {status}")]
    Upstream { status: u16, body: serde_json::Value },

    #[error("Chat proxy is not configured")]
    ChatUnavailable,

    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::Upstream { status, body } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                return (status, Json(body)).into_response();
            }
            AppError::ChatUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "CHAT_UNAVAILABLE",
                "Chat is not configured on this deployment".to_string(),
            ),
            AppError::Chat(e) => {
                tracing::error!("Chat proxy error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "CHAT_ERROR",
                    "The chat backend could not be reached".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
