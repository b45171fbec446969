use axum::{extract::State, Json};
use serde::Deserialize;

use crate::chat::{ChatMessage, ChatReply};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    if req.messages.is_empty() {
        return Err(AppError::Validation(
            "messages must not be empty".to_string(),
        ));
    }
    let client = state.chat.as_ref().ok_or(AppError::ChatUnavailable)?;
    let reply = client.complete(&req.messages).await?;
    Ok(Json(reply))
}
