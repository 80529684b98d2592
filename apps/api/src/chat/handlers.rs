//! Axum route handler for the chat relay.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::chat::{relay_or_fallback, ChatMessage};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
}

/// POST /api/v1/chat
///
/// Relays the transcript upstream. Upstream failures degrade to the fixed
/// fallback reply — the visitor never sees a raw error.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.messages.is_empty() {
        return Err(AppError::Validation("messages cannot be empty".to_string()));
    }

    let text = relay_or_fallback(&request.messages, state.chat.as_ref()).await;
    Ok(Json(ChatResponse { text }))
}
