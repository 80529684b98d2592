//! Chat relay — forwards visitor questions to the hosted language model.
//!
//! The relay owns the outbound payload shape: the fixed portfolio context is
//! prepended as the first user turn, then the conversation history follows
//! with roles mapped to the upstream's turn names (assistant → "model",
//! user → "user"). The upstream itself sits behind `GenerativeBackend` so
//! callers and tests never talk to the network directly.
//!
//! No retries anywhere: every failure is surfaced once, and the handler
//! substitutes a fixed fallback reply instead of the raw error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

pub mod gemini;
pub mod handlers;
pub mod prompts;

/// One turn of the visitor-facing transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of the upstream payload (`contents` entry in the Gemini API).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    pub role: &'static str,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    pub text: String,
}

impl Content {
    fn turn(role: &'static str, text: String) -> Self {
        Self {
            role,
            parts: vec![Part { text }],
        }
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("upstream returned an empty reply")]
    EmptyReply,
}

/// The single point of entry for upstream generative calls. The production
/// impl is `gemini::GeminiClient`; tests substitute capturing mocks.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(&self, contents: &[Content]) -> Result<String, RelayError>;
}

/// Builds the full upstream payload for a conversation history.
///
/// The fixed portfolio context always comes first, as a user turn; the
/// history follows in order with mapped roles.
pub fn build_contents(history: &[ChatMessage]) -> Vec<Content> {
    let mut contents = Vec::with_capacity(history.len() + 1);
    contents.push(Content::turn("user", prompts::PORTFOLIO_CONTEXT.to_string()));
    for message in history {
        let role = match message.role {
            ChatRole::Assistant => "model",
            ChatRole::User => "user",
        };
        contents.push(Content::turn(role, message.content.clone()));
    }
    contents
}

/// Relays the conversation upstream and returns the assistant's reply text.
pub async fn relay(
    history: &[ChatMessage],
    backend: &dyn GenerativeBackend,
) -> Result<String, RelayError> {
    let contents = build_contents(history);
    backend.generate(&contents).await
}

/// Relay with the user-facing degradation applied: any upstream failure is
/// logged and replaced by the fixed fallback reply.
pub async fn relay_or_fallback(history: &[ChatMessage], backend: &dyn GenerativeBackend) -> String {
    match relay(history, backend).await {
        Ok(text) => text,
        Err(e) => {
            error!("chat relay failed: {e}");
            prompts::FALLBACK_REPLY.to_string()
        }
    }
}
