//! Provider-agnostic request and response types.

use crate::config::constants::generation;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One chat-completion request. Constructed fresh per call and never reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChatRequest {
    /// Build a single-user-message request with the fixed generation
    /// parameters.
    pub fn user(model: String, text: String) -> Self {
        Self {
            messages: vec![Message::user(text)],
            model,
            max_tokens: generation::MAX_TOKENS,
            temperature: generation::TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn user(content: String) -> Self {
        Self {
            role: MessageRole::User,
            content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// First candidate extracted from a chat-completion response.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: String,
    /// Model the server reports having used, when present.
    pub model: Option<String>,
}

/// Failure taxonomy for the request path. Callers other than diagnostics
/// treat every variant uniformly as "no message produced".
#[derive(Debug, thiserror::Error)]
pub enum LLMError {
    #[error("no API credential configured")]
    MissingCredential,
    #[error("network error: {0}")]
    Network(String),
    #[error("provider error: {0}")]
    Provider(String),
    #[error("response contained no usable text")]
    EmptyResponse,
}

/// Transport seam for chat-completion backends.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Provider name for diagnostics, e.g. "openai".
    fn name(&self) -> &str;

    /// Issue one completion request.
    async fn generate(&self, request: ChatRequest) -> Result<ChatResponse, LLMError>;
}
