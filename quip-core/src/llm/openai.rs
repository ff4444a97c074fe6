//! OpenAI-compatible chat-completions client.

use crate::llm::provider::{ChatProvider, ChatRequest, ChatResponse, LLMError};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::{Value, json};

pub struct OpenAIProvider {
    api_key: String,
    http_client: HttpClient,
    base_url: String,
}

impl OpenAIProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            http_client: HttpClient::new(),
            base_url,
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAIProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, request: ChatRequest) -> Result<ChatResponse, LLMError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = json!({
            "model": request.model,
            "messages": request.messages,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LLMError::Provider(format!("HTTP {status}: {error_text}")));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| LLMError::Provider(format!("failed to parse response: {e}")))?;

        parse_chat_response(payload)
    }
}

/// Extract the first candidate's message text from a chat-completions body.
fn parse_chat_response(payload: Value) -> Result<ChatResponse, LLMError> {
    let choices = payload
        .get("choices")
        .and_then(|c| c.as_array())
        .ok_or_else(|| LLMError::Provider("invalid response format: missing choices".to_string()))?;

    let first = choices.first().ok_or(LLMError::EmptyResponse)?;

    let content = first
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .ok_or(LLMError::EmptyResponse)?;

    let model = payload
        .get("model")
        .and_then(|m| m.as_str())
        .map(str::to_string);

    Ok(ChatResponse {
        content: content.to_string(),
        model,
    })
}
