//! The request pipeline: credential check, one provider call, sanitization.

use crate::config::RunnerConfig;
use crate::llm::{ChatProvider, ChatRequest, LLMError, OpenAIProvider};
use crate::prompts;
use tracing::debug;

/// Quote characters stripped from the edges of model output. Models tend to
/// wrap flavor text in straight or curly quotes despite being told not to.
const SURROUNDING_QUOTES: &[char] = &['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

/// Stateless runner for a single invocation. Holds the immutable
/// configuration and the transport it will use for at most one call.
pub struct PromptRunner {
    config: RunnerConfig,
    provider: Box<dyn ChatProvider>,
}

impl PromptRunner {
    /// Build a runner from the environment with the real OpenAI-compatible
    /// transport. The provider is constructed unconditionally but is never
    /// invoked when the credential is absent.
    pub fn from_env(debug: bool) -> Self {
        let config = RunnerConfig::from_env(debug);
        let provider = Box::new(OpenAIProvider::new(
            config.api_key.clone().unwrap_or_default(),
            config.base_url.clone(),
        ));
        Self { config, provider }
    }

    /// Build a runner over an explicit provider. Test seam.
    pub fn with_provider(config: RunnerConfig, provider: Box<dyn ChatProvider>) -> Self {
        Self { config, provider }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Send `text` verbatim as a single user message and return the first
    /// candidate's reply trimmed of surrounding whitespace.
    ///
    /// Fails fast with [`LLMError::MissingCredential`] before any network
    /// activity when no API key is configured.
    pub async fn send_prompt(&self, text: &str) -> Result<String, LLMError> {
        if self.config.api_key.is_none() {
            debug!("no API key configured, skipping request");
            return Err(LLMError::MissingCredential);
        }

        debug!(
            provider = self.provider.name(),
            model = %self.config.model,
            base_url = %self.config.base_url,
            key_prefix = self.config.key_prefix().unwrap_or_default(),
            "sending chat request"
        );

        let request = ChatRequest::user(self.config.model.clone(), text.to_string());
        match self.provider.generate(request).await {
            Ok(response) => {
                debug!(model = ?response.model, "received response");
                Ok(response.content.trim().to_string())
            }
            Err(err) => {
                debug!(error = %err, "chat request failed");
                Err(err)
            }
        }
    }

    /// Generate a task-completion flavor message and sanitize it.
    pub async fn generate_completion_message(&self) -> Result<String, LLMError> {
        let raw = self.send_prompt(&self.completion_prompt()).await?;
        Ok(sanitize_message(&raw))
    }

    /// Generate a needs-attention flavor message and sanitize it.
    pub async fn generate_notification_message(&self) -> Result<String, LLMError> {
        let raw = self.send_prompt(&self.notification_prompt()).await?;
        Ok(sanitize_message(&raw))
    }

    pub fn completion_prompt(&self) -> String {
        prompts::completion_prompt(self.config.engineer_name.as_deref())
    }

    pub fn notification_prompt(&self) -> String {
        prompts::notification_prompt(self.config.engineer_name.as_deref())
    }
}

/// Strip surrounding quotes and whitespace, then keep only the first line.
/// Quotes are stripped again after the line split so a multi-line response
/// never leaves a dangling quote at the end of the kept line.
fn sanitize_message(raw: &str) -> String {
    let stripped = strip_quotes(raw);
    let first_line = stripped.lines().next().unwrap_or("");
    strip_quotes(first_line).to_string()
}

fn strip_quotes(text: &str) -> &str {
    text.trim().trim_matches(SURROUNDING_QUOTES).trim()
}
