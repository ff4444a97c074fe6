//! Runtime configuration resolved from the process environment.
//!
//! Everything is read once at startup and never mutated afterwards. The debug
//! switch is an explicit field here rather than a process-global so that the
//! runner and CLI share one immutable view of the configuration.

pub mod constants;

use constants::{defaults, env_vars};
use std::env;
use tracing::debug;

/// Configuration for a single invocation.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// API credential. `None` means no network call may be attempted.
    pub api_key: Option<String>,
    /// Endpoint base, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Optional name interpolated into the persona templates.
    pub engineer_name: Option<String>,
    /// Whether diagnostic output is enabled for this invocation.
    pub debug: bool,
}

impl RunnerConfig {
    /// Load configuration from the environment. Empty-string values are
    /// treated as unset, so `CLAUDE_HOOKS_OPENAI_API_KEY=""` still
    /// short-circuits without a network call.
    pub fn from_env(debug: bool) -> Self {
        let config = Self {
            api_key: non_empty_var(env_vars::API_KEY),
            base_url: non_empty_var(env_vars::BASE_URL)
                .unwrap_or_else(|| defaults::BASE_URL.to_string()),
            model: non_empty_var(env_vars::MODEL).unwrap_or_else(|| defaults::MODEL.to_string()),
            engineer_name: non_empty_var(env_vars::ENGINEER_NAME),
            debug,
        };
        debug!(
            model = %config.model,
            base_url = %config.base_url,
            key_prefix = config.key_prefix().unwrap_or("<unset>"),
            personalized = config.engineer_name.is_some(),
            "loaded configuration"
        );
        config
    }

    /// First eight characters of the credential, for diagnostics only.
    pub fn key_prefix(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(|key| key.get(..8).unwrap_or(key))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> RunnerConfig {
        RunnerConfig {
            api_key: key.map(str::to_string),
            base_url: defaults::BASE_URL.to_string(),
            model: defaults::MODEL.to_string(),
            engineer_name: None,
            debug: false,
        }
    }

    #[test]
    fn key_prefix_truncates_long_credentials() {
        let config = config_with_key(Some("sk-test-abcdef123456"));
        assert_eq!(config.key_prefix(), Some("sk-test-"));
    }

    #[test]
    fn key_prefix_keeps_short_credentials_whole() {
        let config = config_with_key(Some("sk"));
        assert_eq!(config.key_prefix(), Some("sk"));
    }

    #[test]
    fn key_prefix_absent_without_credential() {
        assert_eq!(config_with_key(None).key_prefix(), None);
    }
}
