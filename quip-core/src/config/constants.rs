//! Environment variable names and defaults, centralized to avoid hardcoding
//! throughout the codebase.

/// Environment variables read by [`RunnerConfig::from_env`](super::RunnerConfig::from_env).
pub mod env_vars {
    pub const API_KEY: &str = "CLAUDE_HOOKS_OPENAI_API_KEY";
    pub const BASE_URL: &str = "CLAUDE_HOOKS_OPENAI_API_BASE_URL";
    pub const MODEL: &str = "CLAUDE_HOOKS_OPENAI_MODEL";
    pub const ENGINEER_NAME: &str = "ENGINEER_NAME";
}

/// Defaults applied when the corresponding variable is unset or empty.
pub mod defaults {
    pub const BASE_URL: &str = "https://api.openai.com/v1";

    /// Fast-tier model; flavor messages do not need a reasoning model.
    pub const MODEL: &str = "gpt-4.1-mini";
}

/// Fixed generation parameters sent with every request.
pub mod generation {
    pub const MAX_TOKENS: u32 = 100;
    pub const TEMPERATURE: f32 = 0.7;
}
