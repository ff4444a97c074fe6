//! # quip-core
//!
//! Core library for `quip`, a small CLI that asks a hosted chat-completion
//! API for short flavor messages spoken in a fixed persona.
//!
//! The crate is organized into a handful of modules:
//!
//! - `config`: runtime configuration loaded once from the process
//!   environment, with defaults centralized in `config::constants`.
//! - `llm`: the [`ChatProvider`](llm::ChatProvider) transport seam, the
//!   request/response types, and the OpenAI-compatible client.
//! - `prompts`: deterministic persona templates for the completion and
//!   notification messages.
//! - `runner`: [`PromptRunner`], which ties configuration and provider
//!   together and owns response sanitization.
//!
//! Every invocation is stateless request/response: one prompt in, at most one
//! network call out, one line of text back.

pub mod config;
pub mod llm;
pub mod prompts;
pub mod runner;

pub use config::RunnerConfig;
pub use llm::{ChatProvider, ChatRequest, ChatResponse, LLMError, OpenAIProvider};
pub use runner::PromptRunner;
