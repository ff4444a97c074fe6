//! Chat-completion transport layer.
//!
//! [`ChatProvider`] is the seam between the runner and the network: the real
//! implementation is the OpenAI-compatible client in [`openai`], and tests
//! substitute their own.

pub mod openai;
pub mod provider;

pub use openai::OpenAIProvider;
pub use provider::{ChatProvider, ChatRequest, ChatResponse, LLMError, Message, MessageRole};
