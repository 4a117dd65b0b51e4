//! LLM client abstraction layer
//!
//! Trait-based abstraction for chat-completion backends, so the
//! pipeline stages can run against hosted providers (via `genai`) or a
//! mock in tests.

mod client;
mod error;
mod genai;
mod mock;
mod types;

pub use client::LlmClient;
pub use error::BackendError;
pub use mock::{MockLlmClient, MockResponse};
pub use self::genai::GenAiClient;
pub use types::{ChatMessage, LlmRequest, LlmResponse, MessageRole};
