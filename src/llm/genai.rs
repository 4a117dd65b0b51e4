//! GenAI-based LLM client implementation
//!
//! Chat client built on the `genai` crate, supporting multiple hosted
//! providers (OpenAI, Claude, Gemini, Groq, Ollama, ...). Provider
//! credentials are read by `genai` from its standard environment
//! variables (OPENAI_API_KEY, ANTHROPIC_API_KEY, OLLAMA_HOST, ...).

use super::client::LlmClient;
use super::error::BackendError;
use super::types::{ChatMessage, LlmRequest, LlmResponse, MessageRole};
use async_trait::async_trait;
use genai::adapter::AdapterKind;
use genai::chat::{ChatMessage as GenAiChatMessage, ChatOptions, ChatRequest as GenAiChatRequest};
use genai::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Multi-provider chat client backed by the `genai` crate
pub struct GenAiClient {
    /// GenAI client instance
    client: Client,
    /// Model name
    model: String,
    /// Provider type
    provider: AdapterKind,
    /// Request timeout
    timeout: Duration,
}

impl GenAiClient {
    /// Creates a new client for the given provider and model.
    ///
    /// # Arguments
    ///
    /// * `provider` - LLM provider to use
    /// * `model` - Model name (without provider prefix)
    /// * `timeout` - Request timeout
    pub fn new(provider: AdapterKind, model: String, timeout: Duration) -> Self {
        debug!(
            "Creating GenAI client: provider={}, model={}",
            provider.as_str(),
            model,
        );

        Self {
            client: Client::default(),
            model,
            provider,
            timeout,
        }
    }

    /// Converts our ChatMessage to a genai ChatMessage
    fn convert_message(msg: &ChatMessage) -> GenAiChatMessage {
        match msg.role {
            MessageRole::System => GenAiChatMessage::system(&msg.content),
            MessageRole::User => GenAiChatMessage::user(&msg.content),
            MessageRole::Assistant => GenAiChatMessage::assistant(&msg.content),
        }
    }
}

#[async_trait]
impl LlmClient for GenAiClient {
    async fn chat(&self, request: LlmRequest) -> Result<LlmResponse, BackendError> {
        let start = std::time::Instant::now();

        let messages: Vec<GenAiChatMessage> =
            request.messages.iter().map(Self::convert_message).collect();

        let genai_request = GenAiChatRequest::new(messages);

        let mut options = ChatOptions::default();
        if let Some(temp) = request.temperature {
            options = options.with_temperature(temp as f64);
        }
        if let Some(max_tokens) = request.max_tokens {
            options = options.with_max_tokens(max_tokens);
        }

        let response = match tokio::time::timeout(
            self.timeout,
            self.client
                .exec_chat(&self.model, genai_request, Some(&options)),
        )
        .await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                error!("{} API error: {}", self.provider.as_str(), e);
                return Err(BackendError::ApiError {
                    message: format!("{} request failed: {}", self.provider.as_str(), e),
                });
            }
            Err(_) => {
                error!(
                    "{} request timed out after {}s",
                    self.provider.as_str(),
                    self.timeout.as_secs()
                );
                return Err(BackendError::TimeoutError {
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        let content = response.first_text().unwrap_or_default().to_string();

        Ok(LlmResponse::text(content, start.elapsed()))
    }

    fn name(&self) -> &str {
        self.provider.as_str()
    }

    fn model_info(&self) -> Option<String> {
        Some(self.model.clone())
    }
}

impl std::fmt::Debug for GenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAiClient")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genai_client_creation() {
        let client = GenAiClient::new(
            AdapterKind::OpenAI,
            "gpt-4o".to_string(),
            Duration::from_secs(30),
        );

        assert_eq!(client.name(), "OpenAI");
        assert_eq!(client.model_info(), Some("gpt-4o".to_string()));
    }

    #[test]
    fn test_debug_impl() {
        fn assert_debug<T: std::fmt::Debug>() {}
        assert_debug::<GenAiClient>();
    }
}
