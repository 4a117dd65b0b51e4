use super::error::BackendError;
use super::types::{LlmRequest, LlmResponse};
use async_trait::async_trait;

/// Trait for LLM chat backends.
///
/// Every pipeline stage speaks to the hosted model through this trait,
/// so the whole pipeline can run against a mock in tests.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn chat(&self, request: LlmRequest) -> Result<LlmResponse, BackendError>;

    fn name(&self) -> &str;

    fn model_info(&self) -> Option<String> {
        None
    }
}
