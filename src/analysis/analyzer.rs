//! Integration analysis stage (phase 2)
//!
//! One LLM call over the complete enriched inventory. Unlike research,
//! this stage does not fan out: cross-tool opportunities only emerge
//! with the whole stack in context.

use super::prompt::{analysis_prompt, stack_context, SYSTEM_PROMPT};
use super::response::parse_analysis_response;
use super::types::Opportunity;
use crate::inventory::ToolRecord;
use crate::llm::{BackendError, ChatMessage, LlmClient, LlmRequest};
use crate::research::{ParseError, ResearchResult};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors from the analysis stage; all of them are fatal for the run
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Analysis call failed: {0}")]
    Backend(#[from] BackendError),

    #[error("Analysis output unusable: {0}")]
    Parse(#[from] ParseError),
}

/// Maximum response tokens for the analysis call; the opportunity list grows
/// with the stack, not with research depth.
const ANALYSIS_MAX_TOKENS: u32 = 4096;

/// Full-stack integration analyzer
pub struct IntegrationAnalyzer {
    client: Arc<dyn LlmClient>,
}

impl IntegrationAnalyzer {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Analyzes the complete stack for automation opportunities.
    ///
    /// Returns the opportunities sorted by priority. An empty list is a
    /// valid outcome; transport failures and unusable output are not.
    pub async fn analyze_stack(
        &self,
        enriched: &[(ToolRecord, ResearchResult)],
        client_name: &str,
    ) -> Result<Vec<Opportunity>, AnalysisError> {
        info!(
            "Analyzing integration opportunities across {} tools for {}",
            enriched.len(),
            client_name
        );

        let context = stack_context(enriched, client_name);
        let request = LlmRequest::new(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(analysis_prompt(&context, client_name)),
        ])
        .with_temperature(1.0)
        .with_max_tokens(ANALYSIS_MAX_TOKENS);

        let response = self.client.chat(request).await?;
        let opportunities = parse_analysis_response(&response.content)?;

        if opportunities.is_empty() {
            warn!("Analysis produced no opportunities; continuing with an empty list");
        } else {
            info!("Identified {} opportunities", opportunities.len());
        }

        Ok(opportunities)
    }
}
