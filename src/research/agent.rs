//! Tool research stage (phase 1)
//!
//! Researches every inventory row independently: one chat call per
//! tool, all dispatched concurrently, results returned in input order.
//! Individual failures degrade that tool's result and never fail the
//! stage.

use super::prompt::{research_prompt, SYSTEM_PROMPT};
use super::response::parse_research_response;
use super::types::{ResearchDepth, ResearchResult, ResearchWindow};
use crate::inventory::ToolRecord;
use crate::llm::{ChatMessage, LlmClient, LlmRequest};
use crate::registry::ChangelogRegistry;
use futures_util::future::join_all;
use indicatif::ProgressBar;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Research agent for the update-discovery stage
pub struct UpdateResearcher {
    client: Arc<dyn LlmClient>,
    registry: ChangelogRegistry,
}

impl UpdateResearcher {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            registry: ChangelogRegistry::with_defaults(),
        }
    }

    /// Researches updates for a single tool.
    ///
    /// Never returns an error: transport failures, timeouts and
    /// unparseable output all degrade to `ResearchStatus::Failed` so
    /// one bad tool cannot sink the run.
    pub async fn research_tool(
        &self,
        tool: &ToolRecord,
        window: ResearchWindow,
        depth: ResearchDepth,
    ) -> ResearchResult {
        let endpoints = self.registry.get(&tool.name);
        if endpoints.is_some() {
            debug!(tool = %tool.name, "Registry hit: enriching research prompt");
        }

        let request = LlmRequest::new(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(research_prompt(tool, window, depth, endpoints)),
        ])
        .with_temperature(1.0)
        .with_max_tokens(depth.max_tokens());

        let response = match self.client.chat(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(tool = %tool.name, error = %e, "Research call failed");
                return ResearchResult::failed(e.to_string());
            }
        };

        match parse_research_response(&response.content) {
            Ok(result) => {
                info!(
                    tool = %tool.name,
                    updates = result.updates.len(),
                    elapsed_ms = response.response_time.as_millis() as u64,
                    "Research complete"
                );
                result
            }
            Err(e) => {
                warn!(tool = %tool.name, error = %e, "Research output unusable");
                ResearchResult::failed(e.to_string())
            }
        }
    }

    /// Researches the whole inventory concurrently.
    ///
    /// One in-flight research task per tool, no cap. Output order
    /// matches input order regardless of completion order.
    pub async fn research_stack(
        &self,
        tools: &[ToolRecord],
        window: ResearchWindow,
        depth: ResearchDepth,
        progress: Option<&ProgressBar>,
    ) -> Vec<(ToolRecord, ResearchResult)> {
        info!(
            "Researching {} tools ({}, depth {})",
            tools.len(),
            window,
            depth
        );

        let tasks = tools.iter().map(|tool| async move {
            let result = self.research_tool(tool, window, depth).await;
            if let Some(progress) = progress {
                progress.inc(1);
            }
            (tool.clone(), result)
        });

        let results = join_all(tasks).await;

        let successful = results
            .iter()
            .filter(|(_, r)| r.status.is_success())
            .count();
        info!(
            "Research stage complete: {} of {} tools researched successfully",
            successful,
            results.len()
        );

        results
    }
}
