//! Audit orchestration
//!
//! `TechStackAudit` runs the complete workflow: load the inventory,
//! research every tool, analyze the stack, write the report. The three
//! phases run strictly in sequence (analysis needs full research
//! context, synthesis needs both) and share nothing beyond the data
//! passed forward.

use crate::analysis::{AnalysisError, IntegrationAnalyzer};
use crate::inventory::{load_inventory, InventoryError, ToolRecord};
use crate::llm::LlmClient;
use crate::report::{ReportError, ReportWriter};
use crate::research::{ResearchDepth, ResearchResult, ResearchWindow, UpdateResearcher};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::info;

/// Fatal audit failures.
///
/// Per-tool research problems are absorbed inside phase 1 and never
/// show up here.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Outcome of a completed audit run
#[derive(Debug)]
pub struct AuditSummary {
    /// Path of the written report
    pub report_path: PathBuf,
    /// Number of tools in the inventory
    pub tools_analyzed: usize,
    /// Tools whose research call completed (with or without findings)
    pub research_succeeded: usize,
    /// Number of opportunities identified
    pub opportunities_found: usize,
}

/// Main audit orchestrator
pub struct TechStackAudit {
    researcher: UpdateResearcher,
    analyzer: IntegrationAnalyzer,
    writer: ReportWriter,
    research_window_years: u32,
    research_depth: ResearchDepth,
}

impl TechStackAudit {
    pub fn new(
        client: Arc<dyn LlmClient>,
        output_dir: impl Into<PathBuf>,
        research_window_years: u32,
        research_depth: ResearchDepth,
    ) -> Self {
        Self {
            researcher: UpdateResearcher::new(client.clone()),
            analyzer: IntegrationAnalyzer::new(client.clone()),
            writer: ReportWriter::new(client, output_dir),
            research_window_years,
            research_depth,
        }
    }

    /// Runs the complete audit workflow for one inventory file.
    ///
    /// Returns a summary with the report path on success. Fails on an
    /// invalid inventory, an analysis or synthesis failure, or a report
    /// write error; individual research failures only degrade content.
    pub async fn run(
        &self,
        inventory_path: &Path,
        client_name: &str,
    ) -> Result<AuditSummary, AuditError> {
        let start = Instant::now();

        info!(
            client = client_name,
            window_years = self.research_window_years,
            depth = %self.research_depth,
            "Starting tech stack audit"
        );

        // Phase 1: load the inventory and research every tool.
        info!("Phase 1: tool research");
        let tools = load_inventory(inventory_path)?;
        let enriched = self.research_phase(&tools).await;
        let research_succeeded = enriched
            .iter()
            .filter(|(_, r)| r.status.is_success())
            .count();
        info!(
            "Phase 1 complete: {} of {} tools researched",
            research_succeeded,
            enriched.len()
        );

        // Phase 2: analyze the full stack in one call.
        info!("Phase 2: integration analysis");
        let opportunities = self.analyzer.analyze_stack(&enriched, client_name).await?;
        info!(
            "Phase 2 complete: {} opportunities identified",
            opportunities.len()
        );

        // Phase 3: synthesize and write the report.
        info!("Phase 3: report generation");
        let report_path = self
            .writer
            .generate(&enriched, &opportunities, client_name)
            .await?;
        info!("Phase 3 complete: report saved to {}", report_path.display());

        let summary = AuditSummary {
            report_path,
            tools_analyzed: enriched.len(),
            research_succeeded,
            opportunities_found: opportunities.len(),
        };

        info!(
            elapsed_secs = start.elapsed().as_secs(),
            tools = summary.tools_analyzed,
            opportunities = summary.opportunities_found,
            "Audit complete"
        );

        Ok(summary)
    }

    async fn research_phase(&self, tools: &[ToolRecord]) -> Vec<(ToolRecord, ResearchResult)> {
        let window = ResearchWindow::last_years(self.research_window_years);

        let progress = ProgressBar::new(tools.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("{spinner} researching [{bar:30}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let enriched = self
            .researcher
            .research_stack(tools, window, self.research_depth, Some(&progress))
            .await;

        progress.finish_and_clear();

        enriched
    }
}
