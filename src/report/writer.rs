//! Report synthesis stage (phase 3)
//!
//! One LLM call turns the enriched inventory and the opportunity list
//! into a client-ready markdown report, written once under a
//! timestamped filename. Synthesis and write failures are fatal; there
//! is no partial-report fallback.

use crate::analysis::Opportunity;
use crate::inventory::ToolRecord;
use crate::llm::{BackendError, ChatMessage, LlmClient, LlmRequest};
use crate::research::{ResearchResult, ResearchStatus};
use chrono::Local;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors from the report stage; all of them are fatal for the run
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report synthesis failed: {0}")]
    Synthesis(#[from] BackendError),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

const SYSTEM_PROMPT: &str = r#"You are an experienced technology consultant who writes clear, actionable audit reports for business clients. You translate technical findings into business value. Your reports are well-structured, easy to scan, and focused on ROI and implementation guidance. You always highlight quick wins and provide specific next steps.

Write complete markdown. Do not wrap the report in code fences."#;

const REPORT_MAX_TOKENS: u32 = 8192;

/// Report writer for the synthesis stage
pub struct ReportWriter {
    client: Arc<dyn LlmClient>,
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(client: Arc<dyn LlmClient>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
        }
    }

    /// Synthesizes the report and writes it to the output directory.
    ///
    /// Returns the path of the written file.
    pub async fn generate(
        &self,
        enriched: &[(ToolRecord, ResearchResult)],
        opportunities: &[Opportunity],
        client_name: &str,
    ) -> Result<PathBuf, ReportError> {
        info!("Generating report for {}", client_name);

        let context = report_context(enriched, opportunities, client_name);
        let request = LlmRequest::new(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(report_prompt(&context, client_name)),
        ])
        .with_temperature(1.0)
        .with_max_tokens(REPORT_MAX_TOKENS);

        let response = self.client.chat(request).await?;

        let mut content = response.content.trim().to_string();
        if !content.starts_with('#') {
            content = format!("{}{}", report_header(client_name), content);
        }
        content.push_str(&inventory_appendix(enriched, opportunities));

        std::fs::create_dir_all(&self.output_dir)?;
        let path = unique_report_path(&self.output_dir, client_name);
        std::fs::write(&path, &content)?;

        info!("Report saved: {}", path.display());

        Ok(path)
    }
}

/// Builds the synthesis task prompt around the audit context
fn report_prompt(context: &str, client_name: &str) -> String {
    format!(
        "Create a comprehensive tech stack audit report for {client_name}.\n\n\
         CONTEXT:\n{context}\n\n\
         REPORT STRUCTURE REQUIRED:\n\n\
         # Tech Stack Audit Report: {client_name}\n\n\
         ## Executive Summary\n\
         Audit scope, total tools analyzed, key findings, total opportunities, estimated total time savings.\n\n\
         ## Tools Analyzed\n\
         For each tool: name and category, recent updates discovered, key automation features, utilization assessment.\n\n\
         ## Integration Opportunities\n\
         The prioritized opportunity list: name, tools involved, current manual process, proposed workflow, time savings, complexity, priority.\n\n\
         ## Quick Wins\n\
         The 2-3 opportunities implementable with minimal setup for immediate ROI.\n\n\
         ## Implementation Roadmap\n\
         Phase 1: quick wins (weeks 1-2). Phase 2: medium complexity (weeks 3-6). Phase 3: advanced integrations (weeks 7-12).\n\n\
         ## Next Steps\n\
         Specific action items with owners and target dates.\n\n\
         REQUIREMENTS:\n\
         - Markdown formatting throughout\n\
         - Professional but accessible language\n\
         - Focus on business value, not just features\n\
         - Be specific about time savings and ROI\n\
         - Favor open, vendor-neutral automation tooling\n\n\
         Write the complete report now."
    )
}

/// Formats findings and opportunities into the writer's context block
fn report_context(
    enriched: &[(ToolRecord, ResearchResult)],
    opportunities: &[Opportunity],
    client_name: &str,
) -> String {
    let mut ctx = String::new();

    let _ = writeln!(ctx, "CLIENT: {}", client_name);
    let _ = writeln!(ctx, "AUDIT DATE: {}", Local::now().format("%B %d, %Y"));
    let _ = writeln!(ctx, "TOTAL TOOLS: {}", enriched.len());
    let _ = writeln!(ctx);
    let _ = writeln!(ctx, "TOOL INVENTORY WITH FINDINGS:");

    for (tool, research) in enriched {
        let _ = writeln!(ctx);
        let _ = writeln!(ctx, "Tool: {}", tool.name);
        let _ = writeln!(ctx, "Category: {}", tool.category);
        let _ = writeln!(ctx, "Criticality: {}", tool.criticality);
        let _ = writeln!(ctx, "Users: {}", tool.users().join(", "));

        match &research.status {
            ResearchStatus::Completed => {
                let _ = writeln!(ctx, "Updates found: {}", research.updates.len());
                for update in research.updates.iter().take(5) {
                    let _ = writeln!(ctx, "  - {}", update.feature_name);
                    let _ = writeln!(ctx, "    Category: {}", update.category);
                    let _ = writeln!(
                        ctx,
                        "    Automation potential: {}",
                        update.automation_potential
                    );
                    if !update.description.is_empty() {
                        let _ = writeln!(ctx, "    Description: {}", update.description);
                    }
                }
                if let Some(assessment) = &research.api_assessment {
                    let _ = writeln!(ctx, "API assessment: {}", assessment);
                }
            }
            ResearchStatus::NoFindings => {
                let _ = writeln!(ctx, "Research status: no public updates found");
            }
            ResearchStatus::Failed { reason } => {
                let _ = writeln!(ctx, "Research status: incomplete ({})", reason);
            }
        }
    }

    let _ = writeln!(ctx);
    let _ = writeln!(ctx, "INTEGRATION OPPORTUNITIES (priority order):");
    if opportunities.is_empty() {
        let _ = writeln!(ctx, "None identified.");
    }
    for opp in opportunities {
        let _ = writeln!(ctx);
        if opp.is_quick_win() {
            let _ = writeln!(ctx, "{}. {} (quick win candidate)", opp.priority, opp.name);
        } else {
            let _ = writeln!(ctx, "{}. {}", opp.priority, opp.name);
        }
        let _ = writeln!(ctx, "   Tools: {}", opp.tools_involved.join(", "));
        let _ = writeln!(ctx, "   Current process: {}", opp.current_process);
        let _ = writeln!(ctx, "   Proposed workflow: {}", opp.proposed_workflow);
        let _ = writeln!(ctx, "   Time savings: {}", opp.time_savings);
        let _ = writeln!(ctx, "   Complexity: {}", opp.complexity);
    }

    ctx
}

/// Header prepended when the model's output lacks one
fn report_header(client_name: &str) -> String {
    format!(
        "# Tech Stack Audit Report: {}\n\n**Generated:** {}\n\n---\n\n",
        client_name,
        Local::now().format("%B %d, %Y at %I:%M %p")
    )
}

/// Deterministic appendix enumerating the analyzed inventory.
///
/// Appended to every report so the tool list survives even when the
/// synthesized body is thin (e.g. a fully degraded research phase).
fn inventory_appendix(
    enriched: &[(ToolRecord, ResearchResult)],
    opportunities: &[Opportunity],
) -> String {
    let mut appendix = String::new();

    let _ = writeln!(appendix);
    let _ = writeln!(appendix, "\n---\n");
    let _ = writeln!(appendix, "## Appendix: Inventory Snapshot");
    let _ = writeln!(appendix);
    let _ = writeln!(
        appendix,
        "| Tool | Category | Used By | Criticality | Updates Found |"
    );
    let _ = writeln!(appendix, "|------|----------|---------|-------------|---------------|");
    for (tool, research) in enriched {
        let _ = writeln!(
            appendix,
            "| {} | {} | {} | {} | {} |",
            tool.name,
            tool.category,
            tool.used_by,
            tool.criticality,
            research.updates.len()
        );
    }

    let _ = writeln!(appendix);
    let _ = writeln!(
        appendix,
        "*{} tools analyzed, {} automation opportunities identified. Generated by stackaudit on {}.*",
        enriched.len(),
        opportunities.len(),
        Local::now().format("%Y-%m-%d")
    );

    appendix
}

/// Filesystem-safe client name for the report filename
fn sanitize_client_name(client_name: &str) -> String {
    client_name
        .trim()
        .replace([' ', '/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_")
}

/// Picks a report path that no earlier run has written.
///
/// Filenames embed the client name and a generation timestamp; a
/// same-second rerun gets a numeric suffix instead of overwriting.
fn unique_report_path(output_dir: &Path, client_name: &str) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let base = format!("audit_{}_{}", sanitize_client_name(client_name), timestamp);

    let candidate = output_dir.join(format!("{}.md", base));
    if !candidate.exists() {
        return candidate;
    }

    let mut suffix = 2;
    loop {
        let candidate = output_dir.join(format!("{}_{}.md", base, suffix));
        if !candidate.exists() {
            return candidate;
        }
        suffix += 1;
    }
}
