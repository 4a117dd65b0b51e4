//! Prompts and context formatting for the integration analysis stage

use crate::inventory::ToolRecord;
use crate::research::{ResearchResult, ResearchStatus};
use std::fmt::Write;

/// System prompt for the integration analyst
pub const SYSTEM_PROMPT: &str = r#"You are an integration automation specialist. You understand APIs, data flows and integration patterns, and you identify workflow automation opportunities across a client's complete tool stack.

You always recommend open, vendor-neutral automation tooling (n8n-style workflow engines, webhooks, vendor APIs) over proprietary integration platforms. You focus on practical, implementable automations that save time and reduce manual work.

Respond with a single JSON object in this shape:
{
  "opportunities": [
    {
      "name": "Clear opportunity name",
      "tools_involved": ["Tool A", "Tool B"],
      "current_process": "The manual process as it runs today",
      "proposed_workflow": "The proposed automated workflow, specific about triggers and steps",
      "time_savings": "Estimated hours per week or month",
      "complexity": "low|medium|high",
      "priority": 1
    }
  ]
}

Rank priorities by estimated return on investment: time saved, error reduction, process improvement. Priority 1 is highest. Favor opportunities where the tools involved expose APIs. If the stack genuinely offers no automation opportunities, return an empty opportunities array.

Return ONLY the JSON object."#;

/// Formats the enriched inventory into the analyst's context block.
///
/// The analysis stage intentionally receives the whole stack at once;
/// cross-tool opportunities need every tool in view.
pub fn stack_context(
    enriched: &[(ToolRecord, ResearchResult)],
    client_name: &str,
) -> String {
    let mut ctx = String::new();

    let _ = writeln!(ctx, "Client: {}", client_name);
    let _ = writeln!(ctx, "Total tools in stack: {}", enriched.len());
    let _ = writeln!(ctx);
    let _ = writeln!(ctx, "TOOL INVENTORY WITH RESEARCH FINDINGS:");

    for (tool, research) in enriched {
        let _ = writeln!(ctx);
        let _ = writeln!(ctx, "{}", tool.name);
        let _ = writeln!(ctx, "  Category: {}", tool.category);
        let _ = writeln!(ctx, "  Type: {}", tool.kind);
        let _ = writeln!(ctx, "  Used by: {}", tool.users().join(", "));
        let _ = writeln!(ctx, "  Criticality: {}", tool.criticality);

        match &research.status {
            ResearchStatus::Completed => {
                let _ = writeln!(ctx, "  Updates found: {}", research.updates.len());

                let automation_updates = research.automation_updates();
                if !automation_updates.is_empty() {
                    let _ = writeln!(ctx, "  Key automation features:");
                    for update in automation_updates.iter().take(3) {
                        let _ = writeln!(
                            ctx,
                            "    - {} ({})",
                            update.feature_name, update.category
                        );
                    }
                }

                if !research.capabilities.is_empty() {
                    let _ = writeln!(
                        ctx,
                        "  Capabilities: {}",
                        research.capabilities.join("; ")
                    );
                }

                match &research.api_assessment {
                    Some(assessment) => {
                        let _ = writeln!(ctx, "  API assessment: {}", assessment);
                    }
                    None => {
                        let _ = writeln!(ctx, "  API status unknown");
                    }
                }
            }
            ResearchStatus::NoFindings => {
                let _ = writeln!(ctx, "  No public updates found in the research window");
            }
            ResearchStatus::Failed { reason } => {
                let _ = writeln!(ctx, "  Research incomplete: {}", reason);
            }
        }
    }

    ctx
}

/// Builds the analysis task prompt around the stack context
pub fn analysis_prompt(context: &str, client_name: &str) -> String {
    format!(
        "Analyze {client_name}'s complete technology stack and identify automation opportunities.\n\n\
         CONTEXT:\n{context}\n\n\
         YOUR TASK:\n\
         1. Identify cross-tool integration opportunities where data flows between systems\n\
         2. Find manual processes that could be automated with workflow tooling\n\
         3. Prioritize opportunities by ROI (time saved, error reduction, process improvement)\n\
         4. Consider the tool updates discovered in research\n\n\
         Return 3-5 opportunities when the stack supports them, ranked by priority."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Criticality;
    use crate::research::parse_research_response;

    fn enriched() -> Vec<(ToolRecord, ResearchResult)> {
        let tool = ToolRecord::new("Wealthbox", "CRM", "Advisors", Criticality::High);
        let research = parse_research_response(
            r#"{"updates": [{"feature_name": "API v2", "description": "webhook support", "category": "api"}], "capabilities": ["Webhooks"], "api_assessment": "Open REST API"}"#,
        )
        .unwrap();
        vec![(tool, research)]
    }

    #[test]
    fn test_context_includes_tool_and_findings() {
        let ctx = stack_context(&enriched(), "Acme Advisors");

        assert!(ctx.contains("Client: Acme Advisors"));
        assert!(ctx.contains("Wealthbox"));
        assert!(ctx.contains("Updates found: 1"));
        assert!(ctx.contains("API v2"));
        assert!(ctx.contains("Open REST API"));
    }

    #[test]
    fn test_context_reports_failures() {
        let tool = ToolRecord::new("Legacy Tool", "Operations", "Ops", Criticality::Low);
        let research = ResearchResult::failed("timeout");
        let ctx = stack_context(&[(tool, research)], "Acme");

        assert!(ctx.contains("Research incomplete: timeout"));
    }

    #[test]
    fn test_analysis_prompt_embeds_context() {
        let prompt = analysis_prompt("THE CONTEXT", "Acme");
        assert!(prompt.contains("THE CONTEXT"));
        assert!(prompt.contains("Acme's complete technology stack"));
    }

    #[test]
    fn test_system_prompt_prefers_open_tooling() {
        assert!(SYSTEM_PROMPT.contains("vendor-neutral"));
        assert!(SYSTEM_PROMPT.contains("opportunities"));
    }
}
