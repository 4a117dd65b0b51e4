//! Prompts for the tool research stage

use crate::inventory::ToolRecord;
use crate::registry::VendorEndpoints;
use crate::research::types::{ResearchDepth, ResearchWindow};
use std::fmt::Write;

/// System prompt for the software update researcher
pub const SYSTEM_PROMPT: &str = r#"You are a software update research specialist for business tools. Your role is to find real, verifiable product updates, new features and API enhancements for the tool you are asked about.

GUIDELINES:
1. Report only information you can ground in vendor announcements, release notes, changelogs or documentation
2. Prefer specific feature names over generic labels like "New Features"
3. Pay particular attention to API, integration and automation capabilities
4. You are especially good at researching financial services and business tools
5. If you cannot find updates after thorough research, honestly answer "No public updates found" - never invent features or dates

Respond with a single JSON object in this shape:
{
  "tool_name": "...",
  "updates": [
    {
      "feature_name": "Specific Feature Name",
      "release_date": "YYYY-MM-DD, YYYY-MM, YYYY, or \"unknown\"",
      "description": "What this feature does and why it matters (2-3 sentences)",
      "source_url": "https://... or omit if none",
      "category": "automation|integration|api|feature|mobile|security"
    }
  ],
  "capabilities": ["automation-relevant capability", "..."],
  "api_assessment": "Freeform assessment of the tool's API and integration surface",
  "notes": "What was searched and any gaps"
}

Return ONLY the JSON object. Do not wrap it in prose."#;

/// Builds the per-tool research prompt.
///
/// Registry endpoints, when known, are offered to the model as starting
/// points only; research must not assume they are current or complete.
pub fn research_prompt(
    tool: &ToolRecord,
    window: ResearchWindow,
    depth: ResearchDepth,
    endpoints: Option<&VendorEndpoints>,
) -> String {
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "Research software updates for \"{}\" released between {}.",
        tool.name, window
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Tool context:");
    let _ = writeln!(prompt, "- Category: {}", tool.category);
    let _ = writeln!(prompt, "- Tool type: {}", tool.kind);
    let _ = writeln!(prompt, "- Used by: {}", tool.users().join(", "));
    let _ = writeln!(prompt, "- Criticality: {}", tool.criticality);

    if let Some(endpoints) = endpoints {
        let _ = writeln!(prompt);
        let _ = writeln!(
            prompt,
            "Known public documentation for this vendor (verify before relying on it; it may be stale):"
        );
        let _ = writeln!(prompt, "- API docs: {}", endpoints.api_docs);
        if let Some(changelog) = endpoints.changelog {
            let _ = writeln!(prompt, "- Changelog: {}", changelog);
        }
        if endpoints.auth_required {
            let _ = writeln!(
                prompt,
                "- Note: the vendor API requires authenticated access"
            );
        }
    }

    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Focus on finding:");
    let _ = writeln!(prompt, "- Major new features released in the window");
    let _ = writeln!(prompt, "- API enhancements or new endpoints");
    let _ = writeln!(
        prompt,
        "- Integration capabilities, especially with other business tools"
    );
    let _ = writeln!(prompt, "- Automation features");
    let _ = writeln!(prompt, "- Security or compliance updates");

    let _ = writeln!(prompt);
    match depth {
        ResearchDepth::Quick => {
            let _ = writeln!(
                prompt,
                "Research depth: quick. Report the 2-3 most significant updates only."
            );
        }
        ResearchDepth::Medium => {
            let _ = writeln!(
                prompt,
                "Research depth: medium. Report up to 5-6 significant updates with sources."
            );
        }
        ResearchDepth::Deep => {
            let _ = writeln!(
                prompt,
                "Research depth: deep. Be exhaustive: cover every verifiable update in the window, including developer-facing changes, each with a source."
            );
        }
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Criticality;
    use crate::registry::ChangelogRegistry;
    use chrono::NaiveDate;

    fn window() -> ResearchWindow {
        ResearchWindow {
            start: NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        }
    }

    fn record() -> ToolRecord {
        ToolRecord::new("Wealthbox", "CRM", "Advisors", Criticality::High)
    }

    #[test]
    fn test_prompt_includes_tool_context() {
        let prompt = research_prompt(&record(), window(), ResearchDepth::Medium, None);

        assert!(prompt.contains("\"Wealthbox\""));
        assert!(prompt.contains("2023-08-01 to 2025-08-01"));
        assert!(prompt.contains("Category: CRM"));
        assert!(prompt.contains("Criticality: High"));
        assert!(prompt.contains("depth: medium"));
    }

    #[test]
    fn test_prompt_includes_registry_endpoints() {
        let registry = ChangelogRegistry::with_defaults();
        let prompt = research_prompt(
            &record(),
            window(),
            ResearchDepth::Quick,
            registry.get("Wealthbox"),
        );

        assert!(prompt.contains("https://dev.wealthbox.com/"));
        assert!(prompt.contains("may be stale"));
    }

    #[test]
    fn test_prompt_without_registry_hit() {
        let prompt = research_prompt(&record(), window(), ResearchDepth::Deep, None);

        assert!(!prompt.contains("Known public documentation"));
        assert!(prompt.contains("depth: deep"));
    }

    #[test]
    fn test_system_prompt_requests_json() {
        assert!(SYSTEM_PROMPT.contains("JSON object"));
        assert!(SYSTEM_PROMPT.contains("No public updates found"));
    }
}
