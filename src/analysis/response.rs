//! Analysis response parsing

use super::types::{Complexity, Opportunity};
use crate::research::{extract_json_from_response, ParseError};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RawAnalysisResponse {
    #[serde(default)]
    opportunities: Vec<RawOpportunity>,
}

#[derive(Debug, Deserialize)]
struct RawOpportunity {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    tools_involved: Vec<String>,
    #[serde(default)]
    current_process: Option<String>,
    #[serde(default)]
    proposed_workflow: Option<String>,
    #[serde(default)]
    time_savings: Option<String>,
    #[serde(default)]
    complexity: Option<String>,
    #[serde(default)]
    priority: Option<u32>,
}

/// Parses the analyst's response into a priority-sorted opportunity
/// list.
///
/// An empty list is a valid outcome; output that is not the requested
/// JSON shape is an error: the analysis stage has no degraded mode.
pub fn parse_analysis_response(response: &str) -> Result<Vec<Opportunity>, ParseError> {
    debug!("Parsing analysis response ({} chars)", response.len());

    let json = extract_json_from_response(response)?;
    let raw: RawAnalysisResponse =
        serde_json::from_str(&json).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

    let mut opportunities: Vec<Opportunity> = raw
        .opportunities
        .into_iter()
        .enumerate()
        .filter_map(|(i, raw)| convert_opportunity(raw, i))
        .collect();

    opportunities.sort_by_key(|o| o.priority);

    Ok(opportunities)
}

/// Converts one raw opportunity; entries without a name are dropped.
/// A missing priority falls back to list position.
fn convert_opportunity(raw: RawOpportunity, index: usize) -> Option<Opportunity> {
    let name = raw.name?.trim().to_string();
    if name.is_empty() {
        return None;
    }

    Some(Opportunity {
        name,
        tools_involved: raw.tools_involved,
        current_process: raw.current_process.unwrap_or_default(),
        proposed_workflow: raw.proposed_workflow.unwrap_or_default(),
        time_savings: raw
            .time_savings
            .unwrap_or_else(|| "not estimated".to_string()),
        complexity: raw
            .complexity
            .as_deref()
            .map(Complexity::from_label)
            .unwrap_or(Complexity::Medium),
        priority: raw.priority.unwrap_or(index as u32 + 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_opportunities_sorted_by_priority() {
        let response = r#"{
            "opportunities": [
                {
                    "name": "Document filing automation",
                    "tools_involved": ["Microsoft 365"],
                    "current_process": "Manual filing",
                    "proposed_workflow": "Scheduled workflow moves attachments",
                    "time_savings": "2 hours/week",
                    "complexity": "medium",
                    "priority": 2
                },
                {
                    "name": "CRM contact sync",
                    "tools_involved": ["Wealthbox", "Microsoft 365"],
                    "current_process": "Re-keying contacts",
                    "proposed_workflow": "Webhook-triggered sync",
                    "time_savings": "4 hours/week",
                    "complexity": "low",
                    "priority": 1
                }
            ]
        }"#;

        let opportunities = parse_analysis_response(response).unwrap();
        assert_eq!(opportunities.len(), 2);
        assert_eq!(opportunities[0].name, "CRM contact sync");
        assert_eq!(opportunities[0].complexity, Complexity::Low);
        assert_eq!(opportunities[1].priority, 2);
    }

    #[test]
    fn test_empty_opportunities_is_valid() {
        let opportunities = parse_analysis_response(r#"{"opportunities": []}"#).unwrap();
        assert!(opportunities.is_empty());
    }

    #[test]
    fn test_unusable_output_is_error() {
        assert!(parse_analysis_response("I couldn't think of anything.").is_err());
    }

    #[test]
    fn test_missing_priority_falls_back_to_position() {
        let response = r#"{"opportunities": [
            {"name": "A"},
            {"name": "B"}
        ]}"#;

        let opportunities = parse_analysis_response(response).unwrap();
        assert_eq!(opportunities[0].priority, 1);
        assert_eq!(opportunities[1].priority, 2);
    }

    #[test]
    fn test_fenced_response() {
        let response = "```json\n{\"opportunities\": [{\"name\": \"Sync\", \"priority\": 1}]}\n```";
        let opportunities = parse_analysis_response(response).unwrap();
        assert_eq!(opportunities.len(), 1);
    }
}
