//! Research response parsing
//!
//! Turns the raw text the model returns into a typed `ResearchResult`.
//! Models wrap JSON in prose or markdown fences often enough that the
//! extractor has to dig the object out rather than parse the text
//! directly.

use super::types::{ResearchResult, ResearchStatus, ToolUpdate, UpdateCategory};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// Phrases the researcher uses to signal an honest empty result
const NO_UPDATES_PHRASES: [&str; 6] = [
    "no public updates found",
    "no updates found",
    "could not find",
    "no information available",
    "no public changelog",
    "no verifiable updates",
];

#[derive(Debug, Deserialize)]
struct RawResearchResponse {
    #[serde(default)]
    updates: Vec<RawUpdate>,
    #[serde(default)]
    capabilities: Vec<String>,
    #[serde(default)]
    api_assessment: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawUpdate {
    #[serde(default)]
    feature_name: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    source_url: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

/// Extracts a JSON object from a raw model response.
///
/// Accepts a bare object, an object inside a fenced block, or an object
/// embedded in surrounding prose.
pub fn extract_json_from_response(response: &str) -> Result<String, ParseError> {
    let trimmed = response.trim();

    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return Ok(trimmed.to_string());
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            return Ok(trimmed[start..=end].to_string());
        }
    }

    Err(ParseError::InvalidJson(
        "No JSON object found in response".to_string(),
    ))
}

/// Parses a research response for one tool.
///
/// A response that parses as JSON yields `Completed` or `NoFindings`
/// depending on content; a non-JSON response that honestly reports
/// nothing found yields `NoFindings`; anything else is a parse error.
pub fn parse_research_response(response: &str) -> Result<ResearchResult, ParseError> {
    debug!("Parsing research response ({} chars)", response.len());

    let parsed = extract_json_from_response(response)
        .and_then(|json| {
            serde_json::from_str::<RawResearchResponse>(&json)
                .map_err(|e| ParseError::InvalidJson(e.to_string()))
        });

    let raw = match parsed {
        Ok(raw) => raw,
        Err(e) => {
            let lower = response.to_lowercase();
            if NO_UPDATES_PHRASES.iter().any(|p| lower.contains(p)) {
                return Ok(ResearchResult::no_findings(Some(
                    response.trim().to_string(),
                )));
            }
            warn!("Research response was not usable JSON: {}", e);
            return Err(e);
        }
    };

    let updates: Vec<ToolUpdate> = raw
        .updates
        .into_iter()
        .filter_map(convert_update)
        .collect();

    let status = if updates.is_empty()
        && raw.capabilities.is_empty()
        && raw.api_assessment.is_none()
    {
        ResearchStatus::NoFindings
    } else {
        ResearchStatus::Completed
    };

    Ok(ResearchResult {
        status,
        updates,
        capabilities: raw.capabilities,
        api_assessment: raw.api_assessment,
        notes: raw.notes,
    })
}

/// Converts one raw update; entries without a feature name are dropped
fn convert_update(raw: RawUpdate) -> Option<ToolUpdate> {
    let feature_name = raw.feature_name?.trim().to_string();
    if feature_name.is_empty() {
        return None;
    }

    let description = raw.description.unwrap_or_default().trim().to_string();
    let category = raw
        .category
        .as_deref()
        .map(UpdateCategory::from_label)
        .unwrap_or(UpdateCategory::Other);

    let release_date = raw.release_date.and_then(|d| {
        let d = d.trim().to_string();
        if d.is_empty() || d.eq_ignore_ascii_case("unknown") {
            None
        } else {
            Some(d)
        }
    });

    let automation_potential = ToolUpdate::grade_potential(category, &description);

    Some(ToolUpdate {
        feature_name,
        release_date,
        description,
        source_url: raw.source_url.filter(|u| !u.trim().is_empty()),
        category,
        automation_potential,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::research::types::AutomationPotential;

    #[test]
    fn test_parse_valid_response() {
        let response = r#"{
            "tool_name": "Wealthbox",
            "updates": [
                {
                    "feature_name": "Wealthbox API v2",
                    "release_date": "2024-06",
                    "description": "New REST API with webhook support.",
                    "source_url": "https://dev.wealthbox.com/",
                    "category": "api"
                }
            ],
            "capabilities": ["REST API", "Webhooks"],
            "api_assessment": "Mature public API.",
            "notes": "Vendor changelog reviewed."
        }"#;

        let result = parse_research_response(response).unwrap();
        assert_eq!(result.status, ResearchStatus::Completed);
        assert_eq!(result.updates.len(), 1);
        assert_eq!(result.updates[0].feature_name, "Wealthbox API v2");
        assert_eq!(
            result.updates[0].automation_potential,
            AutomationPotential::High
        );
        assert_eq!(result.capabilities.len(), 2);
    }

    #[test]
    fn test_parse_fenced_response() {
        let response = "Here is what I found:\n```json\n{\"updates\": [], \"capabilities\": [], \"api_assessment\": \"No public API.\"}\n```";

        let result = parse_research_response(response).unwrap();
        assert_eq!(result.status, ResearchStatus::Completed);
        assert_eq!(result.api_assessment.as_deref(), Some("No public API."));
    }

    #[test]
    fn test_parse_empty_json_is_no_findings() {
        let result = parse_research_response(r#"{"updates": []}"#).unwrap();
        assert_eq!(result.status, ResearchStatus::NoFindings);
    }

    #[test]
    fn test_no_updates_phrase() {
        let result =
            parse_research_response("After thorough searching: No public updates found.").unwrap();
        assert_eq!(result.status, ResearchStatus::NoFindings);
        assert!(result.updates.is_empty());
    }

    #[test]
    fn test_garbage_is_error() {
        assert!(parse_research_response("I like turtles").is_err());
    }

    #[test]
    fn test_unknown_release_date_dropped() {
        let response = r#"{"updates": [{"feature_name": "Thing", "release_date": "unknown", "description": "x", "category": "feature"}]}"#;

        let result = parse_research_response(response).unwrap();
        assert_eq!(result.updates[0].release_date, None);
    }

    #[test]
    fn test_update_without_name_dropped() {
        let response =
            r#"{"updates": [{"description": "orphan"}, {"feature_name": "Kept", "description": ""}]}"#;

        let result = parse_research_response(response).unwrap();
        assert_eq!(result.updates.len(), 1);
        assert_eq!(result.updates[0].feature_name, "Kept");
    }

    #[test]
    fn test_extract_json_embedded_in_prose() {
        let json = extract_json_from_response("Sure! {\"updates\": []} Hope that helps.").unwrap();
        assert_eq!(json, "{\"updates\": []}");
    }
}
