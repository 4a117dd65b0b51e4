//! Research result model
//!
//! What phase 1 attaches to each Tool Record: discovered updates,
//! automation-relevant capabilities and a freeform API assessment.
//! These are whatever the research call returned; no deduplication or
//! normalization is guaranteed, and every field may be empty.

use chrono::{Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How thorough phase 1 should be, trading depth for latency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchDepth {
    Quick,
    Medium,
    Deep,
}

impl ResearchDepth {
    /// Maximum response tokens for one research call at this depth
    pub fn max_tokens(self) -> u32 {
        match self {
            ResearchDepth::Quick => 1024,
            ResearchDepth::Medium => 2048,
            ResearchDepth::Deep => 4096,
        }
    }
}

impl fmt::Display for ResearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResearchDepth::Quick => "quick",
            ResearchDepth::Medium => "medium",
            ResearchDepth::Deep => "deep",
        };
        write!(f, "{}", label)
    }
}

/// Date window research looks back over, applied uniformly to all tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResearchWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ResearchWindow {
    /// Window covering the last `years` years, ending today
    pub fn last_years(years: u32) -> Self {
        let end = Utc::now().date_naive();
        // Month arithmetic clamps the day, so a window computed on
        // Feb 29 still yields a valid start date.
        let start = end
            .checked_sub_months(Months::new(years * 12))
            .unwrap_or(end);
        Self { start, end }
    }
}

impl fmt::Display for ResearchWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Outcome of researching one tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResearchStatus {
    /// Research ran and returned findings
    Completed,
    /// Research ran but found no public updates
    NoFindings,
    /// The research call failed; the result carries no findings
    Failed { reason: String },
}

impl ResearchStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ResearchStatus::Completed | ResearchStatus::NoFindings)
    }
}

/// Rough grouping of a discovered update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateCategory {
    Automation,
    Integration,
    Api,
    Feature,
    Mobile,
    Security,
    Other,
}

impl UpdateCategory {
    /// Parses the category label the research prompt asks for
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "automation" => UpdateCategory::Automation,
            "integration" => UpdateCategory::Integration,
            "api" => UpdateCategory::Api,
            "feature" => UpdateCategory::Feature,
            "mobile" => UpdateCategory::Mobile,
            "security" => UpdateCategory::Security,
            _ => UpdateCategory::Other,
        }
    }
}

impl fmt::Display for UpdateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UpdateCategory::Automation => "automation",
            UpdateCategory::Integration => "integration",
            UpdateCategory::Api => "api",
            UpdateCategory::Feature => "feature",
            UpdateCategory::Mobile => "mobile",
            UpdateCategory::Security => "security",
            UpdateCategory::Other => "other",
        };
        write!(f, "{}", label)
    }
}

/// How much automation leverage an update offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutomationPotential {
    Low,
    Medium,
    High,
}

impl fmt::Display for AutomationPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AutomationPotential::Low => "low",
            AutomationPotential::Medium => "medium",
            AutomationPotential::High => "high",
        };
        write!(f, "{}", label)
    }
}

const HIGH_SIGNAL_KEYWORDS: [&str; 6] = ["api", "webhook", "automat", "integrat", "workflow", "zapier"];
const MEDIUM_SIGNAL_KEYWORDS: [&str; 4] = ["sync", "export", "import", "notification"];

/// One discovered update for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolUpdate {
    /// Specific feature name
    pub feature_name: String,
    /// Release date if the research found one (YYYY, YYYY-MM or YYYY-MM-DD)
    pub release_date: Option<String>,
    /// What the update does and why it matters
    pub description: String,
    /// Link to the announcement or documentation, if found
    pub source_url: Option<String>,
    /// Category of the update
    pub category: UpdateCategory,
    /// Automation leverage, graded locally from category and description
    pub automation_potential: AutomationPotential,
}

impl ToolUpdate {
    /// Grades automation potential from the update's category and text.
    pub fn grade_potential(category: UpdateCategory, description: &str) -> AutomationPotential {
        if matches!(
            category,
            UpdateCategory::Automation | UpdateCategory::Api | UpdateCategory::Integration
        ) {
            return AutomationPotential::High;
        }

        let text = description.to_lowercase();
        if HIGH_SIGNAL_KEYWORDS.iter().any(|k| text.contains(k)) {
            AutomationPotential::High
        } else if MEDIUM_SIGNAL_KEYWORDS.iter().any(|k| text.contains(k)) {
            AutomationPotential::Medium
        } else {
            AutomationPotential::Low
        }
    }
}

/// Enrichment data attached to a Tool Record after phase 1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResult {
    /// How the research call went
    pub status: ResearchStatus,
    /// Discovered updates, possibly empty
    pub updates: Vec<ToolUpdate>,
    /// Automation-relevant capabilities of the tool
    pub capabilities: Vec<String>,
    /// Freeform integration/API capability assessment
    pub api_assessment: Option<String>,
    /// Researcher's notes about sources and gaps
    pub notes: Option<String>,
}

impl ResearchResult {
    /// Result for a tool whose research call failed
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            status: ResearchStatus::Failed {
                reason: reason.into(),
            },
            updates: Vec::new(),
            capabilities: Vec::new(),
            api_assessment: None,
            notes: None,
        }
    }

    /// Result for a tool with no public updates in the window
    pub fn no_findings(notes: Option<String>) -> Self {
        Self {
            status: ResearchStatus::NoFindings,
            updates: Vec::new(),
            capabilities: Vec::new(),
            api_assessment: None,
            notes,
        }
    }

    /// Updates with high or medium automation potential
    pub fn automation_updates(&self) -> Vec<&ToolUpdate> {
        self.updates
            .iter()
            .filter(|u| u.automation_potential >= AutomationPotential::Medium)
            .collect()
    }
}
