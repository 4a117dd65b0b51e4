//! Tool inventory model
//!
//! A `ToolRecord` is one row of the client's software inventory. Records
//! are created by the loader and immutable for the rest of the run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How critical a tool is to the client's operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criticality {
    Low,
    Medium,
    High,
    /// Nonstandard label, preserved verbatim
    Other(String),
}

impl Criticality {
    /// Parses a criticality label; unrecognized labels are preserved
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Criticality::Low,
            "medium" => Criticality::Medium,
            "high" => Criticality::High,
            _ => Criticality::Other(s.trim().to_string()),
        }
    }
}

impl FromStr for Criticality {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Criticality::from_label(s))
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criticality::Low => write!(f, "Low"),
            Criticality::Medium => write!(f, "Medium"),
            Criticality::High => write!(f, "High"),
            Criticality::Other(label) => write!(f, "{}", label),
        }
    }
}

/// Broad tool family, inferred from the inventory's category column.
///
/// Used to give the research and analysis prompts domain context beyond
/// the client's own (often idiosyncratic) category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    Crm,
    PortfolioManagement,
    ResearchPlatform,
    Custodial,
    FinancialPlanning,
    Communication,
    ProductivitySuite,
    Operations,
    Compliance,
    Unknown,
}

impl ToolKind {
    /// Infers the tool kind from a free-form category label
    pub fn from_category(category: &str) -> Self {
        let category = category.to_lowercase();

        if category.contains("crm") {
            ToolKind::Crm
        } else if category.contains("portfolio") {
            ToolKind::PortfolioManagement
        } else if category.contains("research") {
            ToolKind::ResearchPlatform
        } else if category.contains("custod") || category.contains("trading") {
            ToolKind::Custodial
        } else if category.contains("planning") {
            ToolKind::FinancialPlanning
        } else if category.contains("communication") || category.contains("video") {
            ToolKind::Communication
        } else if category.contains("productivity") || category.contains("office") {
            ToolKind::ProductivitySuite
        } else if category.contains("operation") || category.contains("accounting") {
            ToolKind::Operations
        } else if category.contains("compliance") {
            ToolKind::Compliance
        } else {
            ToolKind::Unknown
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ToolKind::Crm => "crm",
            ToolKind::PortfolioManagement => "portfolio management",
            ToolKind::ResearchPlatform => "research platform",
            ToolKind::Custodial => "custodial",
            ToolKind::FinancialPlanning => "financial planning",
            ToolKind::Communication => "communication",
            ToolKind::ProductivitySuite => "productivity suite",
            ToolKind::Operations => "operations",
            ToolKind::Compliance => "compliance",
            ToolKind::Unknown => "unknown",
        };
        write!(f, "{}", label)
    }
}

/// One row of the client's software inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRecord {
    /// Tool name, unique within a run
    pub name: String,
    /// Category label as given in the inventory
    pub category: String,
    /// Consuming department/team, verbatim from the inventory
    pub used_by: String,
    /// Criticality label
    pub criticality: Criticality,
    /// Tool family inferred from the category
    pub kind: ToolKind,
}

impl ToolRecord {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        used_by: impl Into<String>,
        criticality: Criticality,
    ) -> Self {
        let category = category.into();
        let kind = ToolKind::from_category(&category);
        Self {
            name: name.into(),
            category,
            used_by: used_by.into(),
            criticality,
            kind,
        }
    }

    /// Splits the consumer column into individual team names for display
    pub fn users(&self) -> Vec<&str> {
        self.used_by
            .split([',', ';'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criticality_parsing() {
        assert_eq!("high".parse::<Criticality>().unwrap(), Criticality::High);
        assert_eq!("  Medium ".parse::<Criticality>().unwrap(), Criticality::Medium);
        assert_eq!("LOW".parse::<Criticality>().unwrap(), Criticality::Low);
        assert_eq!(
            "Mission Critical".parse::<Criticality>().unwrap(),
            Criticality::Other("Mission Critical".to_string())
        );
    }

    #[test]
    fn test_criticality_roundtrip() {
        for label in ["Low", "Medium", "High", "Mission Critical"] {
            let parsed: Criticality = label.parse().unwrap();
            assert_eq!(parsed.to_string(), label);
        }
    }

    #[test]
    fn test_tool_kind_inference() {
        assert_eq!(ToolKind::from_category("CRM"), ToolKind::Crm);
        assert_eq!(
            ToolKind::from_category("Portfolio Management"),
            ToolKind::PortfolioManagement
        );
        assert_eq!(ToolKind::from_category("Trading / Custodial"), ToolKind::Custodial);
        assert_eq!(
            ToolKind::from_category("Video Conferencing"),
            ToolKind::Communication
        );
        assert_eq!(ToolKind::from_category("Accounting"), ToolKind::Operations);
        assert_eq!(ToolKind::from_category("Widgets"), ToolKind::Unknown);
    }

    #[test]
    fn test_users_split() {
        let record = ToolRecord::new(
            "Redtail CRM",
            "CRM",
            "Advisors, Operations; Compliance",
            Criticality::High,
        );
        assert_eq!(record.users(), vec!["Advisors", "Operations", "Compliance"]);
    }

    #[test]
    fn test_kind_derived_from_category() {
        let record = ToolRecord::new("Orion", "Portfolio Management", "Ops", Criticality::Medium);
        assert_eq!(record.kind, ToolKind::PortfolioManagement);
    }
}
