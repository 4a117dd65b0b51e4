//! Opportunity model
//!
//! An opportunity is a proposed cross-tool automation produced by the
//! integration analysis. Opportunities have no identity beyond their
//! position in the prioritized list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Implementation effort for an opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    /// Parses the complexity label the analysis prompt asks for
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Complexity::Low,
            "high" => Complexity::High,
            _ => Complexity::Medium,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        };
        write!(f, "{}", label)
    }
}

/// A proposed cross-tool automation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    /// Short opportunity name
    pub name: String,
    /// Names of the tools involved
    pub tools_involved: Vec<String>,
    /// The manual process as it runs today
    pub current_process: String,
    /// The proposed automated workflow
    pub proposed_workflow: String,
    /// Qualitative time-savings estimate
    pub time_savings: String,
    /// Implementation effort
    pub complexity: Complexity,
    /// Priority rank; 1 is highest
    pub priority: u32,
}

impl Opportunity {
    /// Quick wins are low-effort opportunities implementable with
    /// minimal setup.
    pub fn is_quick_win(&self) -> bool {
        self.complexity == Complexity::Low
    }
}
