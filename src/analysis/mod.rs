//! Phase 2: full-stack integration analysis.

mod analyzer;
mod prompt;
mod response;
mod types;

pub use analyzer::{AnalysisError, IntegrationAnalyzer};
pub use response::parse_analysis_response;
pub use types::{Complexity, Opportunity};
