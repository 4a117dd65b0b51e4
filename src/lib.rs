//! stackaudit - automated tech stack audits driven by LLM research
//!
//! This library implements a single-pass consulting workflow: load a
//! CSV inventory of a client's software tools, research each tool's
//! recent updates with a hosted LLM, analyze the complete stack for
//! cross-tool automation opportunities, and synthesize a client-ready
//! markdown report.
//!
//! # Pipeline
//!
//! Three phases run strictly in sequence:
//!
//! 1. **Research** ([`research::UpdateResearcher`]) - one independent
//!    LLM call per tool, dispatched concurrently, enriched
//!    opportunistically by a static vendor endpoint registry.
//! 2. **Analysis** ([`analysis::IntegrationAnalyzer`]) - a single LLM
//!    call over the full enriched inventory producing a prioritized
//!    opportunity list.
//! 3. **Report** ([`report::ReportWriter`]) - a single LLM call
//!    synthesizing the markdown report, written under a timestamped
//!    filename.
//!
//! # Example
//!
//! ```no_run
//! use stackaudit::audit::TechStackAudit;
//! use stackaudit::config::AuditConfig;
//! use stackaudit::research::ResearchDepth;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AuditConfig::default();
//! let audit = TechStackAudit::new(
//!     config.create_client(),
//!     config.output_dir.clone(),
//!     2,
//!     ResearchDepth::Medium,
//! );
//!
//! let summary = audit.run(Path::new("tools.csv"), "Acme Advisors").await?;
//! println!("Report: {}", summary.report_path.display());
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod audit;
pub mod cli;
pub mod config;
pub mod inventory;
pub mod llm;
pub mod registry;
pub mod report;
pub mod research;
pub mod util;

pub use audit::{AuditError, AuditSummary, TechStackAudit};
pub use config::{AuditConfig, ConfigError};
pub use inventory::{load_inventory, Criticality, InventoryError, ToolRecord};
pub use llm::{BackendError, GenAiClient, LlmClient, MockLlmClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
