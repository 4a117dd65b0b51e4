//! Phase 3: report synthesis and file output.

mod writer;

pub use writer::{ReportError, ReportWriter};
