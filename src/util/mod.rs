//! Shared utilities.

pub mod logging;

pub use logging::{init_from_env, LoggingConfig};
