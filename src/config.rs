//! Configuration management
//!
//! Settings load once at process start from environment variables with
//! sensible defaults. API credentials are never stored here: the
//! `genai` library reads them from its own standard variables when a
//! request is made.
//!
//! # Environment Variables
//!
//! - `STACKAUDIT_PROVIDER`: provider selection
//!   (openai|anthropic|gemini|groq|xai|ollama) - default: "openai"
//! - `STACKAUDIT_MODEL`: model name - provider-specific default
//! - `STACKAUDIT_TIMEOUT`: per-request timeout in seconds - default: "120"
//! - `STACKAUDIT_OUTPUT_DIR`: report output directory - default: "output"
//! - `STACKAUDIT_LOG_LEVEL`: logging level - default: "info"
//!
//! Provider credentials (read directly by genai): `OPENAI_API_KEY`,
//! `ANTHROPIC_API_KEY`, `GOOGLE_API_KEY`, `GROQ_API_KEY`, `XAI_API_KEY`,
//! `OLLAMA_HOST`.

use crate::llm::GenAiClient;
use genai::adapter::AdapterKind;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PROVIDER: AdapterKind = AdapterKind::OpenAI;
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
const DEFAULT_OLLAMA_MODEL: &str = "llama3.1:8b";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
const DEFAULT_OUTPUT_DIR: &str = "output";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid provider name
    #[error("Invalid provider: {0}. Valid options: openai, anthropic, gemini, groq, xai, ollama")]
    InvalidProvider(String),

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Parses a provider name onto a genai adapter kind
pub fn parse_provider(s: &str) -> Result<AdapterKind, ConfigError> {
    AdapterKind::from_lower_str(&s.to_lowercase())
        .ok_or_else(|| ConfigError::InvalidProvider(s.to_string()))
}

/// Runtime configuration for an audit run
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// LLM provider
    pub provider: AdapterKind,

    /// Model name (provider-specific)
    pub model: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Directory reports are written to
    pub output_dir: PathBuf,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for AuditConfig {
    /// Loads configuration from environment variables with defaults
    fn default() -> Self {
        let provider = env::var("STACKAUDIT_PROVIDER")
            .ok()
            .and_then(|s| parse_provider(&s).ok())
            .unwrap_or(DEFAULT_PROVIDER);

        let model = env::var("STACKAUDIT_MODEL")
            .ok()
            .or_else(|| default_model_for(provider).map(str::to_string))
            .unwrap_or_default();

        let request_timeout_secs = env::var("STACKAUDIT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let output_dir = env::var("STACKAUDIT_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let log_level = env::var("STACKAUDIT_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            provider,
            model,
            request_timeout_secs,
            output_dir,
            log_level,
        }
    }
}

/// Built-in default model for providers that have one.
///
/// Other providers need an explicit `STACKAUDIT_MODEL` or `--model`.
pub fn default_model_for(provider: AdapterKind) -> Option<&'static str> {
    match provider {
        AdapterKind::Ollama => Some(DEFAULT_OLLAMA_MODEL),
        AdapterKind::OpenAI => Some(DEFAULT_OPENAI_MODEL),
        _ => None,
    }
}

impl AuditConfig {
    /// Validates the configuration.
    ///
    /// Provider-specific validation (API keys, endpoints) happens in
    /// genai when the first request is made.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }
        if self.request_timeout_secs > 600 {
            return Err(ConfigError::ValidationFailed(
                "Request timeout cannot exceed 10 minutes".to_string(),
            ));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Model name cannot be empty".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    /// Creates the LLM client for the configured provider
    pub fn create_client(&self) -> Arc<GenAiClient> {
        Arc::new(GenAiClient::new(
            self.provider,
            self.model.clone(),
            Duration::from_secs(self.request_timeout_secs),
        ))
    }
}

impl fmt::Display for AuditConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stackaudit Configuration:")?;
        writeln!(f, "  Provider: {}", self.provider.as_str())?;
        writeln!(f, "  Model: {}", self.model)?;
        writeln!(f, "  Request Timeout: {}s", self.request_timeout_secs)?;
        writeln!(f, "  Output Dir: {}", self.output_dir.display())?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
