//! CLI run handler
//!
//! Builds the configuration from environment and flags, runs the
//! audit, and maps every failure onto a descriptive message and a
//! nonzero exit code.

use super::commands::CliArgs;
use crate::audit::{AuditError, TechStackAudit};
use crate::config::{default_model_for, parse_provider, AuditConfig};
use anyhow::Context;
use tracing::error;

/// Runs an audit from parsed CLI arguments, returning the process exit
/// code.
pub async fn handle_run(args: &CliArgs) -> i32 {
    match run_audit(args).await {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

async fn run_audit(args: &CliArgs) -> anyhow::Result<()> {
    let config = build_config(args)?;
    config.validate().context("invalid configuration")?;

    let client = config.create_client();
    let audit = TechStackAudit::new(
        client,
        config.output_dir.clone(),
        args.years,
        args.depth.into(),
    );

    let summary = audit
        .run(&args.inventory, &args.client_name)
        .await
        .map_err(describe)?;

    println!(
        "Audit complete: {} tools analyzed, {} researched, {} opportunities.",
        summary.tools_analyzed, summary.research_succeeded, summary.opportunities_found
    );
    println!("Report: {}", summary.report_path.display());

    Ok(())
}

/// Applies CLI flag overrides on top of the env-derived configuration
fn build_config(args: &CliArgs) -> anyhow::Result<AuditConfig> {
    let mut config = AuditConfig::default();

    if let Some(provider) = &args.provider {
        config.provider = parse_provider(provider)?;
        // An env/default model belongs to the env-configured provider;
        // a provider override invalidates it.
        if args.model.is_none() && std::env::var("STACKAUDIT_MODEL").is_err() {
            config.model = default_model_for(config.provider)
                .unwrap_or_default()
                .to_string();
        }
    }
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    if config.model.is_empty() {
        anyhow::bail!(
            "no model configured for provider {}; pass --model or set STACKAUDIT_MODEL",
            config.provider.as_str()
        );
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = timeout;
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }

    Ok(config)
}

/// Attaches user-facing troubleshooting hints to fatal audit errors
fn describe(error: AuditError) -> anyhow::Error {
    let hint = match &error {
        AuditError::Inventory(_) => {
            "Check the inventory file: it must be CSV with the columns \
             Tool Name, Category, Used By, Criticality."
        }
        AuditError::Analysis(_) => {
            "The integration analysis call failed. Check connectivity and \
             credentials for the configured provider, then retry."
        }
        AuditError::Report(_) => {
            "Report generation failed. Check provider connectivity and that \
             the output directory is writable."
        }
    };

    anyhow::Error::new(error).context(hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["stackaudit", "tools.csv", "Acme"];
        argv.extend_from_slice(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    #[serial]
    fn test_build_config_defaults() {
        std::env::remove_var("STACKAUDIT_PROVIDER");
        std::env::remove_var("STACKAUDIT_MODEL");

        let config = build_config(&args(&[])).unwrap();
        assert_eq!(config.provider.as_str(), "OpenAI");
    }

    #[test]
    #[serial]
    fn test_build_config_flag_overrides() {
        std::env::remove_var("STACKAUDIT_MODEL");

        let config = build_config(&args(&[
            "--provider",
            "ollama",
            "--model",
            "llama3.1:70b",
            "--timeout",
            "30",
            "--output-dir",
            "/tmp/out",
        ]))
        .unwrap();

        assert_eq!(config.provider.as_str(), "Ollama");
        assert_eq!(config.model, "llama3.1:70b");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.output_dir, std::path::PathBuf::from("/tmp/out"));
    }

    #[test]
    #[serial]
    fn test_build_config_provider_override_uses_its_default_model() {
        std::env::remove_var("STACKAUDIT_MODEL");

        let config = build_config(&args(&["--provider", "ollama"])).unwrap();
        assert_eq!(config.provider.as_str(), "Ollama");
        assert_eq!(config.model, "llama3.1:8b");
    }

    #[test]
    #[serial]
    fn test_build_config_provider_without_model() {
        std::env::remove_var("STACKAUDIT_MODEL");

        // anthropic has no built-in default model
        let result = build_config(&args(&["--provider", "anthropic"]));
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_build_config_invalid_provider() {
        let result = build_config(&args(&["--provider", "hal9000"]));
        assert!(result.is_err());
    }
}
