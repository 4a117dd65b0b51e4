use crate::research::ResearchDepth;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Automated tech stack audits: research tool updates, find
/// cross-tool automation opportunities, write the client report
#[derive(Parser, Debug)]
#[command(
    name = "stackaudit",
    about = "Automated tech stack audits driven by LLM research",
    version,
    long_about = "stackaudit loads a CSV inventory of a client's software tools, researches \
                  each tool's recent updates with a hosted LLM, analyzes the complete stack \
                  for cross-tool automation opportunities, and writes a client-ready \
                  markdown report.\n\n\
                  Examples:\n  \
                  stackaudit tools.csv \"Acme Advisors\"\n  \
                  stackaudit tools.csv \"Acme Advisors\" --years 3 --depth deep\n  \
                  stackaudit tools.csv Acme --output-dir reports --provider anthropic"
)]
pub struct CliArgs {
    #[arg(value_name = "INVENTORY", help = "Path to the CSV tool inventory")]
    pub inventory: PathBuf,

    #[arg(value_name = "CLIENT", help = "Client name for the report")]
    pub client_name: String,

    #[arg(
        long,
        value_name = "YEARS",
        default_value = "2",
        help = "Years of history to research"
    )]
    pub years: u32,

    #[arg(
        long,
        value_enum,
        default_value = "medium",
        help = "Research depth (thoroughness vs latency)"
    )]
    pub depth: DepthArg,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Report output directory (overrides STACKAUDIT_OUTPUT_DIR)"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(
        short = 'p',
        long,
        value_name = "PROVIDER",
        help = "LLM provider (openai|anthropic|gemini|groq|xai|ollama)"
    )]
    pub provider: Option<String>,

    #[arg(
        short = 'm',
        long,
        value_name = "MODEL",
        help = "Model name (provider-specific)"
    )]
    pub model: Option<String>,

    #[arg(long, value_name = "SECONDS", help = "Per-request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthArg {
    Quick,
    Medium,
    Deep,
}

impl From<DepthArg> for ResearchDepth {
    fn from(arg: DepthArg) -> Self {
        match arg {
            DepthArg::Quick => ResearchDepth::Quick,
            DepthArg::Medium => ResearchDepth::Medium,
            DepthArg::Deep => ResearchDepth::Deep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["stackaudit", "tools.csv", "Acme"]);

        assert_eq!(args.inventory, PathBuf::from("tools.csv"));
        assert_eq!(args.client_name, "Acme");
        assert_eq!(args.years, 2);
        assert_eq!(args.depth, DepthArg::Medium);
        assert!(args.output_dir.is_none());
        assert!(args.provider.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_args_with_options() {
        let args = CliArgs::parse_from([
            "stackaudit",
            "tools.csv",
            "Acme Advisors",
            "--years",
            "3",
            "--depth",
            "deep",
            "--output-dir",
            "reports",
            "--provider",
            "anthropic",
            "--model",
            "claude-sonnet",
            "--timeout",
            "300",
        ]);

        assert_eq!(args.client_name, "Acme Advisors");
        assert_eq!(args.years, 3);
        assert_eq!(args.depth, DepthArg::Deep);
        assert_eq!(args.output_dir, Some(PathBuf::from("reports")));
        assert_eq!(args.provider, Some("anthropic".to_string()));
        assert_eq!(args.model, Some("claude-sonnet".to_string()));
        assert_eq!(args.timeout, Some(300));
    }

    #[test]
    fn test_depth_conversion() {
        assert_eq!(ResearchDepth::from(DepthArg::Quick), ResearchDepth::Quick);
        assert_eq!(ResearchDepth::from(DepthArg::Deep), ResearchDepth::Deep);
    }

    #[test]
    fn test_verbose_flag() {
        let args = CliArgs::parse_from(["stackaudit", "tools.csv", "Acme", "-v"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_quiet_flag() {
        let args = CliArgs::parse_from(["stackaudit", "tools.csv", "Acme", "-q"]);
        assert!(args.quiet);
    }
}
