use stackaudit::cli::commands::CliArgs;
use stackaudit::cli::handlers::handle_run;
use stackaudit::util::logging::{self, LoggingConfig};
use stackaudit::VERSION;

use clap::Parser;
use tracing::{debug, Level};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("stackaudit v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_run(&args).await;

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    if let Some(level_str) = &args.log_level {
        let level = logging::parse_level(level_str).unwrap_or_else(|| {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        });
        logging::init(&LoggingConfig::with_level(level));
    } else if args.verbose {
        logging::init(&LoggingConfig::with_level(Level::DEBUG));
    } else if args.quiet {
        logging::init(&LoggingConfig::with_level(Level::ERROR));
    } else {
        logging::init_from_env();
    }
}
