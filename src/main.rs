use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use treesync::commands::sync::run;
use treesync::config::Cli;
use treesync::logger::{ConsoleLogger, FileLogger, Logger, Tone};
use treesync::{ui, Config};

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::try_from(cli)?;

    let file_logger = FileLogger::open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;
    let mut logger = ConsoleLogger::new(file_logger).quiet(config.quiet);

    let outcome = run(&config, &mut logger);

    let (tone, message) = ui::outcome_message(&outcome);
    logger.announce(tone, &message);
    if let Ok(report) = &outcome {
        logger.announce(Tone::Plain, &ui::format_report(report));
    }
    logger.close().context("Failed to close log file")?;

    // Per-file errors are in the log; only an aborted run is a failure
    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Diagnostics go to stderr, filtered by RUST_LOG (default: warnings only)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
