//! nextdue CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use nextdue_cli::cli::{Cli, Command, ConfigAction};
use nextdue_cli::commands;
use nextdue_cli::config::Config;
use nextdue_cli::error::{CliError, CliResult};
use nextdue_ics::DEFAULT_CALENDAR_FILE;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; diagnostics go to stderr so piped output stays clean
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            if let CliError::Loader(err) = &e
                && err.is_missing_file(Path::new(DEFAULT_CALENDAR_FILE))
            {
                eprintln!(
                    "Specify a file, or rename your export to '{}' and place it in this directory.",
                    DEFAULT_CALENDAR_FILE
                );
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    // Load configuration
    let config = if let Some(ref path) = cli.config {
        Config::load_from(path).map_err(CliError::Config)?
    } else {
        Config::load().unwrap_or_default()
    };

    match &cli.command {
        Some(Command::Config { action }) => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Path => commands::config::path(),
        },
        None => commands::list::run(&cli, &config),
    }
}
