//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// nextdue - Your assignment due dates at a glance
#[derive(Debug, Parser)]
#[command(name = "nextdue")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the calendar export (defaults to canvas_export.ics)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    // --- Filter flags ---
    /// Exclude entries matching this term (can be repeated)
    #[arg(long, action = clap::ArgAction::Append, value_name = "TERM")]
    pub exclude: Vec<String>,

    /// Do not apply the built-in exclusion terms
    #[arg(long)]
    pub no_builtin_excludes: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Returns the output format based on CLI flags.
    pub fn output_format(&self) -> nextdue_core::OutputFormat {
        if self.json {
            nextdue_core::OutputFormat::Json
        } else {
            nextdue_core::OutputFormat::Tty
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Show configuration file path
    Path,
}
