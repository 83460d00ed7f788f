//! The default command: list assignments grouped by due date.
//!
//! Assembles the whole pipeline: load the export, keep the entries that are
//! assignments, normalize course and title, group by date, render.

use std::path::PathBuf;

use nextdue_core::{
    Classifier, ExclusionList, FormatOptions, OutputFormat, OutputFormatter, group_by_date,
    normalize_events,
};
use nextdue_ics::{DEFAULT_CALENDAR_FILE, load_calendar};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{CliError, CliResult};

/// Runs the list command, printing the rendered output to stdout.
pub fn run(cli: &Cli, config: &Config) -> CliResult<()> {
    let output = render(cli, config)?;
    println!("{}", output);
    Ok(())
}

/// Renders the assignment list for the configured input and format.
pub fn render(cli: &Cli, config: &Config) -> CliResult<String> {
    let path = calendar_path(cli, config);
    let events = load_calendar(&path)?;

    let classifier = Classifier::new(build_exclusions(cli, config));
    let assignments = normalize_events(&classifier.assignments(&events));
    let groups = group_by_date(assignments);

    let formatter = OutputFormatter::new(FormatOptions {
        no_assignments_text: config.display.no_assignments_text.clone(),
    });

    match cli.output_format() {
        OutputFormat::Tty => Ok(formatter.format_tty(&groups)),
        OutputFormat::Json => serde_json::to_string_pretty(&formatter.format_json(&groups))
            .map_err(|e| CliError::Render(format!("failed to serialize output: {}", e))),
    }
}

/// Resolves the export path: CLI argument, then config, then the
/// conventional default filename in the working directory.
pub fn calendar_path(cli: &Cli, config: &Config) -> PathBuf {
    cli.file
        .clone()
        .or_else(|| config.calendar_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CALENDAR_FILE))
}

/// Builds the exclusion list from config and CLI flags.
///
/// Built-ins apply unless disabled in either place; config terms and CLI
/// terms both extend the list.
fn build_exclusions(cli: &Cli, config: &Config) -> ExclusionList {
    let base = if cli.no_builtin_excludes || !config.filters.use_builtin_excludes {
        ExclusionList::empty()
    } else {
        ExclusionList::builtin()
    };

    base.with_terms(config.filters.exclude.iter().cloned())
        .with_terms(cli.exclude.iter().cloned())
}
