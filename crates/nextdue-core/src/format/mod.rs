//! Grouping and output rendering for assignments.
//!
//! This module buckets assignments by due date, orders the dates
//! chronologically, and renders the result:
//! - **TTY**: the human-readable date-grouped list
//! - **JSON**: machine-readable output for scripting
//!
//! Rendering is pure; writing to stdout is the caller's job.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::event::Assignment;

/// Assignments sharing one due date, in source encounter order.
///
/// Exists only for the duration of rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    /// The shared due date.
    pub date: NaiveDate,
    /// The group's assignments, in the order they were encountered.
    pub assignments: Vec<Assignment>,
}

/// Buckets assignments by due date.
///
/// Groups come back ascending by date; within a group the relative source
/// order is preserved (stable grouping, no re-sorting by course or title).
pub fn group_by_date(assignments: Vec<Assignment>) -> Vec<DateGroup> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Assignment>> = BTreeMap::new();
    for assignment in assignments {
        buckets
            .entry(assignment.due_date())
            .or_default()
            .push(assignment);
    }
    buckets
        .into_iter()
        .map(|(date, assignments)| DateGroup { date, assignments })
        .collect()
}

/// The output format for the assignment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Tty,
    /// Machine-readable JSON output.
    Json,
}

/// Configuration options for output rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Text to show when no assignments survive classification.
    pub no_assignments_text: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            no_assignments_text: "No assignments found.".to_string(),
        }
    }
}

/// One date group in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonGroup {
    /// The shared due date.
    pub date: NaiveDate,
    /// The group's assignment lines.
    pub assignments: Vec<JsonAssignment>,
}

/// One assignment in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAssignment {
    /// Course identifier, absent when none was recognized.
    pub course_code: Option<String>,
    /// The assignment title.
    pub title: String,
}

/// The complete JSON output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Date groups, ascending.
    pub groups: Vec<JsonGroup>,
}

/// Renders date groups into the configured output shape.
#[derive(Debug, Clone, Default)]
pub struct OutputFormatter {
    options: FormatOptions,
}

impl OutputFormatter {
    /// Creates a formatter with the given options.
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Creates a formatter with default options.
    pub fn with_defaults() -> Self {
        Self::new(FormatOptions::default())
    }

    /// Renders groups as the human-readable date-grouped list.
    ///
    /// Each group gets a `-- <Month> <Day>, <Year> (<Weekday>) --` header
    /// followed by one line per assignment; groups are separated by a blank
    /// line. An empty input renders the configured no-assignments text.
    pub fn format_tty(&self, groups: &[DateGroup]) -> String {
        if groups.is_empty() {
            return self.options.no_assignments_text.clone();
        }

        groups
            .iter()
            .map(|group| {
                let mut block = format!("-- {} --", group.date.format("%B %d, %Y (%A)"));
                for assignment in &group.assignments {
                    block.push('\n');
                    block.push_str(&format_line(assignment));
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Renders groups as the JSON output document.
    pub fn format_json(&self, groups: &[DateGroup]) -> JsonOutput {
        JsonOutput {
            groups: groups
                .iter()
                .map(|group| JsonGroup {
                    date: group.date,
                    assignments: group
                        .assignments
                        .iter()
                        .map(|a| JsonAssignment {
                            course_code: a.course_code.clone(),
                            title: a.title.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// `<course_code>: <title>`, or the bare title without a course code.
fn format_line(assignment: &Assignment) -> String {
    match &assignment.course_code {
        Some(code) => format!("{}: {}", code, assignment.title),
        None => assignment.title.clone(),
    }
}

#[cfg(test)]
mod golden_tests;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::DueTime;
    use chrono::{TimeZone, Utc};

    fn due(y: i32, m: u32, d: u32) -> DueTime {
        DueTime::from_utc(Utc.with_ymd_and_hms(y, m, d, 4, 59, 59).unwrap())
    }

    fn assignment(code: Option<&str>, title: &str, due: DueTime) -> Assignment {
        Assignment::new(code.map(String::from), title, due)
    }

    mod grouping {
        use super::*;

        #[test]
        fn groups_come_back_in_date_order() {
            let assignments = vec![
                assignment(None, "third", due(2025, 1, 17)),
                assignment(None, "first", due(2025, 1, 14)),
                assignment(None, "second", due(2025, 1, 16)),
            ];

            let groups = group_by_date(assignments);
            let dates: Vec<_> = groups.iter().map(|g| g.date.to_string()).collect();
            assert_eq!(dates, vec!["2025-01-14", "2025-01-16", "2025-01-17"]);
        }

        #[test]
        fn same_day_preserves_source_order() {
            let assignments = vec![
                assignment(Some("ZOO-1010-001"), "z first", due(2025, 1, 15)),
                assignment(Some("ART-1010-001"), "a second", due(2025, 1, 15)),
            ];

            let groups = group_by_date(assignments);
            assert_eq!(groups.len(), 1);
            assert_eq!(groups[0].assignments[0].title, "z first");
            assert_eq!(groups[0].assignments[1].title, "a second");
        }

        #[test]
        fn every_assignment_lands_in_exactly_one_group() {
            let assignments = vec![
                assignment(None, "a", due(2025, 1, 14)),
                assignment(None, "b", due(2025, 1, 14)),
                assignment(None, "c", due(2025, 1, 15)),
            ];

            let groups = group_by_date(assignments);
            let total: usize = groups.iter().map(|g| g.assignments.len()).sum();
            assert_eq!(total, 3);
        }
    }

    mod tty_output {
        use super::*;

        #[test]
        fn header_format() {
            let groups = group_by_date(vec![assignment(None, "Hmwk 1", due(2025, 1, 14))]);
            let output = OutputFormatter::with_defaults().format_tty(&groups);
            assert!(output.starts_with("-- January 14, 2025 (Tuesday) --"));
        }

        #[test]
        fn line_with_and_without_course_code() {
            let groups = group_by_date(vec![
                assignment(Some("ITSC-2214-001"), "M0 Quiz", due(2025, 1, 15)),
                assignment(None, "Hmwk 1", due(2025, 1, 15)),
            ]);
            let output = OutputFormatter::with_defaults().format_tty(&groups);
            assert!(output.contains("ITSC-2214-001: M0 Quiz"));
            assert!(output.contains("\nHmwk 1"));
        }

        #[test]
        fn empty_input_renders_no_assignments_text() {
            let output = OutputFormatter::with_defaults().format_tty(&[]);
            assert_eq!(output, "No assignments found.");
        }

        #[test]
        fn no_assignments_text_is_configurable() {
            let formatter = OutputFormatter::new(FormatOptions {
                no_assignments_text: "Nothing due!".to_string(),
            });
            assert_eq!(formatter.format_tty(&[]), "Nothing due!");
        }
    }

    mod json_output {
        use super::*;

        #[test]
        fn structure_and_serialization() {
            let groups = group_by_date(vec![
                assignment(Some("ITSC-2214-001"), "M0 Quiz", due(2025, 1, 15)),
                assignment(None, "Hmwk 1", due(2025, 1, 15)),
            ]);
            let output = OutputFormatter::with_defaults().format_json(&groups);

            assert_eq!(output.groups.len(), 1);
            assert_eq!(output.groups[0].assignments.len(), 2);

            let json = serde_json::to_string(&output).unwrap();
            assert!(json.contains("\"2025-01-15\""));
            assert!(json.contains("\"ITSC-2214-001\""));

            let parsed: JsonOutput = serde_json::from_str(&json).unwrap();
            assert_eq!(output, parsed);
        }
    }
}
