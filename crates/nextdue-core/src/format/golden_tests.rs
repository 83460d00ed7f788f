//! Golden tests for output rendering.
//!
//! These use insta inline snapshots so the expected text lives next to the
//! test; fixed dates keep the output reproducible.

use chrono::{TimeZone, Utc};

use crate::event::{Assignment, DueTime};
use crate::format::{FormatOptions, OutputFormatter, group_by_date};

/// Create a timed due date for testing.
fn due(y: i32, m: u32, d: u32) -> DueTime {
    DueTime::from_utc(Utc.with_ymd_and_hms(y, m, d, 4, 59, 59).unwrap())
}

fn assignment(code: Option<&str>, title: &str, due: DueTime) -> Assignment {
    Assignment::new(code.map(String::from), title, due)
}

#[test]
fn golden_tty_two_groups() {
    let assignments = vec![
        assignment(Some("CTCM-2530-H74"), "What is a hero?", due(2025, 1, 14)),
        assignment(
            Some("ITSC-2214-001"),
            "M0 - Course Structures and Policies Quiz",
            due(2025, 1, 15),
        ),
    ];

    let output = OutputFormatter::with_defaults().format_tty(&group_by_date(assignments));

    insta::assert_snapshot!(output, @r"
    -- January 14, 2025 (Tuesday) --
    CTCM-2530-H74: What is a hero?

    -- January 15, 2025 (Wednesday) --
    ITSC-2214-001: M0 - Course Structures and Policies Quiz
    ");
}

#[test]
fn golden_tty_mixed_lines_on_one_day() {
    let assignments = vec![
        assignment(Some("ITSC-2214-001"), "M0 Quiz", due(2025, 1, 15)),
        assignment(None, "Hmwk 1", due(2025, 1, 15)),
        assignment(Some("Intro to Film"), "Dream journal", due(2025, 1, 15)),
    ];

    let output = OutputFormatter::with_defaults().format_tty(&group_by_date(assignments));

    insta::assert_snapshot!(output, @r"
    -- January 15, 2025 (Wednesday) --
    ITSC-2214-001: M0 Quiz
    Hmwk 1
    Intro to Film: Dream journal
    ");
}

#[test]
fn golden_tty_dates_sort_chronologically() {
    let assignments = vec![
        assignment(None, "due last", due(2025, 1, 17)),
        assignment(None, "due first", due(2025, 1, 14)),
        assignment(None, "due middle", due(2025, 1, 16)),
    ];

    let output = OutputFormatter::with_defaults().format_tty(&group_by_date(assignments));

    insta::assert_snapshot!(output, @r"
    -- January 14, 2025 (Tuesday) --
    due first

    -- January 16, 2025 (Thursday) --
    due middle

    -- January 17, 2025 (Friday) --
    due last
    ");
}

#[test]
fn golden_tty_empty() {
    let output = OutputFormatter::with_defaults().format_tty(&[]);

    insta::assert_snapshot!(output, @"No assignments found.");
}

#[test]
fn golden_json_two_groups() {
    let assignments = vec![
        assignment(Some("CTCM-2530-H74"), "What is a hero?", due(2025, 1, 14)),
        assignment(None, "Hmwk 1", due(2025, 1, 15)),
    ];

    let formatter = OutputFormatter::new(FormatOptions::default());
    let output = formatter.format_json(&group_by_date(assignments));
    let json = serde_json::to_string_pretty(&output).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "groups": [
        {
          "date": "2025-01-14",
          "assignments": [
            {
              "course_code": "CTCM-2530-H74",
              "title": "What is a hero?"
            }
          ]
        },
        {
          "date": "2025-01-15",
          "assignments": [
            {
              "course_code": null,
              "title": "Hmwk 1"
            }
          ]
        }
      ]
    }
    "#);
}
