//! Event types for calendar entries and derived assignments.
//!
//! This module provides the data model for one run of the tool:
//! - [`DueTime`]: a due timestamp, which may be a specific datetime or a bare date
//! - [`RawEvent`]: one calendar entry as parsed from the export
//! - [`Assignment`]: the normalized course-code/title/due-date triple

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The due time of a calendar entry.
///
/// Calendar exports carry two kinds of start times:
/// - **DateTime**: a specific point in time (stored as UTC), which is how
///   Canvas encodes assignment deadlines
/// - **Date**: a date without a time component (all-day blocks)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum DueTime {
    /// A specific datetime, stored in UTC.
    DateTime(DateTime<Utc>),
    /// A date-only entry (no time component).
    Date(NaiveDate),
}

impl DueTime {
    /// Creates a `DueTime::DateTime` from a UTC datetime.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }

    /// Creates a `DueTime::Date` from a bare date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::Date(date)
    }

    /// Returns `true` if this is a date-only time.
    pub fn is_date_only(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Returns `true` if this is a specific datetime.
    pub fn is_datetime(&self) -> bool {
        matches!(self, Self::DateTime(_))
    }

    /// Returns the datetime if this is a `DateTime` variant.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            Self::Date(_) => None,
        }
    }

    /// Returns the calendar date of this due time.
    ///
    /// For timed entries this is the date of the UTC instant, exactly as the
    /// export encodes it.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::DateTime(dt) => dt.date_naive(),
            Self::Date(date) => *date,
        }
    }

    /// Converts to a UTC datetime for comparison purposes.
    ///
    /// Date-only times compare at midnight UTC.
    pub fn to_utc_datetime(&self) -> DateTime<Utc> {
        match self {
            Self::DateTime(dt) => *dt,
            Self::Date(date) => date.and_hms_opt(0, 0, 0).expect("valid time").and_utc(),
        }
    }
}

impl PartialOrd for DueTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DueTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_utc_datetime().cmp(&other.to_utc_datetime())
    }
}

/// One calendar entry as parsed from the export.
///
/// This preserves the fields the pipeline needs: the free-text summary and
/// description, the start (due) time, and the category/status hints used by
/// the classifier. Immutable once parsed; lifetime is one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Unique identifier of the entry within the export.
    pub uid: String,

    /// When the entry starts; the due time for assignment entries.
    pub start: DueTime,

    /// The entry summary (title text).
    pub summary: Option<String>,

    /// The entry description, if present.
    pub description: Option<String>,

    /// CATEGORIES tokens, if present.
    #[serde(default)]
    pub categories: Vec<String>,

    /// The entry status (e.g., "Confirmed", "Cancelled").
    pub status: Option<String>,
}

impl RawEvent {
    /// Creates a new raw event with the required fields.
    pub fn new(uid: impl Into<String>, start: DueTime) -> Self {
        Self {
            uid: uid.into(),
            start,
            summary: None,
            description: None,
            categories: Vec::new(),
            status: None,
        }
    }

    /// Returns the effective summary, falling back to "(No title)" if empty.
    pub fn effective_summary(&self) -> &str {
        self.summary
            .as_ref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.as_str())
            .unwrap_or("(No title)")
    }

    /// Returns true if the entry is cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(|s| s.eq_ignore_ascii_case("cancelled"))
    }

    /// Returns true if the entry carries a date without a time component.
    pub fn is_date_only(&self) -> bool {
        self.start.is_date_only()
    }

    /// Builder method to set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the categories.
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// Builder method to set the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// A normalized assignment derived from a qualifying [`RawEvent`].
///
/// Created by the normalizer, never mutated afterwards. Each printed line
/// corresponds to exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Short course identifier (e.g., `ITSC-2214-001`), if one was found.
    pub course_code: Option<String>,
    /// The cleaned assignment title.
    pub title: String,
    /// When the assignment is due.
    pub due: DueTime,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(course_code: Option<String>, title: impl Into<String>, due: DueTime) -> Self {
        Self {
            course_code,
            title: title.into(),
            due,
        }
    }

    /// Returns the calendar date used for grouping.
    pub fn due_date(&self) -> NaiveDate {
        self.due.date()
    }
}
