//! Assignment classification.
//!
//! Decides, per calendar entry, whether it represents due coursework or
//! noise (peer-led sessions, trainings, informational blocks). The policy
//! favors precision over recall: an ambiguous entry is excluded rather than
//! mis-listed as an assignment.

use regex::RegexSet;
use tracing::debug;

use crate::event::RawEvent;

/// Built-in exclusion terms for non-assignment entries.
///
/// These are sample policy, not a complete taxonomy of everything an
/// institution's calendar can produce. Extend or replace them via
/// [`ExclusionList::with_terms`] / [`ExclusionList::empty`].
pub const BUILTIN_EXCLUDE_TERMS: &[&str] =
    &["PAL", "Session", "Training", "Workshop", "Orientation"];

/// A denylist of match terms for non-assignment entries.
///
/// Terms match whole words, case-insensitively, so `PAL` matches
/// "PAL Session" but not "Principal Components".
#[derive(Debug, Clone)]
pub struct ExclusionList {
    terms: Vec<String>,
    matcher: RegexSet,
}

impl ExclusionList {
    /// Creates an exclusion list from the given terms.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms
            .into_iter()
            .map(Into::into)
            .filter(|t| !t.trim().is_empty())
            .collect();
        let matcher = RegexSet::new(
            terms
                .iter()
                .map(|t| format!(r"(?i)\b{}\b", regex::escape(t.trim()))),
        )
        .expect("escaped exclusion terms form valid patterns");
        Self { terms, matcher }
    }

    /// Creates an exclusion list with the built-in terms.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_EXCLUDE_TERMS.iter().copied())
    }

    /// Creates an empty exclusion list that matches nothing.
    pub fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }

    /// Returns a new list with the given terms appended.
    pub fn with_terms<I, S>(self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut terms = self.terms;
        terms.extend(extra.into_iter().map(Into::into));
        Self::new(terms)
    }

    /// Returns the configured terms.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns true if any term matches the given text.
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

impl Default for ExclusionList {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Per-event assignment classifier.
#[derive(Debug, Clone)]
pub struct Classifier {
    exclusions: ExclusionList,
}

impl Classifier {
    /// Creates a classifier with the given exclusion list.
    pub fn new(exclusions: ExclusionList) -> Self {
        Self { exclusions }
    }

    /// Creates a classifier with the built-in exclusion list.
    pub fn with_defaults() -> Self {
        Self::new(ExclusionList::builtin())
    }

    /// Decides whether the entry represents due coursework.
    ///
    /// An entry is rejected when:
    /// - its summary or any category token matches the exclusion list
    /// - it is cancelled
    /// - it carries a date without a time component (all-day informational
    ///   blocks, as opposed to timed due dates)
    pub fn is_assignment(&self, event: &RawEvent) -> bool {
        let summary = event.effective_summary();

        if self.exclusions.matches(summary) {
            debug!(uid = %event.uid, summary, "excluded by denylist term");
            return false;
        }

        if event
            .categories
            .iter()
            .any(|category| self.exclusions.matches(category))
        {
            debug!(uid = %event.uid, summary, "excluded by category");
            return false;
        }

        if event.is_cancelled() {
            debug!(uid = %event.uid, summary, "excluded: cancelled");
            return false;
        }

        if event.is_date_only() {
            debug!(uid = %event.uid, summary, "excluded: no due timestamp");
            return false;
        }

        true
    }

    /// Filters a slice of events down to the qualifying assignments,
    /// preserving encounter order.
    pub fn assignments<'a>(&self, events: &'a [RawEvent]) -> Vec<&'a RawEvent> {
        events.iter().filter(|e| self.is_assignment(e)).collect()
    }
}
