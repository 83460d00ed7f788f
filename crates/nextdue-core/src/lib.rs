//! Core types: events, classification, course codes, formatting

pub mod classify;
pub mod course;
pub mod event;
pub mod format;

pub use classify::{BUILTIN_EXCLUDE_TERMS, Classifier, ExclusionList};
pub use course::{Extracted, extract, normalize_event, normalize_events};
pub use event::{Assignment, DueTime, RawEvent};
pub use format::{
    DateGroup, FormatOptions, JsonAssignment, JsonGroup, JsonOutput, OutputFormat,
    OutputFormatter, group_by_date,
};
