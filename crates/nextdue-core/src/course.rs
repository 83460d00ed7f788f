//! Course-code extraction and title normalization.
//!
//! Canvas encodes the owning course in the free-text summary of each entry,
//! usually as a trailing bracketed tag (`M0 Quiz [ITSC-2214-001-F24]`),
//! sometimes inline (`ITSC-2214-001: M0 Quiz`), and sometimes not at all.
//! This module turns that text into a `(course_code, title)` pair.
//!
//! Extraction is an ordered list of rules; the first rule that applies wins,
//! and a cleanup fallback guarantees every entry still yields a title.
//! Normalization is deterministic: the same summary always produces the
//! same result.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::event::{Assignment, RawEvent};

/// Course code: 3-4 letter department, 4 digit number, optional 1-3
/// character section token, separated by hyphens or spaces.
static COURSE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z]{3,4})[- ](\d{4})\b(?:[- ]([A-Z0-9]{1,3})\b)?")
        .expect("Invalid course code regex")
});

/// A bracketed course tag, e.g. `[ITSC-2214-001-Fall-2024]`.
static BRACKETED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\[\]]+\]").expect("Invalid bracket regex"));

/// Opaque export identifiers (letter prefix, digit, 5+ more alphanumerics).
static RANDOM_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[- ]*[A-Za-z]*\d[A-Za-z\d]{5,}[- ]*").expect("Invalid id regex")
});

/// Semester markers such as `Fall 2024` or `-Spring-2025`.
static SEMESTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[- ]*[A-Z][a-z]+[- ]\d{4}[- ]*").expect("Invalid semester regex")
});

/// Combined-section marker appended by the export.
static COMBINED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_Combined").expect("Invalid combined regex"));

/// Runs of whitespace left behind by stripping.
static MULTI_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("Invalid whitespace regex"));

/// Parentheses emptied out by stripping.
static EMPTY_PARENS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)").expect("Invalid parens regex"));

/// A trailing parenthetical, with its content captured.
static TRAILING_PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(([^()]*)\)\s*$").expect("Invalid parenthetical regex"));

/// The result of extracting course and title from an entry summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Course identifier, if one was recognized.
    pub course_code: Option<String>,
    /// Cleaned assignment title.
    pub title: String,
}

/// One extraction rule: returns `None` when it does not apply.
type ExtractRule = fn(&str) -> Option<Extracted>;

/// Rules attempted in order; first match wins. The cleanup fallback in
/// [`extract`] runs when none applies.
const EXTRACT_RULES: &[(&str, ExtractRule)] = &[
    ("bracketed-tag", extract_bracketed_tag),
    ("inline-code", extract_inline_code),
];

/// Extracts `(course_code, title)` from an entry summary.
pub fn extract(summary: &str) -> Extracted {
    let mut extracted = EXTRACT_RULES
        .iter()
        .find_map(|(name, rule)| {
            let result = rule(summary)?;
            debug!(rule = %name, course = ?result.course_code, "extraction rule matched");
            Some(result)
        })
        .unwrap_or_else(|| fallback(summary));

    // A trailing parenthetical that repeats the course code carries no
    // information the line does not already have.
    if let Some(ref code) = extracted.course_code {
        extracted.title = strip_duplicate_parenthetical(&extracted.title, code);
    }

    extracted
}

/// Normalizes a qualifying event into an [`Assignment`].
pub fn normalize_event(event: &RawEvent) -> Assignment {
    let extracted = extract(event.effective_summary());
    let title = if extracted.title.is_empty() {
        "(No title)".to_string()
    } else {
        extracted.title
    };
    Assignment::new(extracted.course_code, title, event.start.clone())
}

/// Batch-normalizes events, preserving encounter order.
pub fn normalize_events(events: &[&RawEvent]) -> Vec<Assignment> {
    events.iter().map(|e| normalize_event(e)).collect()
}

/// Rule 1: the Canvas export shape. The last bracketed group names the
/// course, everything around it is the title.
fn extract_bracketed_tag(summary: &str) -> Option<Extracted> {
    let tag = BRACKETED_RE.find_iter(summary).last()?;
    let course_field = summary[tag.start() + 1..tag.end() - 1].trim();

    let mut remainder = String::with_capacity(summary.len());
    remainder.push_str(&summary[..tag.start()]);
    remainder.push_str(&summary[tag.end()..]);
    let title = clean_title(&remainder);

    let codes = collect_codes(course_field);
    let course_code = match codes.as_slice() {
        // No recognizable code: strip export boilerplate from the course
        // field and use what remains as the course label.
        [] => {
            let label = clean_course_field(course_field);
            (!label.is_empty()).then_some(label)
        }
        [only] => Some(only.code.clone()),
        [first, rest @ ..] => {
            // Combined sections of one course collapse to the shared base;
            // genuinely different courses fall back to the first.
            if rest.iter().all(|c| c.base == first.base) {
                Some(first.base.clone())
            } else {
                Some(first.code.clone())
            }
        }
    };

    Some(Extracted { course_code, title })
}

/// Rule 2: a course code somewhere in the summary itself.
fn extract_inline_code(summary: &str) -> Option<Extracted> {
    let caps = COURSE_CODE_RE.captures(summary)?;
    let matched = caps.get(0).expect("whole match");
    let code = format_code(&caps);

    let mut remainder = String::with_capacity(summary.len());
    remainder.push_str(&summary[..matched.start()]);
    remainder.push(' ');
    remainder.push_str(&summary[matched.end()..]);

    Some(Extracted {
        course_code: Some(code),
        title: clean_title(&remainder),
    })
}

/// Fallback: no course pattern anywhere. Strip a trailing course-name
/// parenthetical and separator residue; never drop the entry.
fn fallback(summary: &str) -> Extracted {
    let without_paren = TRAILING_PAREN_RE.replace(summary, "");
    Extracted {
        course_code: None,
        title: clean_title(&without_paren),
    }
}

/// A course code match, with its `DEPT-NNNN` base for section collapsing.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CodeMatch {
    code: String,
    base: String,
}

fn collect_codes(text: &str) -> Vec<CodeMatch> {
    COURSE_CODE_RE
        .captures_iter(text)
        .map(|caps| {
            let base = format!("{}-{}", &caps[1], &caps[2]);
            CodeMatch {
                code: format_code(&caps),
                base,
            }
        })
        .collect()
}

/// Renders captured code parts with hyphen separators, whatever separator
/// the source text used.
fn format_code(caps: &regex::Captures<'_>) -> String {
    match caps.get(3) {
        Some(section) => format!("{}-{}-{}", &caps[1], &caps[2], section.as_str()),
        None => format!("{}-{}", &caps[1], &caps[2]),
    }
}

/// Removes export boilerplate from a course field with no recognizable
/// code: opaque IDs, semester markers, combined-section suffixes.
fn clean_course_field(field: &str) -> String {
    let mut cleaned = field.to_string();
    for re in [&*RANDOM_ID_RE, &*SEMESTER_RE, &*COMBINED_RE] {
        cleaned = re.replace_all(&cleaned, "").into_owned();
    }
    clean_title(&cleaned)
}

/// Trims whitespace, collapses separator residue, drops emptied parens.
fn clean_title(text: &str) -> String {
    let text = EMPTY_PARENS_RE.replace_all(text, " ");
    let text = MULTI_SPACE_RE.replace_all(&text, " ");
    text.trim()
        .trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
        .trim_end_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
        .to_string()
}

fn strip_duplicate_parenthetical(title: &str, code: &str) -> String {
    if let Some(caps) = TRAILING_PAREN_RE.captures(title)
        && caps[1].trim().eq_ignore_ascii_case(code)
    {
        let paren_start = caps.get(0).expect("whole match").start();
        return clean_title(&title[..paren_start]);
    }
    title.to_string()
}
