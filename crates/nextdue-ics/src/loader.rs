//! Calendar file loading.
//!
//! Reads an export file from disk and hands its content to the parser.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use nextdue_core::event::RawEvent;

use crate::error::{LoaderError, LoaderResult};
use crate::parse::parse_ics;

/// The conventional export filename used when no path is given.
pub const DEFAULT_CALENDAR_FILE: &str = "canvas_export.ics";

/// Loads a calendar export from the given path.
///
/// Reads the whole file into memory and parses it. A missing file is a
/// [`LoaderError::FileNotFound`]; any other read failure is a
/// [`LoaderError::Io`].
pub fn load_calendar(path: &Path) -> LoaderResult<Vec<RawEvent>> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoaderError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoaderError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let events = parse_ics(&content)?;
    debug!(path = %path.display(), count = events.len(), "loaded calendar export");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_export(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_events_from_file() {
        let file = write_export(
            "BEGIN:VCALENDAR\r\n\
             VERSION:2.0\r\n\
             BEGIN:VEVENT\r\n\
             UID:hmwk-1@example.edu\r\n\
             DTSTART:20250114T045959Z\r\n\
             SUMMARY:Hmwk 1\r\n\
             END:VEVENT\r\n\
             END:VCALENDAR",
        );

        let events = load_calendar(file.path()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].effective_summary(), "Hmwk 1");
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.ics");

        let err = load_calendar(&path).unwrap_err();
        assert!(matches!(err, LoaderError::FileNotFound { .. }));
        assert!(err.is_missing_file(&path));
    }

    #[test]
    fn non_calendar_file_is_parse_error() {
        let file = write_export("not a calendar at all");

        let err = load_calendar(file.path()).unwrap_err();
        assert!(matches!(err, LoaderError::Parse { .. }));
    }
}
