//! Error types for calendar loading.
//!
//! Loading a calendar export can fail three ways: the file is missing, the
//! file cannot be read, or the content is not valid iCalendar data. All are
//! fatal for a one-shot transform; there is nothing to retry.

use std::path::PathBuf;
use thiserror::Error;

/// An error that occurred while loading a calendar export.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The input path does not resolve to a file.
    #[error("could not find calendar file: {path}")]
    FileNotFound {
        /// The offending path.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("failed to read calendar file {path}: {source}")]
    Io {
        /// The offending path.
        path: PathBuf,
        /// The underlying read failure.
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid iCalendar data.
    #[error("failed to parse calendar data: {message}")]
    Parse {
        /// Diagnostic from the iCalendar parser.
        message: String,
    },
}

impl LoaderError {
    /// Returns true if this error is a missing file at the given path.
    pub fn is_missing_file(&self, candidate: &std::path::Path) -> bool {
        matches!(self, Self::FileNotFound { path } if path == candidate)
    }
}

/// A specialized Result type for loader operations.
pub type LoaderResult<T> = Result<T, LoaderError>;
