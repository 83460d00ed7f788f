//! CLI error types.

use std::fmt;

use nextdue_ics::LoaderError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug)]
pub enum CliError {
    /// Configuration error.
    Config(String),
    /// Calendar loading or parsing error.
    Loader(LoaderError),
    /// Output rendering error.
    Render(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Loader(err) => write!(f, "{}", err),
            Self::Render(msg) => write!(f, "rendering error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Loader(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LoaderError> for CliError {
    fn from(err: LoaderError) -> Self {
        Self::Loader(err)
    }
}
