use std::fmt;
use std::path::PathBuf;

/// Custom error type for jira2md operations
#[derive(Debug)]
pub enum ReportError {
    /// Configuration file unreadable, unparseable or invalid
    Config { path: PathBuf, message: String },
    /// Malformed tabular input
    Ingest(String),
    /// CSV parsing errors
    Csv(csv::Error),
    /// Date parsing errors
    Date(chrono::ParseError),
}

impl ReportError {
    pub fn config(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        ReportError::Config {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Config { path, message } => {
                write!(f, "Configuration error in '{}': {}", path.display(), message)
            }
            ReportError::Ingest(msg) => write!(f, "Input error: {}", msg),
            ReportError::Csv(err) => write!(f, "CSV error: {}", err),
            ReportError::Date(err) => write!(f, "Date parsing error: {}", err),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Csv(err) => Some(err),
            ReportError::Date(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::Csv(err)
    }
}

impl From<chrono::ParseError> for ReportError {
    fn from(err: chrono::ParseError) -> Self {
        ReportError::Date(err)
    }
}

/// Result type alias for jira2md operations
pub type Result<T> = std::result::Result<T, ReportError>;
