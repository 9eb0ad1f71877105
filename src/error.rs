//! Error types for the shift tracker.
//!
//! Pay calculation and aggregation never fail. Everything around them
//! (configuration, input checks, storage) reports through [`TrackerError`].

use thiserror::Error;

/// The main error type for the shift tracker.
///
/// # Example
///
/// ```
/// use shift_tracker::error::TrackerError;
///
/// let error = TrackerError::ProjectNotFound { id: 7 };
/// assert_eq!(error.to_string(), "Project not found: 7");
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No project exists with the given id.
    #[error("Project not found: {id}")]
    ProjectNotFound {
        /// The id that was looked up.
        id: i64,
    },

    /// No shift exists with the given id.
    #[error("Shift not found: {id}")]
    ShiftNotFound {
        /// The id that was looked up.
        id: i64,
    },

    /// A project field failed input checks.
    #[error("Invalid project field '{field}': {message}")]
    InvalidProject {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A shift field failed input checks.
    #[error("Invalid shift field '{field}': {message}")]
    InvalidShift {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A month could not be parsed or does not exist.
    #[error("Invalid month: {value}")]
    InvalidMonth {
        /// The offending input.
        value: String,
    },

    /// The backing store failed.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

impl From<sqlx::Error> for TrackerError {
    fn from(error: sqlx::Error) -> Self {
        TrackerError::Storage {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;
