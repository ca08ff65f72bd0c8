//! Error types for the feed reader.

use std::path::PathBuf;
use thiserror::Error;
use tickfeed_types::{ClockFormatError, LayoutError};

/// Result type alias for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;

/// Errors that end a feed.
///
/// None of these are retried: the reader stops at the first failing line and
/// reports the error through its [`FeedHandle`](crate::FeedHandle).
#[derive(Error, Debug)]
pub enum FeedError {
    /// The feed file could not be opened.
    #[error("Failed to open feed file '{path}': {source}")]
    Open {
        /// The path that could not be opened.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Reading failed part way through the file.
    #[error("Failed to read feed file '{path}': {source}")]
    Read {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A line split into fewer fields than the layout needs.
    #[error("Malformed line {line}: {found} fields (expected at least {expected})")]
    MalformedLine {
        /// 1-based line number.
        line: u64,
        /// Number of fields found.
        found: usize,
        /// Number of fields the layout requires.
        expected: usize,
    },

    /// A line has an empty symbol field.
    #[error("Empty symbol on line {line}")]
    EmptySymbol {
        /// 1-based line number.
        line: u64,
    },

    /// The clock text field could not be parsed.
    #[error("Invalid time on line {line}: {source}")]
    Time {
        /// 1-based line number.
        line: u64,
        /// The clock text error.
        source: ClockFormatError,
    },

    /// The price or size field is not a number.
    #[error("Invalid {field} '{value}' on line {line}")]
    Number {
        /// 1-based line number.
        line: u64,
        /// Which field failed (`price` or `size`).
        field: &'static str,
        /// The rejected text.
        value: String,
    },

    /// `run` was called on a reader that has already been started.
    #[error("Feed reader already started")]
    AlreadyStarted,

    /// The configured field layout is inconsistent.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The background task panicked or was aborted.
    #[error("Feed task failed: {0}")]
    TaskFailed(String),
}

impl FeedError {
    /// Returns the 1-based line number for line-level errors.
    #[must_use]
    pub const fn line(&self) -> Option<u64> {
        match self {
            Self::MalformedLine { line, .. }
            | Self::EmptySymbol { line }
            | Self::Time { line, .. }
            | Self::Number { line, .. } => Some(*line),
            _ => None,
        }
    }
}
