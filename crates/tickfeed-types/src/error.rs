//! Error types for tickfeed values.

use std::fmt;
use thiserror::Error;

/// A numeric field inside clock text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockField {
    /// The `HH` field.
    Hours,
    /// The `MM` field.
    Minutes,
    /// The `SS` field.
    Seconds,
    /// The optional `mmm` field.
    Millis,
}

impl ClockField {
    /// Returns the field name as it appears in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Millis => "milliseconds",
        }
    }
}

impl fmt::Display for ClockField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while parsing clock text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockFormatError {
    /// Input is shorter than `HH:MM:SS`.
    #[error("Clock text too short: {len} bytes (expected at least 8)")]
    TooShort {
        /// Length of the rejected input.
        len: usize,
    },

    /// Input starts a millisecond field but does not complete it.
    #[error("Clock text truncated: {len} bytes (expected 8 or at least 12)")]
    Truncated {
        /// Length of the rejected input.
        len: usize,
    },

    /// A numeric field holds something other than ASCII digits.
    #[error("Non-numeric {field} in clock text '{text}'")]
    NonNumeric {
        /// The offending field.
        field: ClockField,
        /// The full clock text.
        text: String,
    },
}

/// Error for inconsistent field layouts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Two fields were mapped to the same column.
    #[error("Fields '{first}' and '{second}' both use column {index}")]
    DuplicateIndex {
        /// The shared column index.
        index: usize,
        /// The first field using it.
        first: &'static str,
        /// The second field using it.
        second: &'static str,
    },
}
