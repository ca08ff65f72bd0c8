//! Conversion between clock text and milliseconds since midnight.
//!
//! Clock text is fixed width: `HH:MM:SS` (8 bytes) or `HH:MM:SS:mmm`
//! (12 bytes). Fields are read by position, so the separator characters are
//! never inspected. Out-of-range values such as `00:75:00` are accepted and
//! simply produce an offset past the nominal field boundary.

use crate::{ClockField, ClockFormatError};

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: u64 = 86_400_000;

const MILLIS_PER_HOUR: u64 = 3_600_000;
const MILLIS_PER_MINUTE: u64 = 60_000;
const MILLIS_PER_SECOND: u64 = 1_000;

const SHORT_LEN: usize = 8;
const LONG_LEN: usize = 12;

/// Parses clock text into milliseconds since midnight.
///
/// Computes `((hours * 60 + minutes) * 60 + seconds) * 1000 + millis`, where
/// `millis` is zero for the short `HH:MM:SS` form. Anything past the twelfth
/// byte is ignored.
///
/// # Errors
///
/// Returns an error if the text is shorter than 8 bytes, has a partial
/// millisecond field, or a numeric field contains non-digit characters.
pub fn parse_clock_text(text: &str) -> Result<u64, ClockFormatError> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    if len < SHORT_LEN {
        return Err(ClockFormatError::TooShort { len });
    }
    if len > SHORT_LEN && len < LONG_LEN {
        return Err(ClockFormatError::Truncated { len });
    }

    let digits_at = |range: std::ops::Range<usize>, field: ClockField| {
        parse_digits(&bytes[range]).ok_or_else(|| ClockFormatError::NonNumeric {
            field,
            text: text.to_string(),
        })
    };

    let hours = digits_at(0..2, ClockField::Hours)?;
    let minutes = digits_at(3..5, ClockField::Minutes)?;
    let seconds = digits_at(6..8, ClockField::Seconds)?;
    let millis = if len >= LONG_LEN {
        digits_at(9..12, ClockField::Millis)?
    } else {
        0
    };

    Ok(((hours * 60 + minutes) * 60 + seconds) * MILLIS_PER_SECOND + millis)
}

/// Parses a run of ASCII digits. Signs and whitespace are rejected.
#[inline]
fn parse_digits(digits: &[u8]) -> Option<u64> {
    digits.iter().try_fold(0u64, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u64::from(b - b'0'))
    })
}

/// Splits milliseconds since midnight into `(hour, minute, second, millis)`.
///
/// The hour wraps at 24, so offsets past the end of the day fold back into it.
#[must_use]
pub const fn clock_components(millis: u64) -> (u64, u64, u64, u64) {
    (
        (millis / MILLIS_PER_HOUR) % 24,
        (millis / MILLIS_PER_MINUTE) % 60,
        (millis / MILLIS_PER_SECOND) % 60,
        millis % MILLIS_PER_SECOND,
    )
}

/// Formats milliseconds since midnight as `HH:MM:SS:mmm`.
#[must_use]
pub fn format_clock_text(millis: u64) -> String {
    let (hour, minute, second, ms) = clock_components(millis);
    format!("{hour:02}:{minute:02}:{second:02}:{ms:03}")
}
