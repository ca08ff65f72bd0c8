//! Trade record representation.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format_clock_text;

/// A single trade parsed from one line of a feed file.
///
/// Records are values: the fields are fixed at construction and only exposed
/// through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    symbol: String,
    timestamp_millis: u64,
    price: f64,
    size: u64,
}

impl TradeRecord {
    /// Creates a new trade record.
    #[must_use]
    pub fn new(symbol: impl Into<String>, timestamp_millis: u64, price: f64, size: u64) -> Self {
        Self {
            symbol: symbol.into(),
            timestamp_millis,
            price,
            size,
        }
    }

    /// Returns the instrument symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the trade time in milliseconds since midnight.
    #[must_use]
    pub const fn timestamp_millis(&self) -> u64 {
        self.timestamp_millis
    }

    /// Returns the trade price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Returns the traded quantity.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the traded value (price times size).
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.price * self.size as f64
    }

    /// Anchors the time-of-day offset to a trading day (UTC).
    ///
    /// Returns `None` if the resulting timestamp is out of chrono's range.
    #[must_use]
    pub fn timestamp_on(&self, day: NaiveDate) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.timestamp_millis).ok()?;
        let midnight = day.and_hms_opt(0, 0, 0)?.and_utc();
        midnight.checked_add_signed(TimeDelta::try_milliseconds(millis)?)
    }
}

impl fmt::Display for TradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[symbol={}, time={}, price={}, size={}]",
            self.symbol,
            format_clock_text(self.timestamp_millis),
            self.price,
            self.size
        )
    }
}
