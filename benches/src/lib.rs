//! Synthetic feed generation for tickfeed benchmarks.

use std::fmt::Write;
use tickfeed_lib::format_clock_text;

const SYMBOLS: [&str; 4] = ["EURUSD", "GBPUSD", "USDJPY", "XAUUSD"];

/// Generates `lines` well-formed feed lines in the default layout.
///
/// Timestamps advance by 37 ms per line starting at 09:30:00.
#[must_use]
pub fn synthetic_feed(lines: usize) -> String {
    let mut out = String::with_capacity(lines * 40);
    for i in 0..lines {
        let millis = 34_200_000 + i as u64 * 37;
        let price = 1.0 + (i % 1_000) as f64 / 10_000.0;
        let _ = writeln!(
            out,
            "{},{},{price:.5},{}",
            SYMBOLS[i % SYMBOLS.len()],
            format_clock_text(millis),
            100 + i % 900
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_feed() {
        let feed = synthetic_feed(3);
        let lines: Vec<_> = feed.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "EURUSD,09:30:00:000,1.00000,100");
        assert_eq!(lines[1], "GBPUSD,09:30:00:037,1.00010,101");
    }
}
