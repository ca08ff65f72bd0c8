//! Display utilities and output formatting for the tickfeed CLI.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::ValueEnum;
use std::io::{self, Write};
use tickfeed_lib::prelude::*;
use tracing::debug;

/// Output format for replayed records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Bracketed diagnostic form, one record per line.
    Text,
    /// Aligned columns with grouped sizes.
    Table,
    /// One JSON object per line.
    Json,
}

/// Sink that writes each record to stdout.
pub(crate) struct PrintSink {
    format: Format,
    decimals: usize,
    date: Option<NaiveDate>,
}

impl PrintSink {
    pub(crate) const fn new(format: Format, decimals: usize, date: Option<NaiveDate>) -> Self {
        Self {
            format,
            decimals,
            date,
        }
    }

    fn render(&self, trade: &TradeRecord) -> String {
        match self.format {
            Format::Text => trade.to_string(),
            Format::Table => format!(
                "{:<12} {} {:>14} {:>16}",
                trade.symbol(),
                format_clock_text(trade.timestamp_millis()),
                format_decimal(trade.price(), self.decimals),
                format_quantity(trade.size()),
            ),
            Format::Json => {
                let mut value = serde_json::json!({
                    "symbol": trade.symbol(),
                    "time": format_clock_text(trade.timestamp_millis()),
                    "timestamp_millis": trade.timestamp_millis(),
                    "price": trade.price(),
                    "size": trade.size(),
                });
                if let Some(at) = self.date.and_then(|day| trade.timestamp_on(day)) {
                    value["timestamp"] = serde_json::Value::String(at.to_rfc3339());
                }
                value.to_string()
            }
        }
    }
}

impl TradeSink for PrintSink {
    fn accept(&mut self, trade: TradeRecord) {
        let line = self.render(&trade);
        if let Err(e) = writeln!(io::stdout().lock(), "{line}") {
            debug!(error = %e, "Failed to write record to stdout");
        }
    }
}

/// Parse a delimiter argument into a single byte.
pub(crate) fn parse_delimiter(s: &str) -> Result<u8> {
    match s {
        "tab" | "\\t" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => bail!("Delimiter must be a single ASCII character, got '{s}'"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_trade() -> TradeRecord {
        TradeRecord::new("EURUSD", 34_215_500, 1.2345, 1_000_000)
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter("|").unwrap(), b'|');
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert!(parse_delimiter("::").is_err());
        assert!(parse_delimiter("é").is_err());
    }

    #[test]
    fn test_render_text() {
        let sink = PrintSink::new(Format::Text, 4, None);
        assert_eq!(
            sink.render(&create_test_trade()),
            "[symbol=EURUSD, time=09:30:15:500, price=1.2345, size=1000000]"
        );
    }

    #[test]
    fn test_render_table() {
        let sink = PrintSink::new(Format::Table, 2, None);
        let line = sink.render(&create_test_trade());
        assert!(line.starts_with("EURUSD "));
        assert!(line.contains("09:30:15:500"));
        assert!(line.contains(" 1.23"));
        assert!(line.ends_with("1,000,000"));
    }

    #[test]
    fn test_render_json_with_date() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let sink = PrintSink::new(Format::Json, 4, Some(day));
        let value: serde_json::Value =
            serde_json::from_str(&sink.render(&create_test_trade())).unwrap();

        assert_eq!(value["symbol"], "EURUSD");
        assert_eq!(value["time"], "09:30:15:500");
        assert_eq!(value["size"], 1_000_000);
        assert_eq!(value["timestamp"], "2024-01-15T09:30:15.500+00:00");
    }
}
