//! Delimited line parsing.

use tickfeed_types::{FieldLayout, TradeRecord, parse_clock_text};

use crate::FeedError;

/// Parses one feed line into a trade record.
///
/// The line is split on the layout's delimiter with no quoting or escaping.
/// An empty line splits into a single empty field.
///
/// # Errors
///
/// Returns an error if the line has too few fields, an empty symbol, invalid
/// clock text, or a price or size that is not a number.
pub fn parse_line(text: &str, layout: &FieldLayout, line: u64) -> Result<TradeRecord, FeedError> {
    let fields: Vec<&str> = text.split(char::from(layout.delimiter)).collect();
    let expected = layout.required_fields();
    if fields.len() < expected {
        return Err(FeedError::MalformedLine {
            line,
            found: fields.len(),
            expected,
        });
    }

    let symbol = fields[layout.symbol];
    if symbol.is_empty() {
        return Err(FeedError::EmptySymbol { line });
    }

    let timestamp_millis =
        parse_clock_text(fields[layout.time]).map_err(|source| FeedError::Time { line, source })?;

    let price_text = fields[layout.price];
    let price = price_text.parse::<f64>().map_err(|_| FeedError::Number {
        line,
        field: "price",
        value: price_text.to_string(),
    })?;

    let size_text = fields[layout.size];
    let size = size_text.parse::<u64>().map_err(|_| FeedError::Number {
        line,
        field: "size",
        value: size_text.to_string(),
    })?;

    Ok(TradeRecord::new(symbol, timestamp_millis, price, size))
}
