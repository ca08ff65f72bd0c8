//! Replay command implementation.
//!
//! This module reads a trade file on a background feed and prints every record
//! as it is delivered.

use crate::display::{Format, PrintSink, parse_delimiter};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tickfeed_lib::prelude::*;
use tracing::warn;

/// Options for the replay command.
pub(crate) struct ReplayOptions {
    pub(crate) delimiter: Option<String>,
    pub(crate) layout_file: Option<PathBuf>,
    /// Symbol, time, price, and size column overrides.
    pub(crate) columns: [Option<usize>; 4],
    pub(crate) pace_ms: u64,
    pub(crate) format: Format,
    pub(crate) decimals: usize,
    pub(crate) date: Option<String>,
}

/// Replay a trade file to stdout.
pub(crate) async fn replay(file: &Path, options: ReplayOptions, quiet: bool) -> Result<()> {
    let layout = resolve_layout(&options)?;
    let date = options
        .date
        .as_deref()
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid date: {s}"))
        })
        .transpose()?;

    let config = FeedConfig::new()
        .with_layout(layout)
        .with_simulation_time(options.pace_ms);
    let sink = PrintSink::new(options.format, options.decimals, date);

    let mut reader = FeedReader::with_config(sink, file, config);
    let handle = reader.run()?;

    let token = handle.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping feed");
            token.cancel();
        }
    });

    let summary = handle
        .wait()
        .await
        .with_context(|| format!("Feed {} stopped", file.display()))?;

    if !quiet {
        let end = match summary.end {
            FeedEnd::Eof => "end of file",
            FeedEnd::Cancelled => "cancelled",
        };
        eprintln!("{} records ({end})", format_quantity(summary.records));
    }

    Ok(())
}

/// Build the field layout from the layout file and column overrides.
fn resolve_layout(options: &ReplayOptions) -> Result<FieldLayout> {
    let mut layout = match &options.layout_file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
            serde_json::from_str::<FieldLayout>(&content)
                .with_context(|| format!("Invalid layout file: {}", path.display()))?
        }
        None => FieldLayout::default(),
    };

    if let Some(delimiter) = options.delimiter.as_deref() {
        layout.delimiter = parse_delimiter(delimiter)?;
    }

    let [symbol, time, price, size] = options.columns;
    layout.symbol = symbol.unwrap_or(layout.symbol);
    layout.time = time.unwrap_or(layout.time);
    layout.price = price.unwrap_or(layout.price);
    layout.size = size.unwrap_or(layout.size);

    layout.validate()?;
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn options() -> ReplayOptions {
        ReplayOptions {
            delimiter: None,
            layout_file: None,
            columns: [None; 4],
            pace_ms: 0,
            format: Format::Text,
            decimals: 4,
            date: None,
        }
    }

    #[test]
    fn test_default_layout() {
        assert_eq!(resolve_layout(&options()).unwrap(), FieldLayout::default());
    }

    #[test]
    fn test_column_overrides() {
        let mut opts = options();
        opts.delimiter = Some("tab".to_string());
        opts.columns = [Some(3), Some(0), Some(1), Some(2)];

        let layout = resolve_layout(&opts).unwrap();
        assert_eq!(layout.delimiter, b'\t');
        assert_eq!((layout.symbol, layout.time, layout.price, layout.size), (3, 0, 1, 2));
    }

    #[test]
    fn test_layout_file_with_override() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"delimiter": 124, "symbol": 1, "time": 0}}"#).unwrap();

        let mut opts = options();
        opts.layout_file = Some(file.path().to_path_buf());
        opts.columns[3] = Some(4);

        let layout = resolve_layout(&opts).unwrap();
        assert_eq!(layout.delimiter, b'|');
        assert_eq!((layout.symbol, layout.time, layout.size), (1, 0, 4));
    }

    #[test]
    fn test_conflicting_columns() {
        let mut opts = options();
        opts.columns[1] = Some(0);
        assert!(resolve_layout(&opts).is_err());
    }
}
