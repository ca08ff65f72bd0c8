//! Stream adapter over a feed file.

use futures::stream::{self, Stream};
use std::path::PathBuf;
use tickfeed_types::TradeRecord;
use tokio::fs::File;
use tokio::io::{BufReader, Lines};
use tokio::sync::mpsc;

use crate::reader::{open_lines, read_error};
use crate::{FeedConfig, FeedReader, Result, parse_line};

struct StreamState {
    path: PathBuf,
    config: FeedConfig,
    lines: Option<Lines<BufReader<File>>>,
    line: u64,
    done: bool,
}

impl StreamState {
    async fn next_trade(&mut self) -> Option<Result<TradeRecord>> {
        if self.done {
            return None;
        }

        let item = self.read_next().await;
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
            self.lines = None;
        }
        item
    }

    async fn read_next(&mut self) -> Option<Result<TradeRecord>> {
        if self.lines.is_none() {
            match open_lines(&self.path).await {
                Ok(lines) => self.lines = Some(lines),
                Err(e) => return Some(Err(e)),
            }
        }

        let lines = self.lines.as_mut()?;
        let text = match lines.next_line().await {
            Ok(text) => text?,
            Err(source) => return Some(Err(read_error(&self.path, source))),
        };

        if self.line > 0 && !self.config.pacing.is_zero() {
            tokio::time::sleep(self.config.pacing).await;
        }
        self.line += 1;
        Some(parse_line(&text, &self.config.layout, self.line))
    }
}

/// Creates an async stream of the trade records in a feed file.
///
/// Records arrive in file order and a line is only read when the stream is
/// polled, so a slow consumer slows the file down the same way a sink does.
/// The file is opened on the first poll. If the feed stops on an error, the
/// error is yielded as the last item. Dropping the stream closes the file.
///
/// The stream must be polled within a tokio runtime.
///
/// # Errors
///
/// Returns an error if the layout in `config` is inconsistent.
pub fn trade_stream(
    path: impl Into<PathBuf>,
    config: FeedConfig,
) -> Result<impl Stream<Item = Result<TradeRecord>> + Send + 'static> {
    config.layout.validate()?;

    let state = StreamState {
        path: path.into(),
        config,
        lines: None,
        line: 0,
        done: false,
    };

    Ok(stream::unfold(state, |mut state| async move {
        let item = state.next_trade().await?;
        Some((item, state))
    }))
}

/// Collects a whole feed file into memory.
///
/// # Errors
///
/// Returns the first error that stopped the feed.
pub async fn read_all(path: impl Into<PathBuf>, config: FeedConfig) -> Result<Vec<TradeRecord>> {
    let mut trades = Vec::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut reader = FeedReader::with_config(tx, path, config);
    let handle = reader.run()?;

    while let Some(trade) = rx.recv().await {
        trades.push(trade);
    }
    handle.wait().await?;
    Ok(trades)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FeedError;
    use futures::StreamExt;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn feed_file(contents: impl AsRef<[u8]>) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_ref()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_stream_yields_records_then_ends() {
        let file = feed_file("A,09:00:00,1.0,1\nB,09:00:01,2.0,2\n");
        let stream = trade_stream(file.path(), FeedConfig::default()).unwrap();
        let items: Vec<_> = stream.collect().await;

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap().symbol(), "A");
        assert_eq!(items[1].as_ref().unwrap().symbol(), "B");
    }

    #[tokio::test]
    async fn test_stream_ends_with_error() {
        let file = feed_file("A,09:00:00,1.0,1\nB,bad,2.0,2\nC,09:00:02,3.0,3\n");
        let stream = trade_stream(file.path(), FeedConfig::default()).unwrap();
        let items: Vec<_> = stream.collect().await;

        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(matches!(items[1], Err(FeedError::Time { line: 2, .. })));
    }

    #[tokio::test]
    async fn test_stream_stops_at_blank_line() {
        let file = feed_file("A,09:00:00,1.0,1\n\nB,09:00:01,2.0,2\n");
        let stream = trade_stream(file.path(), FeedConfig::default()).unwrap();
        let items: Vec<_> = stream.collect().await;

        assert_eq!(items.len(), 2);
        assert!(matches!(items[1], Err(FeedError::MalformedLine { line: 2, .. })));
    }

    #[tokio::test]
    async fn test_stream_reports_missing_file_on_first_poll() {
        let path = "/nonexistent/tickfeed/trades.csv";
        let stream = trade_stream(path, FeedConfig::default()).unwrap();
        let items: Vec<_> = stream.collect().await;

        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Err(FeedError::Open { .. })));
    }

    #[tokio::test]
    async fn test_stream_can_stop_early() {
        let file = feed_file("A,09:00:00,1.0,1\nB,09:00:01,2.0,2\nC,09:00:02,3.0,3\n");
        let mut stream = Box::pin(trade_stream(file.path(), FeedConfig::default()).unwrap());

        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first.symbol(), "A");
        assert_eq!(stream.next().await.unwrap().unwrap().symbol(), "B");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_pacing() {
        let file = feed_file("A,09:00:00,1.0,1\nB,09:00:01,2.0,2\n");
        let config = FeedConfig::new().with_simulation_time(250);

        let start = tokio::time::Instant::now();
        let items: Vec<_> = trade_stream(file.path(), config).unwrap().collect().await;

        assert_eq!(items.len(), 2);
        assert!(start.elapsed() >= std::time::Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_stream_rejects_invalid_layout() {
        let layout = tickfeed_types::FieldLayout::new().with_columns(0, 0, 1, 2);
        let config = FeedConfig::new().with_layout(layout);
        assert!(matches!(trade_stream("trades.csv", config), Err(FeedError::Layout(_))));
    }

    #[tokio::test]
    async fn test_read_all() {
        let file = feed_file("A,09:00:00,1.0,1\nB,09:00:01,2.0,2\n");
        let trades = read_all(file.path(), FeedConfig::default()).await.unwrap();
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[1].size(), 2);
    }

    #[tokio::test]
    async fn test_read_all_propagates_error() {
        let err = read_all("/nonexistent/tickfeed/trades.csv", FeedConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FeedError::Open { .. }));
    }
}
