//! Background feed reader.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::{FeedConfig, FeedError, Result, TradeSink, parse_line};

/// Lifecycle of a feed reader.
///
/// `Created -> Running -> Completed | Failed`. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderState {
    /// Constructed, `run` not yet called.
    Created,
    /// The background task is reading the file.
    Running,
    /// The feed ended at end of file or on cancellation.
    Completed,
    /// The feed stopped on an error.
    Failed,
}

impl ReaderState {
    /// Returns true once the feed has stopped.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Why a feed ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedEnd {
    /// Every line of the file was delivered.
    Eof,
    /// The caller cancelled the reader.
    Cancelled,
}

/// Outcome of a feed that ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSummary {
    /// Number of records delivered to the sink.
    pub records: u64,
    /// Why the feed ended.
    pub end: FeedEnd,
}

impl FeedSummary {
    const fn new(records: u64, end: FeedEnd) -> Self {
        Self { records, end }
    }

    /// Returns true if the feed was cancelled before end of file.
    #[must_use]
    pub const fn was_cancelled(&self) -> bool {
        matches!(self.end, FeedEnd::Cancelled)
    }
}

/// Reads a delimited trade file and delivers each record to a sink.
///
/// Construction only stores the sink, path, and configuration. The file is
/// opened by [`run`](Self::run), which starts one background task and returns
/// a [`FeedHandle`] for the outcome.
pub struct FeedReader<S> {
    path: PathBuf,
    config: FeedConfig,
    sink: Option<S>,
    cancel: CancellationToken,
    state_tx: Option<watch::Sender<ReaderState>>,
    state_rx: watch::Receiver<ReaderState>,
}

impl<S> fmt::Debug for FeedReader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedReader")
            .field("path", &self.path)
            .field("config", &self.config)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl<S: TradeSink> FeedReader<S> {
    /// Creates a reader with the default configuration.
    pub fn new(sink: S, path: impl Into<PathBuf>) -> Self {
        Self::with_config(sink, path, FeedConfig::default())
    }

    /// Creates a reader with the given configuration.
    pub fn with_config(sink: S, path: impl Into<PathBuf>, config: FeedConfig) -> Self {
        let (state_tx, state_rx) = watch::channel(ReaderState::Created);
        Self {
            path: path.into(),
            config,
            sink: Some(sink),
            cancel: CancellationToken::new(),
            state_tx: Some(state_tx),
            state_rx,
        }
    }

    /// Starts reading the file on a background task.
    ///
    /// Returns immediately. Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::AlreadyStarted`] on a second call, or
    /// [`FeedError::Layout`] if the configured layout is inconsistent.
    /// File errors are reported through the returned handle.
    pub fn run(&mut self) -> Result<FeedHandle> {
        if self.sink.is_none() {
            return Err(FeedError::AlreadyStarted);
        }
        self.config.layout.validate()?;

        let (Some(sink), Some(state)) = (self.sink.take(), self.state_tx.take()) else {
            return Err(FeedError::AlreadyStarted);
        };

        state.send_replace(ReaderState::Running);
        let task = FeedTask {
            path: self.path.clone(),
            config: self.config.clone(),
            cancel: self.cancel.clone(),
            state: StateReporter(state),
        };

        Ok(FeedHandle {
            join: tokio::spawn(task.run(sink)),
            cancel: self.cancel.clone(),
            state: self.state_rx.clone(),
        })
    }
}

impl<S> FeedReader<S> {
    /// Returns the path of the feed file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the reader configuration.
    #[must_use]
    pub const fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ReaderState {
        *self.state_rx.borrow()
    }

    /// Returns the token that stops the feed when cancelled.
    ///
    /// Cancellation is checked before each line is read and while waiting
    /// between paced records.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

/// Completion signal for a running feed.
///
/// Dropping the handle does not stop the feed.
#[derive(Debug)]
pub struct FeedHandle {
    join: JoinHandle<Result<FeedSummary>>,
    cancel: CancellationToken,
    state: watch::Receiver<ReaderState>,
}

impl FeedHandle {
    /// Waits for the feed to end.
    ///
    /// # Errors
    ///
    /// Returns the error that stopped the feed, or
    /// [`FeedError::TaskFailed`] if the task panicked.
    pub async fn wait(self) -> Result<FeedSummary> {
        self.join
            .await
            .map_err(|e| FeedError::TaskFailed(e.to_string()))?
    }

    /// Asks the feed to stop after the record currently being delivered.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns the token that stops the feed when cancelled.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Returns true if the background task has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ReaderState {
        *self.state.borrow()
    }
}

/// Publishes state changes. Marks the feed failed if the task unwinds.
struct StateReporter(watch::Sender<ReaderState>);

impl StateReporter {
    fn finish(&self, state: ReaderState) {
        self.0.send_replace(state);
    }
}

impl Drop for StateReporter {
    fn drop(&mut self) {
        self.0.send_if_modified(|state| {
            let unfinished = !state.is_terminal();
            if unfinished {
                *state = ReaderState::Failed;
            }
            unfinished
        });
    }
}

struct FeedTask {
    path: PathBuf,
    config: FeedConfig,
    cancel: CancellationToken,
    state: StateReporter,
}

impl FeedTask {
    async fn run<S: TradeSink>(self, mut sink: S) -> Result<FeedSummary> {
        info!(path = %self.path.display(), "Starting feed");

        let result = self.read_all(&mut sink).await;
        match &result {
            Ok(summary) => {
                self.state.finish(ReaderState::Completed);
                info!(
                    path = %self.path.display(),
                    records = summary.records,
                    end = ?summary.end,
                    "Feed finished"
                );
            }
            Err(e) => {
                self.state.finish(ReaderState::Failed);
                error!(path = %self.path.display(), error = %e, "Feed failed");
            }
        }
        result
    }

    /// Reads the file to the end. The file is closed when this returns.
    async fn read_all<S: TradeSink>(&self, sink: &mut S) -> Result<FeedSummary> {
        let layout = self.config.layout;
        let mut lines = open_lines(&self.path).await?;
        let mut line = 0u64;
        let mut delivered = 0u64;

        loop {
            let text = tokio::select! {
                biased;
                () = self.cancel.cancelled() => {
                    debug!(records = delivered, "Feed cancelled");
                    return Ok(FeedSummary::new(delivered, FeedEnd::Cancelled));
                }
                text = lines.next_line() => {
                    text.map_err(|source| read_error(&self.path, source))?
                }
            };
            let Some(text) = text else {
                break;
            };

            line += 1;
            let trade = parse_line(&text, &layout, line)?;

            if delivered > 0 && !self.config.pacing.is_zero() {
                tokio::select! {
                    biased;
                    () = self.cancel.cancelled() => {
                        debug!(records = delivered, "Feed cancelled while paced");
                        return Ok(FeedSummary::new(delivered, FeedEnd::Cancelled));
                    }
                    () = tokio::time::sleep(self.config.pacing) => {}
                }
            }

            sink.accept(trade);
            delivered += 1;
        }

        Ok(FeedSummary::new(delivered, FeedEnd::Eof))
    }
}

/// Opens a feed file for reading line by line.
///
/// Lines are split on `\n` with a trailing `\r` removed. Every physical line
/// is returned, including empty ones.
pub(crate) async fn open_lines(path: &Path) -> Result<Lines<BufReader<File>>> {
    let file = File::open(path).await.map_err(|source| FeedError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file).lines())
}

/// Wraps a failed read. Invalid UTF-8 arrives as [`io::ErrorKind::InvalidData`].
pub(crate) fn read_error(path: &Path, source: io::Error) -> FeedError {
    FeedError::Read {
        path: path.to_path_buf(),
        source,
    }
}
