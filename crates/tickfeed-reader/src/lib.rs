//! Background trade file reader for tickfeed.
//!
//! This crate turns a delimited trade file into an ordered feed:
//!
//! - [`FeedReader`] - Reads the file on a tokio task and delivers to a sink
//! - [`TradeSink`] - Consumer of trade records
//! - [`FeedHandle`] - Completion signal, cancellation, and state of a run
//! - [`parse_line`] - Single line parsing against a [`FieldLayout`]
//! - [`trade_stream`] - Async stream view of a feed

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickfeed/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod parse;
mod reader;
mod sink;
mod stream;

pub use config::FeedConfig;
pub use error::{FeedError, Result};
pub use parse::parse_line;
pub use reader::{FeedEnd, FeedHandle, FeedReader, FeedSummary, ReaderState};
pub use sink::TradeSink;
pub use stream::{read_all, trade_stream};
pub use tickfeed_types::{FieldLayout, TradeRecord};
pub use tokio_util::sync::CancellationToken;
