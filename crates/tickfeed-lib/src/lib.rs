//! Trade file feed reader.
//!
//! This is a facade crate that re-exports functionality from the tickfeed
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use tickfeed_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FeedConfig::new().with_simulation_time(10);
//!     let mut reader = FeedReader::with_config(
//!         |trade: TradeRecord| println!("{trade}"),
//!         "trades.csv",
//!         config,
//!     );
//!
//!     let summary = reader.run()?.wait().await?;
//!     println!("Delivered {} trades", summary.records);
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickfeed/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use tickfeed_types::*;

// Re-export the reader
#[cfg(feature = "reader")]
pub use tickfeed_reader::{
    CancellationToken, FeedConfig, FeedEnd, FeedError, FeedHandle, FeedReader, FeedSummary,
    ReaderState, TradeSink, parse_line, read_all, trade_stream,
};

/// Prelude module for convenient imports.
///
/// ```
/// use tickfeed_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tickfeed_types::{
        FieldLayout, TradeRecord, format_clock_text, format_decimal, format_quantity,
        parse_clock_text,
    };

    #[cfg(feature = "reader")]
    pub use tickfeed_reader::{
        FeedConfig, FeedEnd, FeedError, FeedHandle, FeedReader, FeedSummary, ReaderState,
        TradeSink, trade_stream,
    };
}
