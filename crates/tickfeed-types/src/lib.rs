//! Core types for the tickfeed trade file reader.
//!
//! This crate provides the fundamental data structures used throughout tickfeed:
//!
//! - [`TradeRecord`] - A single parsed trade with symbol, time, price, and size
//! - [`parse_clock_text`] / [`format_clock_text`] - Clock text conversion
//! - [`FieldLayout`] - Delimiter and column positions of a feed file
//! - [`format_decimal`] / [`format_quantity`] - Numeric display helpers

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickfeed/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod clock;
mod error;
mod format;
mod layout;
mod record;

pub use clock::{MILLIS_PER_DAY, clock_components, format_clock_text, parse_clock_text};
pub use error::{ClockField, ClockFormatError, LayoutError};
pub use format::{format_decimal, format_quantity};
pub use layout::FieldLayout;
pub use record::TradeRecord;
