//! Trade record consumers.

use tickfeed_types::TradeRecord;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// Receives trade records from a running feed.
///
/// `accept` is called on the reader task, once per parsed line, in file
/// order. The next line is not read until it returns, so a slow sink slows
/// the feed down.
pub trait TradeSink: Send + 'static {
    /// Takes ownership of one trade record.
    fn accept(&mut self, trade: TradeRecord);
}

impl<F> TradeSink for F
where
    F: FnMut(TradeRecord) + Send + 'static,
{
    fn accept(&mut self, trade: TradeRecord) {
        self(trade);
    }
}

impl TradeSink for UnboundedSender<TradeRecord> {
    fn accept(&mut self, trade: TradeRecord) {
        if let Err(err) = self.send(trade) {
            debug!(symbol = %err.0.symbol(), "Trade receiver dropped, discarding record");
        }
    }
}
