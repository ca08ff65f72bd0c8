//! Reader configuration.

use std::time::Duration;
use tickfeed_types::FieldLayout;

/// Configuration for a feed reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedConfig {
    /// Delimiter and column positions of the feed file.
    pub layout: FieldLayout,
    /// Delay between consecutive records. Zero reads as fast as the sink accepts.
    pub pacing: Duration,
}

impl FeedConfig {
    /// Creates a configuration with the default layout and no pacing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layout: FieldLayout::new(),
            pacing: Duration::ZERO,
        }
    }

    /// Sets the field layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: FieldLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the delay between consecutive records.
    #[must_use]
    pub const fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Sets the replay delay in milliseconds between consecutive records.
    #[must_use]
    pub const fn with_simulation_time(self, millis: u64) -> Self {
        self.with_pacing(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FeedConfig::default();
        assert_eq!(config, FeedConfig::new());
        assert!(config.pacing.is_zero());
        assert_eq!(config.layout, FieldLayout::default());
    }

    #[test]
    fn test_simulation_time() {
        let config = FeedConfig::new().with_simulation_time(250);
        assert_eq!(config.pacing, Duration::from_millis(250));
    }
}
