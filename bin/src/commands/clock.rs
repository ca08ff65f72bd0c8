//! Clock command implementation.

use anyhow::{Result, bail};
use tickfeed_lib::prelude::*;

/// Print clock text conversions in both directions.
pub(crate) fn clock(texts: &[String], millis: &[u64]) -> Result<()> {
    if texts.is_empty() && millis.is_empty() {
        bail!("Nothing to convert. Pass clock text or --millis");
    }

    for text in texts {
        match parse_clock_text(text) {
            Ok(ms) => println!("{text} -> {ms} ({})", format_clock_text(ms)),
            Err(e) => bail!("{text}: {e}"),
        }
    }

    for &ms in millis {
        println!("{ms} -> {}", format_clock_text(ms));
    }

    Ok(())
}
