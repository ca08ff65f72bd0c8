//! CLI command implementations.

pub(crate) mod clock;
pub(crate) mod replay;
