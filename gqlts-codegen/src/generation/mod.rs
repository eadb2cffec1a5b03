//! Code generation output bookkeeping.
//!
//! - [`ImportCollector`] - Import tracking and deduplication

mod imports;

pub use imports::ImportCollector;
