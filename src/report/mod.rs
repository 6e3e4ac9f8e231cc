//! Reporting utilities: per-section text blocks and summaries.

pub mod format;

pub use format::*;
