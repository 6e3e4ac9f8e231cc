//! Input/output helpers.
//!
//! - JSON run report read/write (`report`)
//! - sampled response CSV export (`export`)

pub mod export;
pub mod report;

pub use export::*;
pub use report::*;
