//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the closed set of sequence families (`SequenceKind`) and their parameters (`SequenceSpec`)
//! - the structured region of convergence (`Roc`)
//! - plot/run options (`ResponseToggles`, `SingularPolicy`, `RunConfig`)

pub mod types;

pub use types::*;
