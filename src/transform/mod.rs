//! Closed-form Z-transforms for the supported sequence families.
//!
//! - `expr`: the `Transform` value (evaluation, poles, printing)
//! - `builder`: sequence spec → (`Transform`, `Roc`)

pub mod builder;
pub mod expr;

pub use builder::{build, build_from_tag};
pub use expr::*;
