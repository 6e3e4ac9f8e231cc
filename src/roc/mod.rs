//! Region of convergence: text parsing and boundary plotting.

pub mod circle;
pub mod parse;

pub use circle::*;
pub use parse::*;
