//! Mathematical utilities: angle grids and unit-circle points.

pub mod grid;

pub use grid::*;
