//! Frequency response: sampling on the unit circle and magnitude/phase figures.

pub mod render;
pub mod sample;

pub use render::*;
pub use sample::*;
