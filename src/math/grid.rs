//! Angle grids and unit-circle points.

use std::f64::consts::TAU;

use num_complex::Complex64;

/// `n` evenly spaced values over `[start, end]`, both ends included.
///
/// `n = 1` yields `[start]`; `n = 0` yields an empty grid.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n as f64 - 1.0);
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// `n` evenly spaced angles over one full turn, `[0, 2π]`.
pub fn full_turn(n: usize) -> Vec<f64> {
    linspace(0.0, TAU, n)
}

/// The point `e^{iθ}`.
pub fn unit_circle_point(theta: f64) -> Complex64 {
    Complex64::from_polar(1.0, theta)
}
