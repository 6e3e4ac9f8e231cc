//! Sequence → (transform, ROC) mapping.
//!
//! Standard pairs for causal sequences:
//!
//! - `a^n u[n]`                ↔ `z/(z - a)`,                          `|z| > |a|`
//! - `a1^n u[n] + a2^n u[n]`   ↔ `z/(z - a1) + z/(z - a2)`,            `|z| > max(|a1|, |a2|)`
//! - `sin(w n) u[n]`           ↔ `z sin(w) / (z^2 - 2 z cos(w) + 1)`,  `|z| > 1`
//!
//! Equal poles in the sum are not merged into a double pole.

use num_complex::Complex64;
use tracing::debug;

use crate::domain::{Roc, SequenceKind, SequenceSpec};
use crate::error::TransformError;
use crate::transform::Transform;

/// Build the closed-form transform and its ROC for a validated spec.
pub fn build(spec: &SequenceSpec) -> (Transform, Roc) {
    let p = spec.params();
    let out = match spec.kind() {
        SequenceKind::Exponential => exponential(p[0]),
        SequenceKind::SumExponential => sum_exponential(p[0], p[1]),
        SequenceKind::Sinusoidal => sinusoidal(p[0]),
    };
    debug!(kind = %spec.kind(), transform = %out.0, roc = %out.1, "built transform");
    out
}

/// Build from a textual tag; unknown tags and wrong parameter counts are errors.
pub fn build_from_tag(tag: &str, params: &[f64]) -> Result<(Transform, Roc), TransformError> {
    let spec = SequenceSpec::from_tag(tag, params)?;
    Ok(build(&spec))
}

pub fn exponential(a: f64) -> (Transform, Roc) {
    (
        Transform::SinglePole { a: Complex64::new(a, 0.0) },
        Roc::Exterior { radius: a.abs() },
    )
}

pub fn sum_exponential(a1: f64, a2: f64) -> (Transform, Roc) {
    (
        Transform::PoleSum {
            a1: Complex64::new(a1, 0.0),
            a2: Complex64::new(a2, 0.0),
        },
        Roc::ExteriorOfMax {
            r1: a1.abs(),
            r2: a2.abs(),
        },
    )
}

pub fn sinusoidal(w: f64) -> (Transform, Roc) {
    (Transform::Sinusoid { w }, Roc::Exterior { radius: 1.0 })
}

/// `z/(z - a)` for a complex pole `a`; the ROC radius is `|a|`.
///
/// Library-only: `SequenceSpec` parameters and the `zt` CLI are real-valued.
pub fn complex_exponential(a: Complex64) -> (Transform, Roc) {
    (Transform::SinglePole { a }, Roc::Exterior { radius: a.norm() })
}
