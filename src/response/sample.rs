//! Sampling a transform on the unit circle.
//!
//! Samples are taken at evenly spaced angles `θ ∈ [0, 2π]` at `z = e^{iθ}`.
//! A sample is singular when `z` lands on a pole (some denominator has modulus
//! `<= SINGULAR_EPS`) or the value is not finite; `SingularPolicy` decides
//! what happens next.

use std::f64::consts::TAU;

use num_complex::Complex64;
use tracing::{debug, warn};

use crate::domain::SingularPolicy;
use crate::error::TransformError;
use crate::math::{full_turn, unit_circle_point};
use crate::transform::Transform;

/// Angular resolution of the frequency response.
pub const RESPONSE_POINTS: usize = 500;

/// Angle offset used by `SingularPolicy::Nudge`.
pub const NUDGE_RAD: f64 = 1e-6;

/// Transform values on the unit circle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampledResponse {
    /// Angles of the kept samples (after any nudge).
    pub theta: Vec<f64>,
    pub values: Vec<Complex64>,
    /// Grid angles that landed on a pole.
    pub singular: Vec<f64>,
}

impl SampledResponse {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Elementwise modulus.
    pub fn magnitude(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.norm()).collect()
    }

    /// Elementwise principal argument.
    pub fn phase(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.arg()).collect()
    }
}

/// Sample `transform` on the standard `RESPONSE_POINTS` grid.
pub fn sample_response(transform: &Transform, policy: SingularPolicy) -> Result<SampledResponse, TransformError> {
    sample_at(transform, &full_turn(RESPONSE_POINTS), policy)
}

/// Sample `transform` at the given angles.
pub fn sample_at(
    transform: &Transform,
    thetas: &[f64],
    policy: SingularPolicy,
) -> Result<SampledResponse, TransformError> {
    let mut out = SampledResponse {
        theta: Vec::with_capacity(thetas.len()),
        values: Vec::with_capacity(thetas.len()),
        singular: Vec::new(),
    };

    for &theta in thetas {
        if let Some(v) = transform.try_eval(unit_circle_point(theta)) {
            out.theta.push(theta);
            out.values.push(v);
            continue;
        }

        out.singular.push(theta);
        match policy {
            SingularPolicy::Abort => return Err(TransformError::SingularSample { theta }),
            SingularPolicy::Skip => {
                warn!(theta, %transform, "skipping singular sample");
            }
            SingularPolicy::Nudge => {
                // Stay inside [0, 2π].
                let nudged = if theta + NUDGE_RAD > TAU {
                    theta - NUDGE_RAD
                } else {
                    theta + NUDGE_RAD
                };
                match transform.try_eval(unit_circle_point(nudged)) {
                    Some(v) => {
                        debug!(theta, nudged, "nudged singular sample");
                        out.theta.push(nudged);
                        out.values.push(v);
                    }
                    None => warn!(theta, %transform, "singular sample still singular after nudge; skipping"),
                }
            }
        }
    }

    debug!(
        kept = out.values.len(),
        singular = out.singular.len(),
        "sampled response"
    );
    Ok(out)
}
