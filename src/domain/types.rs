//! Shared domain types.
//!
//! These types are intentionally kept small and immutable: a section of a run
//! is fully described by a `SequenceSpec` plus a handful of plot options.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// Supported causal sequence families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SequenceKind {
    /// `a^n u[n]`
    Exponential,
    /// `a1^n u[n] + a2^n u[n]`
    #[value(name = "sum_exponential")]
    SumExponential,
    /// `sin(w n) u[n]`
    Sinusoidal,
}

impl SequenceKind {
    pub const ALL: [SequenceKind; 3] = [
        SequenceKind::Exponential,
        SequenceKind::SumExponential,
        SequenceKind::Sinusoidal,
    ];

    /// Tag used on the command line and in exports.
    pub fn as_str(self) -> &'static str {
        match self {
            SequenceKind::Exponential => "exponential",
            SequenceKind::SumExponential => "sum_exponential",
            SequenceKind::Sinusoidal => "sinusoidal",
        }
    }

    /// Number of real parameters the family takes.
    pub fn param_count(self) -> usize {
        match self {
            SequenceKind::Exponential | SequenceKind::Sinusoidal => 1,
            SequenceKind::SumExponential => 2,
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SequenceKind {
    type Err = TransformError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        SequenceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| TransformError::UnsupportedSequence {
                tag: tag.to_string(),
            })
    }
}

/// A sequence family together with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSpec {
    kind: SequenceKind,
    params: Vec<f64>,
    label: Option<String>,
}

impl SequenceSpec {
    /// Build a spec, checking the parameter count for the family.
    pub fn new(kind: SequenceKind, params: Vec<f64>) -> Result<Self, TransformError> {
        if params.len() != kind.param_count() {
            return Err(TransformError::ParameterCount {
                kind: kind.as_str(),
                expected: kind.param_count(),
                got: params.len(),
            });
        }
        Ok(Self {
            kind,
            params,
            label: None,
        })
    }

    /// Build a spec from a textual tag (`"exponential"`, ...).
    pub fn from_tag(tag: &str, params: &[f64]) -> Result<Self, TransformError> {
        let kind = tag.parse::<SequenceKind>()?;
        Self::new(kind, params.to_vec())
    }

    pub fn exponential(a: f64) -> Self {
        Self {
            kind: SequenceKind::Exponential,
            params: vec![a],
            label: None,
        }
    }

    pub fn sum_exponential(a1: f64, a2: f64) -> Self {
        Self {
            kind: SequenceKind::SumExponential,
            params: vec![a1, a2],
            label: None,
        }
    }

    pub fn sinusoidal(w: f64) -> Self {
        Self {
            kind: SequenceKind::Sinusoidal,
            params: vec![w],
            label: None,
        }
    }

    /// Attach a display label (e.g. `e^(-0.2n)*u[n]`).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Human-readable description of the time-domain sequence.
    pub fn describe(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        match self.kind {
            SequenceKind::Exponential => format!("{}^n u[n]", fmt_base(self.params[0])),
            SequenceKind::SumExponential => format!(
                "{}^n*u[n] + {}^n*u[n]",
                fmt_base(self.params[0]),
                fmt_base(self.params[1])
            ),
            SequenceKind::Sinusoidal => format!("sin({}n)u[n]", fmt_num(self.params[0])),
        }
    }

    /// Time-domain sample `x[n]` (for `n >= 0`; the sequences are causal).
    pub fn term(&self, n: u32) -> f64 {
        match self.kind {
            SequenceKind::Exponential => pow_n(self.params[0], n),
            SequenceKind::SumExponential => pow_n(self.params[0], n) + pow_n(self.params[1], n),
            SequenceKind::Sinusoidal => (self.params[0] * n as f64).sin(),
        }
    }
}

/// `base^n`, exact repeated multiplication while `n` fits an `i32`.
fn pow_n(base: f64, n: u32) -> f64 {
    match i32::try_from(n) {
        Ok(k) => base.powi(k),
        Err(_) => base.powf(f64::from(n)),
    }
}

/// Region of convergence of a causal transform: the exterior of a circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum Roc {
    /// `|z| > r`
    Exterior { radius: f64 },
    /// `|z| > max(r1, r2)`, with the two radii kept in argument order.
    ExteriorOfMax { r1: f64, r2: f64 },
}

impl Roc {
    /// Radius of the boundary circle.
    pub fn radius(&self) -> f64 {
        match *self {
            Roc::Exterior { radius } => radius,
            Roc::ExteriorOfMax { r1, r2 } => r1.max(r2),
        }
    }
}

impl fmt::Display for Roc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Roc::Exterior { radius } => write!(f, "|z| > {}", fmt_num(radius)),
            Roc::ExteriorOfMax { r1, r2 } => {
                write!(f, "|z| > max({}, {})", fmt_num(r1), fmt_num(r2))
            }
        }
    }
}

/// How the response sampler treats a point that lands on a pole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SingularPolicy {
    /// Drop the sample from the curves and record its angle.
    #[default]
    Skip,
    /// Evaluate just past the pole instead.
    Nudge,
    /// Stop with an error.
    Abort,
}

/// Which response curves to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponseToggles {
    pub show_magnitude: bool,
    pub show_phase: bool,
}

impl ResponseToggles {
    pub const NONE: ResponseToggles = ResponseToggles {
        show_magnitude: false,
        show_phase: false,
    };

    pub const BOTH: ResponseToggles = ResponseToggles {
        show_magnitude: true,
        show_phase: true,
    };

    pub fn any(self) -> bool {
        self.show_magnitude || self.show_phase
    }
}

/// One driver section: what to transform and which response curves to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub spec: SequenceSpec,
    pub toggles: ResponseToggles,
}

/// Where figures go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotTarget {
    /// Do not render figures.
    Off,
    /// ASCII plots on stdout.
    Terminal { width: usize, height: usize },
    /// SVG files in a directory.
    Svg { dir: PathBuf },
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus `.env`/environment fallbacks).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub plot: PlotTarget,
    pub singular: SingularPolicy,
    pub export_json: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
}

/// Format a real number the way it appears in transform and ROC text.
///
/// Integral values print without a fractional part (`3`, not `3.0`); everything
/// else uses the shortest representation that parses back to the same `f64`.
/// Negative zero prints as `0`.
pub(crate) fn fmt_num(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}

fn fmt_base(x: f64) -> String {
    if x < 0.0 {
        format!("({})", fmt_num(x))
    } else {
        fmt_num(x)
    }
}
