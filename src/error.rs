//! Error types.
//!
//! - `TransformError`: domain failures raised by the builder, the ROC parser and
//!   the response sampler. These are plain values so library callers can match on them.
//! - `AppError`: what the `zt` binary reports. It carries the process exit code.
//!
//! Exit codes:
//! - 2: invalid input (sequence kind, parameters, ROC text, files)
//! - 3: singular sample under the `abort` policy
//! - 4: rendering failures

use thiserror::Error;

/// Domain-level failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error(
        "unsupported sequence type '{tag}'; expected one of exponential, sum_exponential, sinusoidal"
    )]
    UnsupportedSequence { tag: String },

    #[error("sequence type '{kind}' takes {expected} parameter(s), got {got}")]
    ParameterCount {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("malformed ROC description '{text}': {reason}")]
    MalformedRoc { text: String, reason: String },

    #[error("singular sample at angle θ = {theta:.6} rad (pole on the unit circle)")]
    SingularSample { theta: f64 },
}

impl TransformError {
    pub(crate) fn malformed_roc(text: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRoc {
            text: text.to_string(),
            reason: reason.into(),
        }
    }

    /// Exit code used when this error ends a `zt` run.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnsupportedSequence { .. } | Self::ParameterCount { .. } | Self::MalformedRoc { .. } => 2,
            Self::SingularSample { .. } => 3,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<TransformError> for AppError {
    fn from(err: TransformError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
