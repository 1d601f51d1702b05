//! Structured errors for fitting
//!
//! Every failure of a fit is a value. Nothing in the core panics on bad
//! input; callers decide whether to abort or report.

use crate::Axis;
use serde::Serialize;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const DOMAIN_VIOLATION: &str = "DOMAIN_VIOLATION";
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
    pub const UNRECOGNIZED_SELECTOR: &str = "UNRECOGNIZED_SELECTOR";
    pub const UNKNOWN_DISTRIBUTION: &str = "UNKNOWN_DISTRIBUTION";
    pub const INVALID_SAMPLE: &str = "INVALID_SAMPLE";
    pub const DEGENERATE_AXIS: &str = "DEGENERATE_AXIS";
}

/// Error type for distribution transforms, fitting and plot scaling
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum EvaError {
    /// A transform was evaluated outside its valid input range.
    #[error("Domain violation: {distribution} {axis}-transform at {value}: {reason}")]
    DomainViolation {
        distribution: &'static str,
        axis: Axis,
        value: f64,
        reason: &'static str,
    },

    #[error("Dimension mismatch: {left} x values vs {right} y values")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Insufficient data: need at least {required} points, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("Unrecognized plotting position: '{0}'")]
    UnrecognizedSelector(String),

    #[error("Unknown distribution: '{name}'")]
    UnknownDistribution { name: String, suggestions: Vec<String> },

    #[error("Invalid sample: {0}")]
    InvalidSample(String),

    #[error("Degenerate {axis} axis: transformed min and max are both {value}")]
    DegenerateAxis { axis: Axis, value: f64 },
}

impl EvaError {
    pub fn domain(distribution: &'static str, axis: Axis, value: f64, reason: &'static str) -> Self {
        Self::DomainViolation { distribution, axis, value, reason }
    }

    pub fn invalid_sample(details: impl Into<String>) -> Self {
        Self::InvalidSample(details.into())
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::DomainViolation { .. } => codes::DOMAIN_VIOLATION,
            Self::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            Self::InsufficientData { .. } => codes::INSUFFICIENT_DATA,
            Self::UnrecognizedSelector(_) => codes::UNRECOGNIZED_SELECTOR,
            Self::UnknownDistribution { .. } => codes::UNKNOWN_DISTRIBUTION,
            Self::InvalidSample(_) => codes::INVALID_SAMPLE,
            Self::DegenerateAxis { .. } => codes::DEGENERATE_AXIS,
        }
    }

    /// Suggestion for fixing the error, when one is known
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::DomainViolation { axis: Axis::X, .. } => {
                Some("Check the location parameter against the sample range".to_string())
            }
            Self::DomainViolation { axis: Axis::Y, .. } => {
                Some("Probabilities must lie strictly between 0 and 1".to_string())
            }
            Self::InsufficientData { .. } => Some("Supply at least two observations".to_string()),
            Self::UnrecognizedSelector(_) => {
                Some("Use one of: weibull, blom, gringorten, hazen".to_string())
            }
            Self::UnknownDistribution { suggestions, .. } if !suggestions.is_empty() => {
                Some(format!("Similar: {}", suggestions.join(", ")))
            }
            Self::UnknownDistribution { .. } => {
                Some("Use weibull, gumbel or frechet with a max/min variant".to_string())
            }
            _ => None,
        }
    }
}
