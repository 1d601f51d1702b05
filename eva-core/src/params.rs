//! Distribution parameters and regression outputs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Parameter key for the location (supplied by the caller, never fit)
pub const LOC: &str = "loc";
/// Parameter key for the scale (derived from the fit)
pub const SCALE: &str = "scale";
/// Parameter key for the shape (derived from the fit)
pub const SHAPE: &str = "shape";
/// Parameter key for a fitted shift of the location (Gumbel only)
pub const OFFSET: &str = "offset";

/// Which probability-plot axis a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Maps the names of distribution parameters to their values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, f64>);

impl Params {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder: add or replace a parameter
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn loc(&self) -> Option<f64> {
        self.get(LOC)
    }

    pub fn scale(&self) -> Option<f64> {
        self.get(SCALE)
    }

    pub fn shape(&self) -> Option<f64> {
        self.get(SHAPE)
    }

    pub fn offset(&self) -> Option<f64> {
        self.get(OFFSET)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Result of a least-squares fit in transformed coordinates: y = intercept + slope · x
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient, used as goodness-of-fit
    pub rvalue: f64,
}

impl RegressionResult {
    /// True when every coefficient is a finite number
    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite() && self.rvalue.is_finite()
    }
}
