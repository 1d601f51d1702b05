//! Weibull Maximum and Minimum distributions
//!
//! Maximum: F(x) = exp(-((loc - x)/scale)^shape) for x ≤ loc, 1 above.
//! Minimum: F(x) = 1 - exp(-((x - loc)/scale)^shape) for x ≥ loc, 0 below.
//!
//! Both linearize as Y = shape·X + shape·ln(scale), so
//! shape = slope and scale = exp(intercept / slope).

use crate::probability::{max_reduced_variate, min_reduced_variate};
use crate::{Distribution, DistributionKind};
use eva_core::{Axis, EvaError, Params, Result, LOC, SCALE, SHAPE};

// ============ WeibullMax ============

/// Weibull Maximum distribution (upper-bounded at `loc`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeibullMax {
    loc: f64,
    scale: f64,
    shape: f64,
}

impl WeibullMax {
    pub fn new(loc: f64, scale: f64, shape: f64) -> Self {
        Self { loc, scale, shape }
    }

    /// Template for a fit: location fixed, unit scale and shape until `set_params`
    pub fn with_loc(loc: f64) -> Self {
        Self::new(loc, 1.0, 1.0)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }
}

impl Distribution for WeibullMax {
    fn kind(&self) -> DistributionKind {
        DistributionKind::WeibullMax
    }

    fn loc(&self) -> f64 {
        self.loc
    }

    fn cdf(&self, x: f64) -> f64 {
        if x > self.loc {
            return 1.0;
        }
        (-((self.loc - x) / self.scale).powf(self.shape)).exp()
    }

    fn transform_x(&self, x: f64) -> Result<f64> {
        if x.is_nan() || x >= self.loc {
            return Err(EvaError::domain(
                self.name(),
                Axis::X,
                x,
                "values must be less than the location parameter",
            ));
        }
        Ok(-(self.loc - x).ln())
    }

    fn transform_y(&self, y: f64) -> Result<f64> {
        max_reduced_variate(self.name(), y)
    }

    fn set_params(&mut self, slope: f64, intercept: f64) {
        self.scale = (intercept / slope).exp();
        self.shape = slope;
    }

    fn params(&self) -> Params {
        Params::new()
            .with(LOC, self.loc)
            .with(SCALE, self.scale)
            .with(SHAPE, self.shape)
    }
}

// ============ WeibullMin ============

/// Weibull Minimum distribution (lower-bounded at `loc`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeibullMin {
    loc: f64,
    scale: f64,
    shape: f64,
}

impl WeibullMin {
    pub fn new(loc: f64, scale: f64, shape: f64) -> Self {
        Self { loc, scale, shape }
    }

    pub fn with_loc(loc: f64) -> Self {
        Self::new(loc, 1.0, 1.0)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }
}

impl Distribution for WeibullMin {
    fn kind(&self) -> DistributionKind {
        DistributionKind::WeibullMin
    }

    fn loc(&self) -> f64 {
        self.loc
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < self.loc {
            return 0.0;
        }
        -(-((x - self.loc) / self.scale).powf(self.shape)).exp_m1()
    }

    fn transform_x(&self, x: f64) -> Result<f64> {
        if x.is_nan() || x <= self.loc {
            return Err(EvaError::domain(
                self.name(),
                Axis::X,
                x,
                "values must be greater than the location parameter",
            ));
        }
        Ok(-(x - self.loc).ln())
    }

    fn transform_y(&self, y: f64) -> Result<f64> {
        min_reduced_variate(self.name(), y)
    }

    fn set_params(&mut self, slope: f64, intercept: f64) {
        self.scale = (intercept / slope).exp();
        self.shape = slope;
    }

    fn params(&self) -> Params {
        Params::new()
            .with(LOC, self.loc)
            .with(SCALE, self.scale)
            .with(SHAPE, self.shape)
    }
}
