//! Fréchet Maximum and Minimum distributions (extreme value type II)
//!
//! Maximum: F(x) = exp(-((x - loc)/scale)^-shape) for x > loc, 0 otherwise.
//! Minimum: F(x) = 1 - exp(-((loc - x)/scale)^-shape) for x < loc, 1 otherwise.
//!
//! The shape enters with the opposite sign to Weibull, so the x-transform
//! is ln(x - loc) (ln(loc - x) for the Minimum) without negation and
//! Y = shape·X - shape·ln(scale): shape = slope, scale = exp(-intercept / slope).

use crate::probability::{max_reduced_variate, min_reduced_variate};
use crate::{Distribution, DistributionKind};
use eva_core::{Axis, EvaError, Params, Result, LOC, SCALE, SHAPE};

// ============ FrechetMax ============

/// Fréchet Maximum distribution (lower-bounded at `loc`, heavy upper tail)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrechetMax {
    loc: f64,
    scale: f64,
    shape: f64,
}

impl FrechetMax {
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

impl Distribution for FrechetMax {
    fn kind(&self) -> DistributionKind {
        DistributionKind::FrechetMax
    }

    fn loc(&self) -> f64 {
        self.loc
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.loc {
            return 0.0;
        }
        (-((x - self.loc) / self.scale).powf(-self.shape)).exp()
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
        Ok((x - self.loc).ln())
    }

    fn transform_y(&self, y: f64) -> Result<f64> {
        max_reduced_variate(self.name(), y)
    }

    fn set_params(&mut self, slope: f64, intercept: f64) {
        self.scale = (-intercept / slope).exp();
        self.shape = slope;
    }

    fn params(&self) -> Params {
        Params::new()
            .with(LOC, self.loc)
            .with(SCALE, self.scale)
            .with(SHAPE, self.shape)
    }
}

// ============ FrechetMin ============

/// Fréchet Minimum distribution (upper-bounded at `loc`, heavy lower tail)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrechetMin {
    loc: f64,
    scale: f64,
    shape: f64,
}

impl FrechetMin {
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

impl Distribution for FrechetMin {
    fn kind(&self) -> DistributionKind {
        DistributionKind::FrechetMin
    }

    fn loc(&self) -> f64 {
        self.loc
    }

    fn cdf(&self, x: f64) -> f64 {
        if x >= self.loc {
            return 1.0;
        }
        -(-((self.loc - x) / self.scale).powf(-self.shape)).exp_m1()
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
        Ok((self.loc - x).ln())
    }

    fn transform_y(&self, y: f64) -> Result<f64> {
        min_reduced_variate(self.name(), y)
    }

    fn set_params(&mut self, slope: f64, intercept: f64) {
        self.scale = (-intercept / slope).exp();
        self.shape = slope;
    }

    fn params(&self) -> Params {
        Params::new()
            .with(LOC, self.loc)
            .with(SCALE, self.scale)
            .with(SHAPE, self.shape)
    }
}
