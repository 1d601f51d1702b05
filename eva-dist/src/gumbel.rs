//! Gumbel Maximum and Minimum distributions (extreme value type I)
//!
//! Maximum: F(x) = exp(-exp(-(x - μ)/scale))
//! Minimum: F(x) = 1 - exp(-exp((x - μ)/scale))
//!
//! The x-transform is affine (x - loc, mirrored for the Minimum), so the
//! reduced variate is X/scale + (loc - μ)/scale and scale = 1/slope. Gumbel
//! has no shape parameter. `loc` belongs to the caller and is never fit;
//! the intercept instead yields a fitted `offset`, μ = loc + offset, which
//! the CDF uses.

use crate::probability::{max_reduced_variate, min_reduced_variate};
use crate::{Distribution, DistributionKind};
use eva_core::{Axis, EvaError, Params, Result, LOC, OFFSET, SCALE};

fn check_number(name: &'static str, x: f64) -> Result<()> {
    if x.is_nan() {
        return Err(EvaError::domain(name, Axis::X, x, "value must be a number"));
    }
    Ok(())
}

// ============ GumbelMax ============

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GumbelMax {
    loc: f64,
    scale: f64,
    offset: f64,
}

impl GumbelMax {
    pub fn new(loc: f64, scale: f64) -> Self {
        Self { loc, scale, offset: 0.0 }
    }

    pub fn with_loc(loc: f64) -> Self {
        Self::new(loc, 1.0)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Fitted shift of the mode away from `loc`
    pub fn offset(&self) -> f64 {
        self.offset
    }

    fn mode(&self) -> f64 {
        self.loc + self.offset
    }
}

impl Distribution for GumbelMax {
    fn kind(&self) -> DistributionKind {
        DistributionKind::GumbelMax
    }

    fn loc(&self) -> f64 {
        self.loc
    }

    fn cdf(&self, x: f64) -> f64 {
        (-(-(x - self.mode()) / self.scale).exp()).exp()
    }

    fn transform_x(&self, x: f64) -> Result<f64> {
        check_number(self.name(), x)?;
        Ok(x - self.loc)
    }

    fn transform_y(&self, y: f64) -> Result<f64> {
        max_reduced_variate(self.name(), y)
    }

    // Y = X/scale - offset/scale
    fn set_params(&mut self, slope: f64, intercept: f64) {
        self.scale = 1.0 / slope;
        self.offset = -intercept / slope;
        tracing::debug!(distribution = self.name(), offset = self.offset, "fitted location offset");
    }

    fn params(&self) -> Params {
        Params::new()
            .with(LOC, self.loc)
            .with(SCALE, self.scale)
            .with(OFFSET, self.offset)
    }
}

// ============ GumbelMin ============

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GumbelMin {
    loc: f64,
    scale: f64,
    offset: f64,
}

impl GumbelMin {
    pub fn new(loc: f64, scale: f64) -> Self {
        Self { loc, scale, offset: 0.0 }
    }

    pub fn with_loc(loc: f64) -> Self {
        Self::new(loc, 1.0)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    fn mode(&self) -> f64 {
        self.loc + self.offset
    }
}

impl Distribution for GumbelMin {
    fn kind(&self) -> DistributionKind {
        DistributionKind::GumbelMin
    }

    fn loc(&self) -> f64 {
        self.loc
    }

    fn cdf(&self, x: f64) -> f64 {
        -(-((x - self.mode()) / self.scale).exp()).exp_m1()
    }

    fn transform_x(&self, x: f64) -> Result<f64> {
        check_number(self.name(), x)?;
        Ok(self.loc - x)
    }

    fn transform_y(&self, y: f64) -> Result<f64> {
        min_reduced_variate(self.name(), y)
    }

    // Y = X/scale + offset/scale
    fn set_params(&mut self, slope: f64, intercept: f64) {
        self.scale = 1.0 / slope;
        self.offset = intercept / slope;
        tracing::debug!(distribution = self.name(), offset = self.offset, "fitted location offset");
    }

    fn params(&self) -> Params {
        Params::new()
            .with(LOC, self.loc)
            .with(SCALE, self.scale)
            .with(OFFSET, self.offset)
    }
}
