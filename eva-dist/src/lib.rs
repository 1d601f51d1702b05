//! EVA Distributions
//!
//! Extreme value distributions together with the axis transforms that turn
//! their CDF into a straight line on a probability plot. There are six
//! implementations: Fréchet, Gumbel and Weibull, each in a Maximum and a
//! Minimum variant.
//!
//! For every variant `transform_y(cdf(x))` is an affine function of
//! `transform_x(x)`, so the slope and intercept of a least-squares line in
//! transformed space map back onto the distribution parameters through
//! `set_params`.

mod frechet;
mod gumbel;
mod probability;
mod registry;
mod weibull;

pub use frechet::{FrechetMax, FrechetMin};
pub use gumbel::{GumbelMax, GumbelMin};
pub use registry::{DistributionKind, Family};
pub use weibull::{WeibullMax, WeibullMin};

use eva_core::{Params, Result};
use std::fmt;

/// An extreme value distribution that can be fit on a probability plot.
///
/// Instances are owned by the caller and mutated in place by `set_params`.
/// Nothing here holds shared state, so separate instances may be fit from
/// separate threads.
pub trait Distribution: fmt::Debug + Send + Sync {
    /// Variant tag
    fn kind(&self) -> DistributionKind;

    /// Display name, e.g. "Weibull Maximum"
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Location parameter (fixed by the caller)
    fn loc(&self) -> f64;

    /// Cumulative distribution function at x
    fn cdf(&self, x: f64) -> f64;

    /// x-axis linearization. Fails with `DomainViolation` outside the support.
    fn transform_x(&self, x: f64) -> Result<f64>;

    /// y-axis linearization of a probability. Fails with `DomainViolation`
    /// unless `0 < y < 1`.
    fn transform_y(&self, y: f64) -> Result<f64>;

    /// Calculates and stores scale/shape from linear regression parameters.
    fn set_params(&mut self, slope: f64, intercept: f64);

    /// Current parameters by name
    fn params(&self) -> Params;
}

impl<D: Distribution + ?Sized> Distribution for Box<D> {
    fn kind(&self) -> DistributionKind {
        (**self).kind()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn loc(&self) -> f64 {
        (**self).loc()
    }

    fn cdf(&self, x: f64) -> f64 {
        (**self).cdf(x)
    }

    fn transform_x(&self, x: f64) -> Result<f64> {
        (**self).transform_x(x)
    }

    fn transform_y(&self, y: f64) -> Result<f64> {
        (**self).transform_y(y)
    }

    fn set_params(&mut self, slope: f64, intercept: f64) {
        (**self).set_params(slope, intercept)
    }

    fn params(&self) -> Params {
        (**self).params()
    }
}

/// Re-export core types for distribution users
pub mod prelude {
    pub use crate::{
        Distribution, DistributionKind, Family, FrechetMax, FrechetMin, GumbelMax, GumbelMin,
        WeibullMax, WeibullMin,
    };
    pub use eva_core::prelude::*;
}
