//! Parameter estimation by probability-plot regression
//!
//! sample → plotting positions → (transform_x, transform_y) → least squares
//! → set_params. Any domain violation aborts the whole run; points are
//! never skipped.

use crate::position::PlottingPosition;
use crate::regression;
use crate::sample::Sample;
use eva_core::{RegressionResult, Result};
use eva_dist::Distribution;
use serde::Serialize;

/// One observation carried through the linearization
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitPoint {
    pub rank: usize,
    pub magnitude: f64,
    /// Empirical non-exceedance probability
    pub probability: f64,
    /// transform_x(magnitude)
    pub tx: f64,
    /// transform_y(probability)
    pub ty: f64,
}

/// A parameterized distribution together with the fit that produced it
#[derive(Debug, Clone)]
pub struct Fit<D> {
    pub distribution: D,
    pub regression: RegressionResult,
    pub points: Vec<FitPoint>,
}

impl<D: Distribution> Fit<D> {
    pub fn magnitudes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.magnitude).collect()
    }

    pub fn probabilities(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.probability).collect()
    }
}

/// Probability-plot parameter estimation with a fixed plotting position
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    position: PlottingPosition,
}

impl Pipeline {
    pub fn new(position: PlottingPosition) -> Self {
        Self { position }
    }

    pub fn position(&self) -> PlottingPosition {
        self.position
    }

    /// Empirical probability and both transformed coordinates of every observation
    pub fn linearize(&self, sample: &Sample, distribution: &dyn Distribution) -> Result<Vec<FitPoint>> {
        let n = sample.max_rank();
        sample
            .observations()
            .iter()
            .map(|obs| {
                let probability = self.position.estimate(obs.rank, n);
                Ok(FitPoint {
                    rank: obs.rank,
                    magnitude: obs.magnitude,
                    probability,
                    tx: distribution.transform_x(obs.magnitude)?,
                    ty: distribution.transform_y(probability)?,
                })
            })
            .collect()
    }

    /// Fit `distribution` to `sample`, mutating its scale/shape in place.
    pub fn fit_in_place(
        &self,
        sample: &Sample,
        distribution: &mut dyn Distribution,
    ) -> Result<(RegressionResult, Vec<FitPoint>)> {
        tracing::debug!(
            points = sample.len(),
            estimator = self.position.name(),
            distribution = distribution.name(),
            loc = distribution.loc(),
            "fitting probability plot"
        );

        let points = self.linearize(sample, distribution)?;
        let xs: Vec<f64> = points.iter().map(|p| p.tx).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.ty).collect();

        let regression = regression::fit(&xs, &ys)?;
        distribution.set_params(regression.slope, regression.intercept);

        let params = distribution.params();
        tracing::info!(
            distribution = distribution.name(),
            scale = params.scale(),
            shape = params.shape(),
            rvalue = regression.rvalue,
            "fit complete"
        );
        if !regression.is_finite() {
            tracing::warn!(?regression, "degenerate regression; parameters are not finite");
        }

        Ok((regression, points))
    }

    /// Fit a distribution template and hand it back parameterized.
    pub fn run<D: Distribution>(&self, sample: &Sample, mut distribution: D) -> Result<Fit<D>> {
        let (regression, points) = self.fit_in_place(sample, &mut distribution)?;
        Ok(Fit { distribution, regression, points })
    }
}
