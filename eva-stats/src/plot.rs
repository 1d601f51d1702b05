//! Probability plot layout
//!
//! Renderer-neutral description of a probability plot: axis limits, constant
//! ticks, the sample scatter and the fitted CDF curve. Every element carries
//! its fractional position on the distribution's nonlinear axes, so a
//! renderer only maps [0, 1] onto its canvas.

use crate::helpers::{linspace, require_min_count, require_paired};
use crate::pipeline::Fit;
use crate::scale::AxisScale;
use eva_core::{Axis, Result};
use eva_dist::{Distribution, DistributionKind};
use serde::Serialize;

/// Tick mark with its label and normalized position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
    pub position: f64,
}

/// Evenly spaced ticks from `min` to `max` labelled with `precision` decimals.
///
/// The first and last ticks are pinned to `min` and `max` exactly.
pub fn constant_ticks(n: usize, precision: usize, min: f64, max: f64) -> Vec<(f64, String)> {
    linspace(min, max, n)
        .into_iter()
        .map(|v| (v, format!("{:.*}", precision, v)))
        .collect()
}

fn axis_ticks(scale: &AxisScale, n: usize, precision: usize, min: f64, max: f64) -> Result<Vec<Tick>> {
    constant_ticks(n, precision, min, max)
        .into_iter()
        .map(|(value, label)| {
            Ok(Tick { value, label, position: scale.normalize(min, max, value)? })
        })
        .collect()
}

fn in_open_unit(p: f64) -> bool {
    p > 0.0 && p < 1.0
}

/// Point in data coordinates and in normalized axis coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub nx: f64,
    pub ny: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLayout {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<Tick>,
}

/// Layout options
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub x_label: String,
    pub y_label: String,
    /// Number of CDF samples along the curve
    pub curve_samples: usize,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub x_precision: usize,
    pub y_precision: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            x_label: "x".to_string(),
            y_label: "P".to_string(),
            curve_samples: 50,
            x_ticks: 7,
            y_ticks: 7,
            x_precision: 1,
            y_precision: 3,
        }
    }
}

impl PlotOptions {
    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }
}

/// Probability plot of a sample against a fitted distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityPlot {
    pub title: String,
    pub distribution: DistributionKind,
    pub x: AxisLayout,
    pub y: AxisLayout,
    pub points: Vec<PlotPoint>,
    pub curve: Vec<PlotPoint>,
}

impl ProbabilityPlot {
    pub fn from_fit<D: Distribution>(fit: &Fit<D>, options: &PlotOptions) -> Result<Self> {
        Self::build(&fit.distribution, &fit.magnitudes(), &fit.probabilities(), options)
    }

    /// Lay out sorted magnitudes `xs` with their empirical probabilities `pr`.
    pub fn build(dist: &dyn Distribution, xs: &[f64], pr: &[f64], options: &PlotOptions) -> Result<Self> {
        require_paired(xs, pr)?;
        require_min_count(xs, 2)?;
        let n = xs.len();

        let (curve_min, curve_max) = (xs[0], xs[n - 1]);
        let x_min = xs[0].min(curve_min);
        let x_max = xs[n - 1].max(curve_max);
        // saturated CDF values have no place on the y-axis
        let (cdf_min, cdf_max) = (dist.cdf(curve_min), dist.cdf(curve_max));
        let y_min = if in_open_unit(cdf_min) { pr[0].min(cdf_min) } else { pr[0] };
        let y_max = if in_open_unit(cdf_max) { pr[n - 1].max(cdf_max) } else { pr[n - 1] };

        let sx = AxisScale::new(dist, Axis::X);
        let sy = AxisScale::new(dist, Axis::Y);
        let place = |x: f64, y: f64| -> Result<PlotPoint> {
            Ok(PlotPoint {
                x,
                y,
                nx: sx.normalize(x_min, x_max, x)?,
                ny: sy.normalize(y_min, y_max, y)?,
            })
        };

        let points = xs
            .iter()
            .zip(pr)
            .map(|(&x, &y)| place(x, y))
            .collect::<Result<Vec<_>>>()?;

        let mut curve = Vec::with_capacity(options.curve_samples);
        for x in linspace(curve_min, curve_max, options.curve_samples) {
            let y = dist.cdf(x);
            if !in_open_unit(y) {
                tracing::debug!(x, y, "curve sample saturated; left out of the curve");
                continue;
            }
            curve.push(place(x, y)?);
        }

        Ok(Self {
            title: format!("{} Plot", dist.name()),
            distribution: dist.kind(),
            x: AxisLayout {
                label: options.x_label.clone(),
                min: x_min,
                max: x_max,
                ticks: axis_ticks(&sx, options.x_ticks, options.x_precision, x_min, x_max)?,
            },
            y: AxisLayout {
                label: options.y_label.clone(),
                min: y_min,
                max: y_max,
                ticks: axis_ticks(&sy, options.y_ticks, options.y_precision, y_min, y_max)?,
            },
            points,
            curve,
        })
    }
}
