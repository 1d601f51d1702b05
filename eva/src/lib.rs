//! EVA - Extreme Value Analysis
//!
//! Fits Fréchet, Gumbel and Weibull distributions to ranked extremes by
//! linear regression on a probability plot, then reports the parameters and
//! lays out the plot.

mod render;
mod report;

pub use render::Renderer;
pub use report::FitReport;

pub use eva_core::{Axis, EvaError, Params, RegressionResult, Result};
pub use eva_dist::{Distribution, DistributionKind, Family};
pub use eva_stats::{Fit, Pipeline, PlotOptions, PlottingPosition, ProbabilityPlot, Sample};

/// Everything one run produces
///
/// The plot is laid out after the fit succeeded, so a layout failure leaves
/// the fit and its report intact.
#[derive(Debug)]
pub struct Analysis {
    pub fit: Fit<Box<dyn Distribution>>,
    pub report: FitReport,
    pub plot: Result<ProbabilityPlot>,
}

/// Main EVA engine
#[derive(Debug, Clone)]
pub struct Eva {
    kind: DistributionKind,
    loc: f64,
    pipeline: Pipeline,
    plot_options: PlotOptions,
}

impl Eva {
    pub fn new(kind: DistributionKind, loc: f64) -> Self {
        Self {
            kind,
            loc,
            pipeline: Pipeline::default(),
            plot_options: PlotOptions::default(),
        }
    }

    /// Engine for a distribution given by name, e.g. "gumbel-min"
    pub fn from_name(name: &str, loc: f64) -> Result<Self> {
        Ok(Self::new(name.parse()?, loc))
    }

    pub fn with_plotting_position(mut self, position: PlottingPosition) -> Self {
        self.pipeline = Pipeline::new(position);
        self
    }

    pub fn with_plot_options(mut self, options: PlotOptions) -> Self {
        self.plot_options = options;
        self
    }

    pub fn kind(&self) -> DistributionKind {
        self.kind
    }

    pub fn loc(&self) -> f64 {
        self.loc
    }

    pub fn plotting_position(&self) -> PlottingPosition {
        self.pipeline.position()
    }

    /// Fit a fresh distribution template to `sample`
    pub fn fit(&self, sample: &Sample) -> Result<Fit<Box<dyn Distribution>>> {
        self.pipeline.run(sample, self.kind.build(self.loc))
    }

    pub fn report(&self, fit: &Fit<Box<dyn Distribution>>) -> FitReport {
        FitReport::from_fit(fit, self.plotting_position())
    }

    pub fn plot(&self, fit: &Fit<Box<dyn Distribution>>) -> Result<ProbabilityPlot> {
        ProbabilityPlot::from_fit(fit, &self.plot_options)
    }

    /// Fit, report and plot in one go. Only a failed fit is an error.
    pub fn analyze(&self, sample: &Sample) -> Result<Analysis> {
        tracing::debug!(kind = self.kind.key(), loc = self.loc, "analyzing sample");
        let fit = self.fit(sample)?;
        let report = self.report(&fit);
        let plot = self.plot(&fit);
        if let Err(e) = &plot {
            tracing::warn!(error = %e, "plot layout failed");
        }
        Ok(Analysis { fit, report, plot })
    }
}

pub mod prelude {
    pub use crate::{Analysis, Eva, FitReport, Renderer};
    pub use eva_core::prelude::*;
    pub use eva_dist::prelude::*;
    pub use eva_stats::{Pipeline, PlotOptions, PlottingPosition, ProbabilityPlot, Sample};
}
