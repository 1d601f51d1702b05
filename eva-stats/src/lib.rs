//! EVA Statistics
//!
//! Probability-plot parameter estimation: plotting positions, ordinary least
//! squares in transformed coordinates, nonlinear axis scaling and the plot
//! layout. All functions return `EvaError` on failure and never panic on
//! bad input.

mod helpers;
mod pipeline;
mod plot;
mod position;
mod regression;
mod sample;
mod scale;

pub use pipeline::{Fit, FitPoint, Pipeline};
pub use plot::{constant_ticks, AxisLayout, PlotOptions, PlotPoint, ProbabilityPlot, Tick};
pub use position::{blom, gringorten, hazen, weibull, Estimator, PlottingPosition};
pub use regression::fit as linear_fit;
pub use sample::{Observation, Sample};
pub use scale::AxisScale;
