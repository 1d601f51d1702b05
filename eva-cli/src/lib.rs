//! EVA command line
//!
//! Reads a ranked sample, fits the selected distribution, prints the report
//! and optionally writes the probability plot.

mod cli;
mod data;
mod error;

pub use cli::Args;
pub use data::{read_sample, read_sample_file};
pub use error::{CliError, DataError};

use eva::{Distribution, Eva, Fit, Renderer};
use std::fs;
use std::io::Write;
use std::path::Path;

type FittedDistribution = Fit<Box<dyn Distribution>>;

/// Run one fit and write the report to `out`.
///
/// The report goes out as soon as the fit succeeds. The plot is laid out
/// only when an output path was given.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<FittedDistribution, CliError> {
    let sample = read_sample_file(&args.file)?;
    tracing::info!(file = %args.file.display(), points = sample.len(), "loaded sample");

    let eva = Eva::new(args.kind(), args.loc)
        .with_plotting_position(args.plotting_position())
        .with_plot_options(args.plot_options());
    let fit = eva.fit(&sample)?;

    let report = eva.report(&fit);
    let text = if args.json {
        report.to_json()? + "\n"
    } else {
        report.to_text()
    };
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| CliError::io("stdout", e))?;

    if let Some(path) = &args.output {
        write_plot(&eva, &fit, args, path)?;
        tracing::info!(output = %path.display(), "wrote plot");
    }

    Ok(fit)
}

fn write_plot(eva: &Eva, fit: &FittedDistribution, args: &Args, path: &Path) -> Result<(), CliError> {
    let plot = eva.plot(fit)?;
    let is_json = path
        .extension()
        .map_or(false, |e| e.eq_ignore_ascii_case("json"));
    let contents = if is_json {
        serde_json::to_string_pretty(&plot)?
    } else {
        Renderer::new(args.width, args.height).render(&plot)
    };
    fs::write(path, contents).map_err(|e| CliError::io(path, e))
}
