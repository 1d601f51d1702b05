//! Command-line arguments

use clap::Parser;
use eva_dist::{DistributionKind, Family};
use eva_stats::{PlotOptions, PlottingPosition};
use std::path::PathBuf;

/// eva - fit extreme value distributions on a probability plot
#[derive(Debug, Parser)]
#[command(name = "eva")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input CSV of rank,magnitude rows
    #[arg(short, long, default_value = "data.csv", env = "EVA_DATA_FILE")]
    pub file: PathBuf,

    /// Write the plot here (.json for the layout, SVG otherwise)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Location parameter
    #[arg(
        short,
        long,
        default_value_t = 0.0,
        env = "EVA_LOC",
        allow_negative_numbers = true,
        value_parser = parse_finite
    )]
    pub loc: f64,

    /// Distribution family: weibull, gumbel or frechet
    #[arg(long, default_value = "weibull")]
    pub family: Family,

    /// Fit the Minimum variant instead of the Maximum
    #[arg(long)]
    pub min: bool,

    /// Plotting position: weibull, blom, gringorten or hazen
    #[arg(short, long, default_value = "hazen")]
    pub plotting_position: String,

    /// x-axis label
    #[arg(long, default_value = "x")]
    pub x_label: String,

    /// y-axis label
    #[arg(long, default_value = "P")]
    pub y_label: String,

    /// Plot width in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Plot height in pixels
    #[arg(long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn kind(&self) -> DistributionKind {
        DistributionKind::from_family(self.family, !self.min)
    }

    /// Unknown names fall back to weibull with a warning
    pub fn plotting_position(&self) -> PlottingPosition {
        PlottingPosition::resolve(&self.plotting_position)
    }

    pub fn plot_options(&self) -> PlotOptions {
        PlotOptions::default().with_labels(self.x_label.as_str(), self.y_label.as_str())
    }
}

fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{}' is not finite", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("eva").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.kind(), DistributionKind::WeibullMax);
        assert_eq!(args.plotting_position(), PlottingPosition::Hazen);
        assert_eq!((args.width, args.height), (600, 400));
        assert!(args.output.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_variant_selection() {
        let args = parse(&["--family", "gumbel", "--min"]).unwrap();
        assert_eq!(args.kind(), DistributionKind::GumbelMin);
        let args = parse(&["--family", "Frechet"]).unwrap();
        assert_eq!(args.kind(), DistributionKind::FrechetMax);
        assert!(parse(&["--family", "normal"]).is_err());
    }

    #[test]
    fn test_negative_loc() {
        let args = parse(&["-l", "-2.5"]).unwrap();
        assert_eq!(args.loc, -2.5);
        assert!(parse(&["--loc", "inf"]).is_err());
        assert!(parse(&["--loc", "abc"]).is_err());
    }

    #[test]
    fn test_size_must_be_positive() {
        assert!(parse(&["--width", "0"]).is_err());
        assert!(parse(&["--height", "-5"]).is_err());
        assert_eq!(parse(&["--width", "800"]).unwrap().width, 800);
    }

    #[test]
    fn test_unknown_position_falls_back() {
        let args = parse(&["-p", "nonexistent"]).unwrap();
        assert_eq!(args.plotting_position(), PlottingPosition::Weibull);
    }

    #[test]
    fn test_labels() {
        let args = parse(&["--x-label", "H (m)", "--y-label", "F"]).unwrap();
        let options = args.plot_options();
        assert_eq!(options.x_label, "H (m)");
        assert_eq!(options.y_label, "F");
    }
}
