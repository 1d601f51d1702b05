//! Fit reports
//!
//! Plain-text summary with two-decimal values, or JSON.

use eva_core::{Params, RegressionResult};
use eva_dist::{Distribution, DistributionKind};
use eva_stats::{Fit, PlottingPosition};
use serde::Serialize;

/// Summary of one fit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitReport {
    pub distribution: DistributionKind,
    pub name: &'static str,
    pub plotting_position: PlottingPosition,
    pub points: usize,
    pub params: Params,
    pub regression: RegressionResult,
}

impl FitReport {
    pub fn from_fit<D: Distribution>(fit: &Fit<D>, plotting_position: PlottingPosition) -> Self {
        Self {
            distribution: fit.distribution.kind(),
            name: fit.distribution.name(),
            plotting_position,
            points: fit.points.len(),
            params: fit.distribution.params(),
            regression: fit.regression,
        }
    }

    /// Human-readable report, every value rounded to two decimals
    pub fn to_text(&self) -> String {
        let heading = format!("{} distribution parameters", self.name);
        let mut output = String::new();
        output.push_str(&heading);
        output.push('\n');
        output.push_str(&"=".repeat(heading.chars().count()));
        output.push('\n');

        let value = |v: Option<f64>| v.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string());
        output.push_str(&format!("Location = {}\n", value(self.params.loc())));
        if let Some(offset) = self.params.offset() {
            output.push_str(&format!("Offset   = {:.2}\n", offset));
        }
        output.push_str(&format!("Scale    = {}\n", value(self.params.scale())));
        if self.distribution.has_shape() {
            output.push_str(&format!("Shape    = {}\n", value(self.params.shape())));
        }
        output.push_str(&format!("R value  = {:.2}\n", self.regression.rvalue));
        output
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eva_core::{LOC, OFFSET, SCALE, SHAPE};

    fn report(kind: DistributionKind, params: Params) -> FitReport {
        FitReport {
            distribution: kind,
            name: kind.name(),
            plotting_position: PlottingPosition::Hazen,
            points: 10,
            params,
            regression: RegressionResult { slope: 2.0, intercept: 3.2189, rvalue: 0.98765 },
        }
    }

    #[test]
    fn test_text_report() {
        let r = report(
            DistributionKind::WeibullMax,
            Params::new().with(LOC, 0.0).with(SCALE, 4.99612).with(SHAPE, 2.004),
        );
        let expected = "Weibull Maximum distribution parameters\n\
                        =======================================\n\
                        Location = 0.00\n\
                        Scale    = 5.00\n\
                        Shape    = 2.00\n\
                        R value  = 0.99\n";
        assert_eq!(r.to_text(), expected);
    }

    #[test]
    fn test_text_report_without_shape() {
        let r = report(DistributionKind::GumbelMin, Params::new().with(LOC, 1.0).with(SCALE, 3.0));
        let text = r.to_text();
        assert!(text.starts_with("Gumbel Minimum distribution parameters\n"));
        assert!(!text.contains("Shape"));
        assert!(text.contains("Scale    = 3.00\n"));
        assert!(!text.contains("Offset"));
    }

    #[test]
    fn test_text_report_with_offset() {
        let r = report(
            DistributionKind::GumbelMax,
            Params::new().with(LOC, 0.0).with(SCALE, 5.0).with(OFFSET, 199.996),
        );
        let text = r.to_text();
        assert!(text.contains("Location = 0.00\nOffset   = 200.00\nScale    = 5.00\n"));
    }

    #[test]
    fn test_underline_counts_characters() {
        let r = report(DistributionKind::FrechetMax, Params::new().with(LOC, 0.0));
        let text = r.to_text();
        let lines: Vec<&str> = text.lines().take(2).collect();
        assert_eq!(lines[0].chars().count(), lines[1].len());
    }

    #[test]
    fn test_json_report() {
        let r = report(DistributionKind::WeibullMin, Params::new().with(LOC, 0.0).with(SCALE, 5.0));
        let json: serde_json::Value = serde_json::from_str(&r.to_json().unwrap()).unwrap();
        assert_eq!(json["distribution"], "weibull-min");
        assert_eq!(json["plotting_position"], "hazen");
        assert_eq!(json["params"]["scale"], 5.0);
        assert_eq!(json["regression"]["slope"], 2.0);
    }
}
