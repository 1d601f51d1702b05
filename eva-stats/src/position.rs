//! Plotting positions: empirical non-exceedance probability of the i-th of n
//! ordered observations.

use eva_core::EvaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plotting position estimator signature: (rank, sample size) → probability
pub type Estimator = fn(usize, usize) -> f64;

/// Weibull's plotting position: i / (n + 1)
pub fn weibull(i: usize, n: usize) -> f64 {
    i as f64 / (n as f64 + 1.0)
}

/// Blom's plotting position: (i - 0.375) / (n + 0.25)
pub fn blom(i: usize, n: usize) -> f64 {
    (i as f64 - 0.375) / (n as f64 + 0.25)
}

/// Gringorten's plotting position: (i - 0.44) / (n + 0.12)
pub fn gringorten(i: usize, n: usize) -> f64 {
    (i as f64 - 0.44) / (n as f64 + 0.12)
}

/// Hazen's plotting position: (i - 0.5) / n
pub fn hazen(i: usize, n: usize) -> f64 {
    (i as f64 - 0.5) / n as f64
}

/// Named plotting position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlottingPosition {
    #[default]
    Weibull,
    Blom,
    Gringorten,
    Hazen,
}

static ESTIMATORS: [(&str, PlottingPosition, Estimator); 4] = [
    ("weibull", PlottingPosition::Weibull, weibull),
    ("blom", PlottingPosition::Blom, blom),
    ("gringorten", PlottingPosition::Gringorten, gringorten),
    ("hazen", PlottingPosition::Hazen, hazen),
];

impl PlottingPosition {
    pub const ALL: [PlottingPosition; 4] = [
        PlottingPosition::Weibull,
        PlottingPosition::Blom,
        PlottingPosition::Gringorten,
        PlottingPosition::Hazen,
    ];

    fn entry(self) -> &'static (&'static str, PlottingPosition, Estimator) {
        match self {
            PlottingPosition::Weibull => &ESTIMATORS[0],
            PlottingPosition::Blom => &ESTIMATORS[1],
            PlottingPosition::Gringorten => &ESTIMATORS[2],
            PlottingPosition::Hazen => &ESTIMATORS[3],
        }
    }

    pub fn name(self) -> &'static str {
        self.entry().0
    }

    pub fn estimator(self) -> Estimator {
        self.entry().2
    }

    /// Probability of the observation with 1-based `rank` among `n`
    pub fn estimate(self, rank: usize, n: usize) -> f64 {
        (self.estimator())(rank, n)
    }

    fn lookup(name: &str) -> Option<PlottingPosition> {
        let wanted = name.trim().to_lowercase();
        ESTIMATORS
            .iter()
            .find(|(key, _, _)| *key == wanted)
            .map(|(_, pos, _)| *pos)
    }

    /// Resolve a name, falling back to Weibull for anything unrecognized.
    pub fn resolve(name: &str) -> PlottingPosition {
        match Self::lookup(name) {
            Some(pos) => pos,
            None => {
                tracing::warn!(name, fallback = "weibull", "unrecognized plotting position");
                PlottingPosition::Weibull
            }
        }
    }
}

impl fmt::Display for PlottingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strict parse; use [`PlottingPosition::resolve`] for the lenient fallback.
impl FromStr for PlottingPosition {
    type Err = EvaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| EvaError::UnrecognizedSelector(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weibull_literal() {
        assert!((weibull(1, 9) - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_hazen_literal() {
        assert_eq!(hazen(1, 2), 0.25);
    }

    #[test]
    fn test_blom_literal() {
        // (5 - 0.375) / 9.25 = 0.5
        assert!((blom(5, 9) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_gringorten_literal() {
        // (1 - 0.44) / 1.12 = 0.5
        assert!((gringorten(1, 1) - 0.5).abs() < 1e-15);
        assert!((gringorten(3, 10) - 2.56 / 10.12).abs() < 1e-15);
    }

    #[test]
    fn test_estimate_dispatches_by_name() {
        assert_eq!(PlottingPosition::Hazen.estimate(1, 2), hazen(1, 2));
        assert_eq!(PlottingPosition::Blom.estimate(5, 9), blom(5, 9));
        assert_eq!(PlottingPosition::Gringorten.estimate(2, 7), gringorten(2, 7));
        assert_eq!(PlottingPosition::Weibull.estimate(3, 4), weibull(3, 4));
    }

    #[test]
    fn test_resolve_known_names() {
        for pos in PlottingPosition::ALL {
            assert_eq!(PlottingPosition::resolve(pos.name()), pos);
        }
        assert_eq!(PlottingPosition::resolve("Hazen"), PlottingPosition::Hazen);
        assert_eq!(PlottingPosition::resolve(" blom "), PlottingPosition::Blom);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_weibull() {
        let unknown = PlottingPosition::resolve("nonexistent");
        assert_eq!(unknown, PlottingPosition::Weibull);
        for (i, n) in [(1, 9), (4, 5), (10, 10)] {
            assert_eq!(unknown.estimate(i, n), PlottingPosition::resolve("weibull").estimate(i, n));
        }
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("gringorten".parse::<PlottingPosition>().unwrap(), PlottingPosition::Gringorten);
        assert_eq!(
            "nonexistent".parse::<PlottingPosition>(),
            Err(EvaError::UnrecognizedSelector("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_default_is_weibull() {
        assert_eq!(PlottingPosition::default(), PlottingPosition::Weibull);
    }
}
