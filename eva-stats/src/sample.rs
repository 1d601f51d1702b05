//! Ranked samples

use eva_core::{EvaError, Result};
use serde::{Deserialize, Serialize};

/// One ranked measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// 1-based order statistic index
    pub rank: usize,
    pub magnitude: f64,
}

/// Observations ordered by rank, ranks forming exactly 1..=n.
///
/// Ranks follow ascending magnitude: the largest magnitude carries rank n.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    observations: Vec<Observation>,
}

impl Sample {
    /// Rank raw magnitudes by sorting them ascending.
    pub fn from_magnitudes(values: &[f64]) -> Result<Self> {
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(EvaError::invalid_sample(format!("non-finite magnitude {}", bad)));
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let observations = sorted
            .into_iter()
            .enumerate()
            .map(|(i, magnitude)| Observation { rank: i + 1, magnitude })
            .collect();
        Ok(Self { observations })
    }

    /// Accept explicitly ranked pairs in any order.
    ///
    /// Fails unless the ranks are a permutation of 1..=n and every magnitude is finite.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, f64)>) -> Result<Self> {
        let mut observations: Vec<Observation> = pairs
            .into_iter()
            .map(|(rank, magnitude)| Observation { rank, magnitude })
            .collect();
        observations.sort_by_key(|o| o.rank);

        for (i, obs) in observations.iter().enumerate() {
            if obs.rank != i + 1 {
                return Err(EvaError::invalid_sample(format!(
                    "ranks must be contiguous from 1: expected {}, found {}",
                    i + 1,
                    obs.rank
                )));
            }
            if !obs.magnitude.is_finite() {
                return Err(EvaError::invalid_sample(format!(
                    "non-finite magnitude {} at rank {}",
                    obs.magnitude, obs.rank
                )));
            }
        }

        Ok(Self { observations })
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Highest rank in the sample (the n of the plotting positions)
    pub fn max_rank(&self) -> usize {
        self.observations.iter().map(|o| o.rank).max().unwrap_or(0)
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn magnitudes(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.magnitude).collect()
    }
}
