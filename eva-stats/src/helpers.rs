//! Helper functions for statistical operations
//!
//! Common utilities for validating inputs.

use eva_core::{EvaError, Result};

/// Require two equal-length sequences
pub fn require_paired(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(EvaError::DimensionMismatch { left: x.len(), right: y.len() });
    }
    Ok(())
}

/// Require minimum count
pub fn require_min_count(values: &[f64], min: usize) -> Result<()> {
    if values.len() < min {
        return Err(EvaError::InsufficientData { required: min, got: values.len() });
    }
    Ok(())
}

/// Arithmetic mean; NaN for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// `n` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = end;
            out
        }
    }
}
