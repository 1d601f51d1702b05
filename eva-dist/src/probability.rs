//! y-axis linearizations shared by the Maximum and Minimum variants

use eva_core::{Axis, EvaError, Result};

fn check_open_unit(name: &'static str, y: f64) -> Result<()> {
    if y.is_nan() {
        return Err(EvaError::domain(name, Axis::Y, y, "probability must be a number"));
    }
    if y <= 0.0 {
        return Err(EvaError::domain(name, Axis::Y, y, "probability must be greater than 0"));
    }
    if y >= 1.0 {
        return Err(EvaError::domain(name, Axis::Y, y, "probability must be less than 1"));
    }
    Ok(())
}

/// -ln(-ln(y)), the reduced variate of a Maximum-type CDF
pub(crate) fn max_reduced_variate(name: &'static str, y: f64) -> Result<f64> {
    check_open_unit(name, y)?;
    Ok(-(-y.ln()).ln())
}

/// -ln(-ln(1 - y)), the reduced variate of a Minimum-type CDF
pub(crate) fn min_reduced_variate(name: &'static str, y: f64) -> Result<f64> {
    check_open_unit(name, y)?;
    Ok(-(-(-y).ln_1p()).ln())
}
