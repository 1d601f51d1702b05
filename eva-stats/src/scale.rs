//! Nonlinear probability-plot axes

use eva_core::{Axis, EvaError, Result};
use eva_dist::Distribution;

/// Places values on an axis scaled by one of a distribution's transforms.
#[derive(Debug, Clone, Copy)]
pub struct AxisScale<'a> {
    dist: &'a dyn Distribution,
    axis: Axis,
}

impl<'a> AxisScale<'a> {
    pub fn new(dist: &'a dyn Distribution, axis: Axis) -> Self {
        Self { dist, axis }
    }

    /// x-axis scale (`transform_x`)
    pub fn x(dist: &'a dyn Distribution) -> Self {
        Self::new(dist, Axis::X)
    }

    /// y-axis scale (`transform_y`)
    pub fn y(dist: &'a dyn Distribution) -> Self {
        Self::new(dist, Axis::Y)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn transform(&self, v: f64) -> Result<f64> {
        match self.axis {
            Axis::X => self.dist.transform_x(v),
            Axis::Y => self.dist.transform_y(v),
        }
    }

    /// Fractional transformed distance of `v` between `min` and `max`.
    pub fn normalize(&self, min: f64, max: f64, v: f64) -> Result<f64> {
        let t_min = self.transform(min)?;
        let t_max = self.transform(max)?;
        if t_max == t_min {
            return Err(EvaError::DegenerateAxis { axis: self.axis, value: t_min });
        }
        Ok((self.transform(v)? - t_min) / (t_max - t_min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eva_dist::WeibullMax;

    #[test]
    fn test_endpoints_map_to_unit_interval() {
        let w = WeibullMax::with_loc(10.0);
        let sx = AxisScale::x(&w);
        assert_eq!(sx.normalize(1.0, 9.0, 1.0).unwrap(), 0.0);
        assert_eq!(sx.normalize(1.0, 9.0, 9.0).unwrap(), 1.0);
        let mid = sx.normalize(1.0, 9.0, 5.0).unwrap();
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn test_matches_transform_formula() {
        let w = WeibullMax::with_loc(0.0);
        let sy = AxisScale::y(&w);
        let (min, max, p) = (0.1, 0.9, 0.5);
        let expected = (w.transform_y(p).unwrap() - w.transform_y(min).unwrap())
            / (w.transform_y(max).unwrap() - w.transform_y(min).unwrap());
        assert!((sy.normalize(min, max, p).unwrap() - expected).abs() < 1e-15);
    }

    #[test]
    fn test_degenerate_axis() {
        let w = WeibullMax::with_loc(0.0);
        let err = AxisScale::y(&w).normalize(0.3, 0.3, 0.3).unwrap_err();
        assert!(matches!(err, EvaError::DegenerateAxis { axis: Axis::Y, .. }));
    }

    #[test]
    fn test_transform_error_propagates() {
        let w = WeibullMax::with_loc(0.0);
        assert!(matches!(
            AxisScale::x(&w).normalize(-2.0, 1.0, -1.0),
            Err(EvaError::DomainViolation { .. })
        ));
    }
}
