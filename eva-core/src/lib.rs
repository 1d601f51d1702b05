//! EVA Core - Fundamental types
//!
//! This crate provides the core types used throughout EVA:
//! - `Params`: Named distribution parameters (loc, scale, shape)
//! - `RegressionResult`: Slope, intercept and r-value of a probability-plot fit
//! - `EvaError`: Structured errors for every fatal fitting condition

mod error;
mod params;

pub use error::{EvaError, codes};
pub use params::{Axis, Params, RegressionResult, LOC, OFFSET, SCALE, SHAPE};

/// Result alias used across the EVA crates
pub type Result<T> = std::result::Result<T, EvaError>;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Axis, EvaError, Params, RegressionResult, Result};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod params_tests {
        use super::*;

        #[test]
        fn test_builder_and_accessors() {
            let p = Params::new().with(LOC, 1.5).with(SCALE, 5.0).with(SHAPE, 2.0);
            assert_eq!(p.loc(), Some(1.5));
            assert_eq!(p.scale(), Some(5.0));
            assert_eq!(p.shape(), Some(2.0));
            assert_eq!(p.len(), 3);
        }

        #[test]
        fn test_missing_key() {
            let p = Params::new().with(LOC, 0.0).with(SCALE, 3.0);
            assert_eq!(p.shape(), None);
            assert_eq!(p.get("tail"), None);
        }

        #[test]
        fn test_with_overwrites() {
            let p = Params::new().with(SCALE, 1.0).with(SCALE, 4.0);
            assert_eq!(p.scale(), Some(4.0));
            assert_eq!(p.len(), 1);
        }

        #[test]
        fn test_serializes_as_map() {
            let p = Params::new().with(LOC, 0.0).with(SHAPE, 2.0);
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, r#"{"loc":0.0,"shape":2.0}"#);
        }

        #[test]
        fn test_regression_finite() {
            let ok = RegressionResult { slope: 2.0, intercept: 3.0, rvalue: 1.0 };
            assert!(ok.is_finite());
            let bad = RegressionResult { slope: f64::NAN, intercept: 3.0, rvalue: 1.0 };
            assert!(!bad.is_finite());
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_codes() {
            let e = EvaError::domain("Weibull Maximum", Axis::X, 10.0, "must be less than loc");
            assert_eq!(e.code(), codes::DOMAIN_VIOLATION);
            assert_eq!(EvaError::DimensionMismatch { left: 2, right: 3 }.code(), codes::DIMENSION_MISMATCH);
            assert_eq!(EvaError::InsufficientData { required: 2, got: 1 }.code(), codes::INSUFFICIENT_DATA);
        }

        #[test]
        fn test_display() {
            let e = EvaError::domain("Weibull Maximum", Axis::X, 10.0, "must be less than loc");
            assert_eq!(
                e.to_string(),
                "Domain violation: Weibull Maximum x-transform at 10: must be less than loc"
            );
            let e = EvaError::InsufficientData { required: 2, got: 1 };
            assert_eq!(e.to_string(), "Insufficient data: need at least 2 points, got 1");
        }

        #[test]
        fn test_suggestions() {
            let e = EvaError::UnknownDistribution {
                name: "weibul".to_string(),
                suggestions: vec!["weibull-max".to_string(), "weibull-min".to_string()],
            };
            assert_eq!(e.suggestion().as_deref(), Some("Similar: weibull-max, weibull-min"));
            assert!(EvaError::DimensionMismatch { left: 1, right: 2 }.suggestion().is_none());
        }

        #[test]
        fn test_serialize_tagged() {
            let e = EvaError::InvalidSample("rank 0".to_string());
            let json = serde_json::to_string(&e).unwrap();
            assert_eq!(json, r#"{"kind":"invalid_sample","detail":"rank 0"}"#);
        }
    }
}
