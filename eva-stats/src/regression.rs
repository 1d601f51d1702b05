//! Least-squares line fitting in transformed coordinates

use crate::helpers::{mean, require_min_count, require_paired};
use eva_core::{RegressionResult, Result};

/// Ordinary least-squares regression of `ys` on `xs` plus the Pearson
/// correlation coefficient.
///
/// slope = Σ(x-x̄)(y-ȳ) / Σ(x-x̄)², intercept = ȳ - slope·x̄,
/// r = Σ(x-x̄)(y-ȳ) / √(Σ(x-x̄)² Σ(y-ȳ)²).
///
/// Fails on unequal lengths (checked first) or fewer than two points.
/// Degenerate inputs such as constant `xs` are not special-cased: the
/// result carries NaN or infinities and callers should check
/// [`RegressionResult::is_finite`] or the r-value before trusting it.
pub fn fit(xs: &[f64], ys: &[f64]) -> Result<RegressionResult> {
    require_paired(xs, ys)?;
    require_min_count(xs, 2)?;

    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    let rvalue = sxy / (sxx * syy).sqrt();

    Ok(RegressionResult { slope, intercept, rvalue })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn paired(min_len: usize, max_len: usize) -> BoxedStrategy<(Vec<f64>, Vec<f64>)> {
        proptest::collection::vec(-1e3_f64..1e3, min_len..=max_len)
            .prop_flat_map(|x| {
                let n = x.len();
                (Just(x), proptest::collection::vec(-1e3_f64..1e3, n..=n))
            })
            .boxed()
    }

    proptest! {
        #[test]
        fn rvalue_bounded((xs, ys) in paired(3, 40)) {
            let r = fit(&xs, &ys).unwrap();
            if r.is_finite() {
                prop_assert!(r.rvalue >= -1.0 - 1e-9 && r.rvalue <= 1.0 + 1e-9, "r = {}", r.rvalue);
            }
        }

        #[test]
        fn line_passes_through_means((xs, ys) in paired(3, 40)) {
            let r = fit(&xs, &ys).unwrap();
            if r.is_finite() {
                let predicted = r.intercept + r.slope * mean(&xs);
                prop_assert!((predicted - mean(&ys)).abs() < 1e-6 * (1.0 + mean(&ys).abs()));
            }
        }

        #[test]
        fn recovers_exact_lines(
            xs in proptest::collection::vec(-100.0_f64..100.0, 3..30),
            slope in 0.1_f64..10.0,
            intercept in -50.0_f64..50.0,
        ) {
            let ys: Vec<f64> = xs.iter().map(|x| slope * x + intercept).collect();
            let r = fit(&xs, &ys).unwrap();
            let spread = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
                - xs.iter().cloned().fold(f64::INFINITY, f64::min);
            prop_assume!(spread > 1.0);
            prop_assert!((r.slope - slope).abs() < 1e-8);
            prop_assert!((r.intercept - intercept).abs() < 1e-6);
            prop_assert!((r.rvalue - 1.0).abs() < 1e-9);
        }
    }
}
