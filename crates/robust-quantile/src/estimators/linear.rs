//! Linear-interpolation quantile estimator
//!
//! Hyndman & Fan type 7: the sample quantile at probability `p` sits at
//! fractional rank `h = (n - 1) * p` and is interpolated linearly between the
//! two neighbouring order statistics. This is the default of most dataframe
//! libraries and spreadsheet `PERCENTILE` functions, so results agree with
//! them exactly.

use crate::{Error, QuantileEstimator, Result};

/// Type 7 linear-interpolation quantile estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolation;

impl LinearInterpolation {
    pub fn new() -> Self {
        Self
    }
}

/// Convenience constructor
pub fn linear() -> LinearInterpolation {
    LinearInterpolation
}

impl QuantileEstimator for LinearInterpolation {
    fn name(&self) -> &str {
        "Linear (type 7)"
    }

    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        Error::check_non_empty(sorted_data)?;

        let n = sorted_data.len();
        if n == 1 {
            return Ok(sorted_data[0]);
        }

        let h = (n - 1) as f64 * p;
        let lo = h.floor() as usize;
        let hi = (lo + 1).min(n - 1);
        let frac = h - lo as f64;

        let a = sorted_data[lo];
        let b = sorted_data[hi];
        Ok(a + (b - a) * frac)
    }
}
