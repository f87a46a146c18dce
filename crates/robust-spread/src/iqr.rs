//! Interquartile Range (IQR) estimator

use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use robust_core::Result;
use robust_quantile::QuantileEstimator;

/// Interquartile Range estimator
///
/// `Q3 - Q1` under whatever quantile semantics the supplied estimator uses.
/// A constant sample has an IQR of exactly zero; callers that divide by the
/// IQR decide how to floor it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iqr;

impl Iqr {
    /// Create a new IQR estimator
    pub fn new() -> Self {
        Self
    }
}

impl SpreadEstimatorProperties for Iqr {
    fn name(&self) -> &str {
        "IQR"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.25
    }
}

impl<Q: QuantileEstimator> SpreadEstimator<Q> for Iqr {
    fn estimate_sorted(&self, sorted_data: &[f64], quantile_est: &Q) -> Result<f64> {
        let q1 = quantile_est.quantile_sorted(sorted_data, 0.25)?;
        let q3 = quantile_est.quantile_sorted(sorted_data, 0.75)?;
        Ok(q3 - q1)
    }
}
