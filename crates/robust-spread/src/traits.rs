//! Core traits for spread estimation

use robust_core::Result;
use robust_quantile::QuantileEstimator;

/// Intrinsic properties of a spread estimator that don't depend on implementation details
pub trait SpreadEstimatorProperties {
    /// Get the name of this spread estimator
    fn name(&self) -> &str;

    /// Check if this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// Get the asymptotic breakdown point (0.0 to 0.5)
    fn breakdown_point(&self) -> f64;
}

/// Parameterized trait for spread/scale estimators
///
/// Estimators are parameterized by the quantile estimator they use rather
/// than storing one, so the same quantile semantics flow through median and
/// spread.
pub trait SpreadEstimator<Q: QuantileEstimator>: SpreadEstimatorProperties + Clone + Send + Sync {
    /// Estimate spread with provided quantile estimator
    ///
    /// Sorts `data` in place.
    fn estimate(&self, data: &mut [f64], quantile_est: &Q) -> Result<f64> {
        data.sort_by(f64::total_cmp);
        self.estimate_sorted(data, quantile_est)
    }

    /// Compute spread from pre-sorted data
    fn estimate_sorted(&self, sorted_data: &[f64], quantile_est: &Q) -> Result<f64>;
}
