//! Core traits for quantile estimation

use crate::{Error, Result};

/// Main trait for quantile estimation
///
/// # API Convention
///
/// - Methods without suffix sort data in place (take `&mut [f64]`)
/// - Methods with `_sorted` suffix require pre-sorted data (take `&[f64]`)
pub trait QuantileEstimator: Clone + Send + Sync {
    /// Human-readable name of the estimator
    fn name(&self) -> &str;

    /// Estimate a single quantile
    ///
    /// # Warning
    /// This method will sort the data in place! If you need to preserve the original
    /// order, use `quantile_sorted()` with pre-sorted data or make a copy first.
    fn quantile(&self, data: &mut [f64], p: f64) -> Result<f64> {
        if let Some(index) = data.iter().position(|x| !x.is_finite()) {
            return Err(Error::NonFinite { index });
        }
        data.sort_by(f64::total_cmp);
        self.quantile_sorted(data, p)
    }

    /// Estimate a single quantile from pre-sorted, finite data
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// Estimate multiple quantiles from pre-sorted data
    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter()
            .map(|&p| self.quantile_sorted(sorted_data, p))
            .collect()
    }

    /// Median of pre-sorted data
    fn median_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        self.quantile_sorted(sorted_data, 0.5)
    }
}
