//! Windowed robust estimator
//!
//! Rolling median and interquartile range over the most recent
//! `window_size` observations of a single series.

use crate::traits::OnlineRobustEstimator;
use crate::types::{RollingParameters, RollingStats};
use crate::window::RollingWindow;
use robust_core::Result;
use robust_quantile::{LinearInterpolation, QuantileEstimator};
use robust_spread::{Iqr, SpreadEstimator};

/// Windowed robust location/spread estimator
///
/// Generic over:
/// - `Q`: Quantile estimator for computing the median and quartiles
/// - `S`: Spread estimator computed with the same quantile semantics
///
/// Missing values (NaN) take a slot in the window but are excluded from
/// the order statistics. Statistics are undefined until at least
/// `min_periods` non-missing values are present.
#[derive(Debug, Clone)]
pub struct WindowedRobustEstimator<Q = LinearInterpolation, S = Iqr>
where
    Q: QuantileEstimator,
    S: SpreadEstimator<Q>,
{
    params: RollingParameters,
    window: RollingWindow,
    quantile_estimator: Q,
    spread_estimator: S,
}

/// Median/IQR estimator with linear-interpolation quartiles
pub type DefaultWindowedEstimator = WindowedRobustEstimator<LinearInterpolation, Iqr>;

impl DefaultWindowedEstimator {
    /// Create an estimator with the default estimators
    ///
    /// `params` is validated by the caller; see [`RollingParameters::validate`].
    pub fn new(params: RollingParameters) -> Self {
        Self::with_estimators(params, LinearInterpolation, Iqr)
    }
}

impl<Q, S> WindowedRobustEstimator<Q, S>
where
    Q: QuantileEstimator,
    S: SpreadEstimator<Q>,
{
    pub fn with_estimators(params: RollingParameters, quantile_estimator: Q, spread_estimator: S) -> Self {
        Self {
            window: RollingWindow::new(params.window_size),
            params,
            quantile_estimator,
            spread_estimator,
        }
    }

    /// Observations currently held, missing values included
    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Non-missing observations currently held
    pub fn valid_count(&self) -> usize {
        self.window.valid_count()
    }

    pub fn window(&self) -> &RollingWindow {
        &self.window
    }

    fn compute(&self) -> Result<RollingStats> {
        let sorted = self.window.sorted();
        if sorted.len() < self.params.min_periods {
            return Ok(RollingStats::undefined(sorted.len()));
        }

        let median = self.quantile_estimator.median_sorted(sorted)?;
        let iqr = self
            .spread_estimator
            .estimate_sorted(sorted, &self.quantile_estimator)?;
        Ok(RollingStats::defined(median, iqr, sorted.len()))
    }
}

impl<Q, S> OnlineRobustEstimator for WindowedRobustEstimator<Q, S>
where
    Q: QuantileEstimator,
    S: SpreadEstimator<Q>,
{
    fn update(&mut self, value: f64) -> Result<RollingStats> {
        self.window.push(value);
        self.compute()
    }

    fn current(&self) -> Result<RollingStats> {
        self.compute()
    }

    fn parameters(&self) -> &RollingParameters {
        &self.params
    }

    fn reset(&mut self) {
        self.window.clear();
    }
}
