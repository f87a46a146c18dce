//! Core traits for online windowed estimation

use crate::types::{RollingParameters, RollingStats};
use robust_core::Result;

/// Estimator fed one observation at a time, in order
///
/// Each implementation owns its window exclusively. Two instances never
/// share state, so one per series can be driven from any thread.
pub trait OnlineRobustEstimator: Send {
    /// Append `value` (possibly missing) and return statistics of the window
    /// after the append
    fn update(&mut self, value: f64) -> Result<RollingStats>;

    /// Statistics of the current window without modifying it
    fn current(&self) -> Result<RollingStats>;

    /// Parameters this estimator was built with
    fn parameters(&self) -> &RollingParameters;

    /// Drop all retained observations
    fn reset(&mut self);
}
