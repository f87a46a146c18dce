//! Recompute-from-scratch rolling estimator
//!
//! Copies, filters and sorts the whole window on every update. Kept as the
//! reference the incremental estimator is checked and benchmarked against.

use crate::traits::OnlineRobustEstimator;
use crate::types::{RollingParameters, RollingStats};
use crate::window::{is_present, MAX_PREALLOCATED};
use robust_core::Result;
use robust_quantile::{LinearInterpolation, QuantileEstimator};
use robust_spread::{Iqr, SpreadEstimator};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct NaiveWindowedEstimator {
    params: RollingParameters,
    buffer: VecDeque<f64>,
}

impl NaiveWindowedEstimator {
    pub fn new(params: RollingParameters) -> Self {
        Self {
            buffer: VecDeque::with_capacity(params.window_size.min(MAX_PREALLOCATED).saturating_add(1)),
            params,
        }
    }
}

impl OnlineRobustEstimator for NaiveWindowedEstimator {
    fn update(&mut self, value: f64) -> Result<RollingStats> {
        self.buffer.push_back(value);
        while self.buffer.len() > self.params.window_size {
            self.buffer.pop_front();
        }
        self.current()
    }

    fn current(&self) -> Result<RollingStats> {
        let mut values: Vec<f64> = self.buffer.iter().copied().filter(|v| is_present(*v)).collect();
        if values.len() < self.params.min_periods {
            return Ok(RollingStats::undefined(values.len()));
        }
        values.sort_by(f64::total_cmp);
        let median = LinearInterpolation.median_sorted(&values)?;
        let iqr = Iqr.estimate_sorted(&values, &LinearInterpolation)?;
        Ok(RollingStats::defined(median, iqr, values.len()))
    }

    fn parameters(&self) -> &RollingParameters {
        &self.params
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }
}
