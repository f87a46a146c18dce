//! Common types used in rolling estimation

use robust_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of observations retained per series
pub const DEFAULT_WINDOW_SIZE: usize = 24;

/// Floor applied to the derived minimum fill
pub const MIN_PERIODS_FLOOR: usize = 8;

/// Default minimum fill for a window of `window_size`: `max(8, window_size / 3)`
pub fn default_min_periods(window_size: usize) -> usize {
    MIN_PERIODS_FLOOR.max(window_size / 3)
}

/// Parameters for windowed estimation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingParameters {
    /// Number of most recent observations retained
    pub window_size: usize,

    /// Non-missing values required before statistics are defined
    pub min_periods: usize,
}

impl Default for RollingParameters {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

impl RollingParameters {
    /// Window of `window_size` with the derived default minimum fill
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            min_periods: default_min_periods(window_size),
        }
    }

    pub fn with_min_periods(mut self, min_periods: usize) -> Self {
        self.min_periods = min_periods;
        self
    }

    /// Reject windows that could never produce statistics
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(Error::InvalidParameter(
                "window_size must be at least 1".to_string(),
            ));
        }
        if self.min_periods == 0 {
            return Err(Error::InvalidParameter(
                "min_periods must be at least 1".to_string(),
            ));
        }
        if self.min_periods > self.window_size {
            return Err(Error::InvalidParameter(format!(
                "min_periods ({}) cannot exceed window_size ({})",
                self.min_periods, self.window_size
            )));
        }
        Ok(())
    }
}

/// Rolling median and IQR of the current window contents
///
/// Both are `None` while fewer than `min_periods` non-missing values are in
/// the window. That is not an error: it is the explicit "undefined
/// statistics" state and consumers must not classify on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingStats {
    /// Rolling median
    pub median: Option<f64>,

    /// Rolling interquartile range (Q3 - Q1), may be exactly zero
    pub iqr: Option<f64>,

    /// Non-missing values in the window when these were computed
    pub valid_count: usize,
}

impl RollingStats {
    /// Statistics for a window that has not reached its minimum fill
    pub fn undefined(valid_count: usize) -> Self {
        Self {
            median: None,
            iqr: None,
            valid_count,
        }
    }

    pub fn defined(median: f64, iqr: f64, valid_count: usize) -> Self {
        Self {
            median: Some(median),
            iqr: Some(iqr),
            valid_count,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.median.is_some() && self.iqr.is_some()
    }
}

impl fmt::Display for RollingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.median, self.iqr) {
            (Some(median), Some(iqr)) => write!(
                f,
                "median={median:.3} iqr={iqr:.3} (n={})",
                self.valid_count
            ),
            _ => write!(f, "undefined (n={})", self.valid_count),
        }
    }
}
