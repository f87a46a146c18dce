//! Parameters for station anomaly detection

use robust_core::{Error, Result};
use robust_rolling::{default_min_periods, RollingParameters, DEFAULT_WINDOW_SIZE};
use serde::{Deserialize, Serialize};

/// Default robust z-score cutoff
pub const DEFAULT_ANOMALY_THRESHOLD: f64 = 3.0;

/// Default number of consecutive blocked observations to flag a station
pub const DEFAULT_BLOCKED_RUN_THRESHOLD: usize = 3;

/// What to do when a (station, timestamp) key occurs more than once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail the whole run before any station is processed
    #[default]
    Reject,
    /// Keep the earliest occurrence in input order, drop the rest
    KeepFirst,
}

/// Order of the emitted records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputOrder {
    /// Record *i* describes input observation *i*
    #[default]
    Input,
    /// Grouped by station code, each station in timestamp order
    ///
    /// Codes compare as strings, byte by byte: `"16107"` sorts before
    /// `"9020"` and `"00901"` stays distinct from `"901"`.
    StationTime,
}

/// Parameters for anomaly detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnomalyParameters {
    /// Most recent observations retained per station
    pub window_size: usize,

    /// Non-missing values required before statistics are defined.
    /// `None` resolves to `max(8, window_size / 3)`.
    pub min_periods: Option<usize>,

    /// Robust z-score above which an observation is anomalous
    pub anomaly_threshold: f64,

    /// Consecutive blocked observations needed to flag a sustained block
    pub blocked_run_threshold: usize,

    pub duplicate_policy: DuplicatePolicy,

    pub output_order: OutputOrder,
}

impl Default for AnomalyParameters {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            min_periods: None,
            anomaly_threshold: DEFAULT_ANOMALY_THRESHOLD,
            blocked_run_threshold: DEFAULT_BLOCKED_RUN_THRESHOLD,
            duplicate_policy: DuplicatePolicy::Reject,
            output_order: OutputOrder::Input,
        }
    }
}

impl AnomalyParameters {
    /// Flag smaller deviations and shorter blocks
    pub fn sensitive() -> Self {
        Self {
            anomaly_threshold: 2.0,
            blocked_run_threshold: 2,
            ..Self::default()
        }
    }

    /// Two-day window, large deviations and six-hour blocks only
    pub fn relaxed() -> Self {
        Self {
            window_size: 48,
            anomaly_threshold: 5.0,
            blocked_run_threshold: 6,
            ..Self::default()
        }
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_min_periods(mut self, min_periods: usize) -> Self {
        self.min_periods = Some(min_periods);
        self
    }

    pub fn with_anomaly_threshold(mut self, threshold: f64) -> Self {
        self.anomaly_threshold = threshold;
        self
    }

    pub fn with_blocked_run_threshold(mut self, threshold: usize) -> Self {
        self.blocked_run_threshold = threshold;
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn with_output_order(mut self, order: OutputOrder) -> Self {
        self.output_order = order;
        self
    }

    /// `min_periods` with the window-derived default applied
    pub fn resolved_min_periods(&self) -> usize {
        self.min_periods
            .unwrap_or_else(|| default_min_periods(self.window_size))
    }

    /// Window parameters for the per-station estimator
    pub fn rolling(&self) -> RollingParameters {
        RollingParameters::new(self.window_size).with_min_periods(self.resolved_min_periods())
    }

    pub fn validate(&self) -> Result<()> {
        self.rolling().validate()?;
        if !self.anomaly_threshold.is_finite() || self.anomaly_threshold < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "anomaly_threshold must be a non-negative finite number, got {}",
                self.anomaly_threshold
            )));
        }
        if self.blocked_run_threshold == 0 {
            return Err(Error::InvalidParameter(
                "blocked_run_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
