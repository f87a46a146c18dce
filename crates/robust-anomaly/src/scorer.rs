//! Deviation scorer
//!
//! Robust z-score of an observation against its station's rolling window:
//! `|value - median| / iqr`. Median and IQR are not dragged by the spikes
//! being detected, unlike mean and standard deviation.

use robust_rolling::RollingStats;

/// Stand-in for an IQR of exactly zero
///
/// Keeps the score finite. Any deviation from a perfectly flat history
/// scores `|delta| / 1e-9`.
pub const SCALE_EPSILON: f64 = 1e-9;

/// Score and classification for one observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationScore {
    /// `None` when statistics were undefined or the value was missing
    pub score: Option<f64>,
    pub is_anomaly: bool,
}

impl DeviationScore {
    /// No decision possible
    pub fn undefined() -> Self {
        Self {
            score: None,
            is_anomaly: false,
        }
    }
}

/// Robust z-score classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationScorer {
    threshold: f64,
    epsilon: f64,
}

impl DeviationScorer {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            epsilon: SCALE_EPSILON,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// IQR used as the divisor: exactly-zero spread becomes epsilon
    pub fn safe_scale(&self, iqr: f64) -> f64 {
        if iqr == 0.0 {
            self.epsilon
        } else {
            iqr
        }
    }

    /// Score `value` against a window's statistics
    pub fn score(&self, value: f64, stats: &RollingStats) -> DeviationScore {
        match (stats.median, stats.iqr) {
            (Some(median), Some(iqr)) => self.score_with(value, median, iqr),
            _ => DeviationScore::undefined(),
        }
    }

    /// Score `value` against an explicit median and IQR
    pub fn score_with(&self, value: f64, median: f64, iqr: f64) -> DeviationScore {
        if !value.is_finite() {
            return DeviationScore::undefined();
        }
        let score = (value - median).abs() / self.safe_scale(iqr);
        DeviationScore {
            score: Some(score),
            is_anomaly: score > self.threshold,
        }
    }
}

impl Default for DeviationScorer {
    fn default() -> Self {
        Self::new(crate::params::DEFAULT_ANOMALY_THRESHOLD)
    }
}
