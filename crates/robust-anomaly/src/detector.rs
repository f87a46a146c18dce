//! Per-station detector
//!
//! Owns one station's rolling estimator and blocked-run tracker and advances
//! both in lockstep, one observation at a time.

use crate::blocked::BlockedRunTracker;
use crate::params::AnomalyParameters;
use crate::scorer::DeviationScorer;
use crate::types::{AnomalyRecord, StationObservation};
use robust_core::Result;
use robust_rolling::{DefaultWindowedEstimator, OnlineRobustEstimator};

/// Detection state for a single station
///
/// Observations must be fed in ascending timestamp order. The detector never
/// sees another station's data.
#[derive(Debug, Clone)]
pub struct StationDetector<E = DefaultWindowedEstimator>
where
    E: OnlineRobustEstimator,
{
    estimator: E,
    scorer: DeviationScorer,
    tracker: BlockedRunTracker,
    processed: usize,
}

impl StationDetector<DefaultWindowedEstimator> {
    /// Fresh detector with the default median/IQR estimator
    pub fn new(params: &AnomalyParameters) -> Self {
        Self::with_estimator(params, DefaultWindowedEstimator::new(params.rolling()))
    }
}

impl<E: OnlineRobustEstimator> StationDetector<E> {
    pub fn with_estimator(params: &AnomalyParameters, estimator: E) -> Self {
        Self {
            estimator,
            scorer: DeviationScorer::new(params.anomaly_threshold),
            tracker: BlockedRunTracker::new(params.blocked_run_threshold),
            processed: 0,
        }
    }

    /// Advance on `obs` and build its output record
    pub fn process(&mut self, obs: &StationObservation) -> Result<AnomalyRecord> {
        let value = obs.occupancy();
        let stats = self.estimator.update(value)?;
        let deviation = self.scorer.score(value, &stats);
        let blocked = self.tracker.update(obs.bikes_median, obs.docks_mean);
        self.processed += 1;

        Ok(AnomalyRecord {
            observation: obs.clone(),
            rolling_median: stats.median,
            rolling_iqr: stats.iqr,
            anomaly_score: deviation.score,
            is_anomaly: deviation.is_anomaly,
            is_blocked_now: blocked.is_blocked_now,
            blocked_run_len: blocked.run_length,
            is_blocked_3h: blocked.is_sustained,
        })
    }

    /// Replay an ordered sequence
    pub fn process_all<'a, I>(&mut self, observations: I) -> Result<Vec<AnomalyRecord>>
    where
        I: IntoIterator<Item = &'a StationObservation>,
    {
        observations.into_iter().map(|obs| self.process(obs)).collect()
    }

    /// Observations processed since creation or the last reset
    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn tracker(&self) -> &BlockedRunTracker {
        &self.tracker
    }

    pub fn reset(&mut self) {
        self.estimator.reset();
        self.tracker.reset();
        self.processed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn hourly(code: &str, values: &[(f64, f64)]) -> Vec<StationObservation> {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &(bikes, docks))| {
                StationObservation::new(code, start + Duration::hours(i as i64), bikes, docks)
            })
            .collect()
    }

    #[test]
    fn test_warm_up_then_scores() {
        let params = AnomalyParameters::default();
        let mut detector = StationDetector::new(&params);
        let obs = hourly("X", &[(5.0, 10.0); 9]);

        let records = detector.process_all(&obs).unwrap();
        assert!(records[..7].iter().all(|r| !r.has_statistics() && !r.is_anomaly));
        assert!(records[7..].iter().all(|r| r.anomaly_score == Some(0.0)));
        assert_eq!(detector.processed(), 9);
    }

    #[test]
    fn test_blocked_fields_follow_tracker() {
        let params = AnomalyParameters::default();
        let mut detector = StationDetector::new(&params);
        let obs = hourly(
            "Y",
            &[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (1.0, 0.0)],
        );
        let records = detector.process_all(&obs).unwrap();
        let runs: Vec<usize> = records.iter().map(|r| r.blocked_run_len).collect();
        assert_eq!(runs, vec![1, 2, 3, 0]);
        assert!(records[2].is_blocked_3h);
        assert!(!records[3].is_blocked_now);
    }

    #[test]
    fn test_record_carries_observation() {
        let params = AnomalyParameters::default();
        let mut detector = StationDetector::new(&params);
        let obs = hourly("16107", &[(3.0, 7.0)])
            .remove(0)
            .with_location("Benjamin Godard", "Paris", 48.865, 2.275);
        let record = detector.process(&obs).unwrap();
        assert_eq!(record.observation, obs);
        assert_eq!(record.station_code(), "16107");
    }

    #[test]
    fn test_reset_starts_over() {
        let params = AnomalyParameters::default().with_min_periods(1);
        let mut detector = StationDetector::new(&params);
        let obs = hourly("Z", &[(0.0, 0.0), (0.0, 0.0)]);
        detector.process_all(&obs).unwrap();
        detector.reset();
        assert_eq!(detector.processed(), 0);
        assert_eq!(detector.tracker().state().run_length(), 0);
        let record = detector.process(&obs[0]).unwrap();
        assert_eq!(record.blocked_run_len, 1);
        assert_eq!(record.rolling_median, Some(0.0));
    }
}
