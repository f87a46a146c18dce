//! Station orchestrator
//!
//! Partitions an observation stream by station, replays each station in
//! timestamp order through its own [`StationDetector`], and merges the
//! per-station outputs back into one record sequence.
//!
//! Station groups are independent, so they are handed to an
//! [`ExecutionEngine`] as one batch item each. A [`CancellationToken`] is
//! checked before a group starts; a group that has started always runs to
//! completion.

use crate::detector::StationDetector;
use crate::params::{AnomalyParameters, DuplicatePolicy, OutputOrder};
use crate::types::{AnomalyRecord, StationObservation, TIMESTAMP_FORMAT};
use robust_core::{CancellationToken, Error, ExecutionEngine, Result, SequentialEngine};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Observations of one station, as indices into the input slice
#[derive(Debug)]
struct StationGroup<'a> {
    code: &'a str,
    indices: Vec<usize>,
}

/// Batch anomaly detection over many stations
#[derive(Debug, Clone)]
pub struct StationOrchestrator<E: ExecutionEngine = SequentialEngine> {
    params: AnomalyParameters,
    engine: E,
    cancellation: Option<CancellationToken>,
}

impl StationOrchestrator<SequentialEngine> {
    /// Process stations one after another on the calling thread
    pub fn sequential(params: AnomalyParameters) -> Self {
        Self::new(params, SequentialEngine)
    }
}

#[cfg(feature = "parallel")]
impl StationOrchestrator<robust_core::ParallelEngine> {
    /// Process stations concurrently on the global Rayon pool
    pub fn parallel(params: AnomalyParameters) -> Self {
        Self::new(params, robust_core::parallel())
    }
}

impl<E: ExecutionEngine> StationOrchestrator<E> {
    pub fn new(params: AnomalyParameters, engine: E) -> Self {
        Self {
            params,
            engine,
            cancellation: None,
        }
    }

    /// Stop starting new station groups once `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn params(&self) -> &AnomalyParameters {
        &self.params
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Run detection over the whole stream
    ///
    /// Fails without producing output on invalid parameters, empty input,
    /// a duplicated (station, timestamp) key under [`DuplicatePolicy::Reject`],
    /// or cancellation.
    #[instrument(skip_all, fields(observations = observations.len(), strategy = ?self.engine.strategy()))]
    pub fn run(&self, observations: &[StationObservation]) -> Result<Vec<AnomalyRecord>> {
        self.params.validate()?;
        if observations.is_empty() {
            return Err(Error::empty_input("station anomaly detection"));
        }

        let mut groups = partition(observations);
        let dropped = self.order_groups(&mut groups, observations)?;
        if dropped > 0 {
            warn!(dropped, "Dropped duplicate observations, keeping the first of each key");
        }
        info!(stations = groups.len(), "Partitioned observations by station");

        let outcomes = self.engine.execute_batch(groups.len(), |g| {
            if self.is_cancelled() {
                return None;
            }
            Some(self.process_group(&groups[g], observations))
        });

        let total = groups.len();
        let completed = outcomes.iter().filter(|o| o.is_some()).count();
        if completed < total {
            warn!(completed, total, "Cancelled before all stations were processed");
            return Err(Error::Cancelled { completed, total });
        }

        let mut per_group = Vec::with_capacity(total);
        for outcome in outcomes.into_iter().flatten() {
            per_group.push(outcome?);
        }

        let records = self.assemble(&groups, per_group, observations.len());
        let anomalies = records.iter().filter(|r| r.is_anomaly).count();
        let blocked = records.iter().filter(|r| r.is_blocked_3h).count();
        info!(records = records.len(), anomalies, blocked, "Anomaly detection complete");
        Ok(records)
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Sort each group by timestamp and apply the duplicate policy
    ///
    /// Returns the number of observations dropped.
    fn order_groups(
        &self,
        groups: &mut [StationGroup<'_>],
        observations: &[StationObservation],
    ) -> Result<usize> {
        let mut dropped = 0;
        for group in groups.iter_mut() {
            // Stable: equal timestamps keep their input order
            group.indices.sort_by_key(|&i| observations[i].timestamp);

            let before = group.indices.len();
            match self.params.duplicate_policy {
                DuplicatePolicy::Reject => {
                    if let Some(pair) = group
                        .indices
                        .windows(2)
                        .find(|w| observations[w[0]].timestamp == observations[w[1]].timestamp)
                    {
                        let obs = &observations[pair[1]];
                        return Err(Error::duplicate(
                            obs.station_code.as_str(),
                            obs.timestamp.format(TIMESTAMP_FORMAT),
                        ));
                    }
                }
                DuplicatePolicy::KeepFirst => {
                    group
                        .indices
                        .dedup_by_key(|i| observations[*i].timestamp);
                }
            }
            dropped += before - group.indices.len();
        }
        Ok(dropped)
    }

    fn process_group(
        &self,
        group: &StationGroup<'_>,
        observations: &[StationObservation],
    ) -> Result<Vec<AnomalyRecord>> {
        let mut detector = StationDetector::new(&self.params);
        let records = detector.process_all(group.indices.iter().map(|&i| &observations[i]))?;

        let anomalies = records.iter().filter(|r| r.is_anomaly).count();
        let longest_block = records.iter().map(|r| r.blocked_run_len).max().unwrap_or(0);
        debug!(
            station = group.code,
            observations = records.len(),
            anomalies,
            longest_block,
            "Processed station"
        );
        Ok(records)
    }

    fn assemble(
        &self,
        groups: &[StationGroup<'_>],
        per_group: Vec<Vec<AnomalyRecord>>,
        input_len: usize,
    ) -> Vec<AnomalyRecord> {
        match self.params.output_order {
            OutputOrder::Input => {
                let mut slots: Vec<Option<AnomalyRecord>> = vec![None; input_len];
                for (group, records) in groups.iter().zip(per_group) {
                    for (&i, record) in group.indices.iter().zip(records) {
                        slots[i] = Some(record);
                    }
                }
                // Slots of dropped duplicates stay empty
                slots.into_iter().flatten().collect()
            }
            OutputOrder::StationTime => {
                let mut ordered: Vec<(&str, Vec<AnomalyRecord>)> = groups
                    .iter()
                    .map(|g| g.code)
                    .zip(per_group)
                    .collect();
                // Lexicographic
                ordered.sort_by(|a, b| a.0.cmp(b.0));
                ordered.into_iter().flat_map(|(_, records)| records).collect()
            }
        }
    }
}

/// Group observation indices by station code, in order of first appearance
fn partition(observations: &[StationObservation]) -> Vec<StationGroup<'_>> {
    let mut groups: Vec<StationGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for (i, obs) in observations.iter().enumerate() {
        let code = obs.station_code.as_str();
        let g = *index.entry(code).or_insert_with(|| {
            groups.push(StationGroup {
                code,
                indices: Vec::new(),
            });
            groups.len() - 1
        });
        groups[g].indices.push(i);
    }
    groups
}
