//! Run summary and latest-snapshot helpers

use crate::types::{AnomalyRecord, TIMESTAMP_FORMAT};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fmt;

/// Aggregate counts over one detection run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnomalySummary {
    pub rows: usize,
    pub anomalies: usize,
    /// Rows whose blocked run reached the threshold
    pub blocked_long: usize,
    pub stations: usize,
    /// Latest observation timestamp; `None` for an empty run
    pub latest: Option<DateTime<Utc>>,
}

impl AnomalySummary {
    pub fn from_records(records: &[AnomalyRecord]) -> Self {
        let stations: HashSet<&str> = records.iter().map(AnomalyRecord::station_code).collect();
        Self {
            rows: records.len(),
            anomalies: records.iter().filter(|r| r.is_anomaly).count(),
            blocked_long: records.iter().filter(|r| r.is_blocked_3h).count(),
            stations: stations.len(),
            latest: records.iter().map(AnomalyRecord::timestamp).max(),
        }
    }
}

impl fmt::Display for AnomalySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows: {}", self.rows)?;
        writeln!(f, "Stations: {}", self.stations)?;
        writeln!(f, "Anomalies: {}", self.anomalies)?;
        writeln!(f, "Blocked >= threshold: {}", self.blocked_long)?;
        match self.latest {
            Some(ts) => write!(f, "Latest hour: {}", ts.format(TIMESTAMP_FORMAT)),
            None => write!(f, "Latest hour: -"),
        }
    }
}

/// Records observed at the latest timestamp of the run
///
/// This is the snapshot a map of current station state is drawn from.
pub fn latest_records(records: &[AnomalyRecord]) -> Vec<&AnomalyRecord> {
    let Some(latest) = records.iter().map(AnomalyRecord::timestamp).max() else {
        return Vec::new();
    };
    records.iter().filter(|r| r.timestamp() == latest).collect()
}
