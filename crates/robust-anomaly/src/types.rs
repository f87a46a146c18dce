//! Input and output records for station anomaly detection

use chrono::{DateTime, Utc};

/// Rendering of observation timestamps in output and error messages
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// One hourly occupancy snapshot of one station
///
/// Identity is `(station_code, timestamp)`. Metric fields may be NaN when the
/// upstream aggregation had nothing to report; NaN values are excluded from
/// rolling statistics and never count as blocked.
#[derive(Debug, Clone, PartialEq)]
pub struct StationObservation {
    /// Hour-truncated snapshot time
    pub timestamp: DateTime<Utc>,
    pub station_code: String,
    pub name: String,
    /// Administrative district
    pub district: String,
    pub lat: f64,
    pub lon: f64,
    pub bikes_mean: f64,
    pub bikes_median: f64,
    pub docks_mean: f64,
}

impl StationObservation {
    /// Minimal observation with empty descriptive fields
    pub fn new(
        station_code: impl Into<String>,
        timestamp: DateTime<Utc>,
        bikes_median: f64,
        docks_mean: f64,
    ) -> Self {
        Self {
            timestamp,
            station_code: station_code.into(),
            name: String::new(),
            district: String::new(),
            lat: f64::NAN,
            lon: f64::NAN,
            bikes_mean: bikes_median,
            bikes_median,
            docks_mean,
        }
    }

    pub fn with_location(mut self, name: impl Into<String>, district: impl Into<String>, lat: f64, lon: f64) -> Self {
        self.name = name.into();
        self.district = district.into();
        self.lat = lat;
        self.lon = lon;
        self
    }

    pub fn with_bikes_mean(mut self, bikes_mean: f64) -> Self {
        self.bikes_mean = bikes_mean;
        self
    }

    /// The value the rolling statistics track
    pub fn occupancy(&self) -> f64 {
        self.bikes_median
    }
}

/// Detection output for one observation
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyRecord {
    pub observation: StationObservation,

    /// Rolling median; `None` while the window is below `min_periods`
    pub rolling_median: Option<f64>,

    /// Rolling IQR; `None` while the window is below `min_periods`
    pub rolling_iqr: Option<f64>,

    /// Robust z-score; `None` whenever no decision was possible
    pub anomaly_score: Option<f64>,

    pub is_anomaly: bool,

    /// Zero bikes and zero docks in this observation
    pub is_blocked_now: bool,

    /// Consecutive blocked observations ending here, 0 when not blocked
    pub blocked_run_len: usize,

    /// `blocked_run_len` has reached the configured threshold
    pub is_blocked_3h: bool,
}

impl AnomalyRecord {
    pub fn station_code(&self) -> &str {
        &self.observation.station_code
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.observation.timestamp
    }

    pub fn has_statistics(&self) -> bool {
        self.rolling_median.is_some() && self.rolling_iqr.is_some()
    }
}
