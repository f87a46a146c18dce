//! # Robust Anomaly Detection
//!
//! Per-station occupancy anomaly and blocked-run detection over hourly
//! bike-share snapshots.
//!
//! Each station gets its own [`StationDetector`]: a rolling median/IQR
//! estimator, a robust z-score [`DeviationScorer`], and a
//! [`BlockedRunTracker`] counting consecutive hours with neither bikes nor
//! docks available. [`StationOrchestrator`] partitions a mixed stream by
//! station and runs the detectors on an execution engine.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use robust_anomaly::{AnomalyParameters, StationObservation, StationOrchestrator};
//!
//! let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
//! let observations: Vec<_> = (0..30)
//!     .map(|h| {
//!         let bikes = if h == 24 { 20.0 } else { 5.0 };
//!         StationObservation::new("X", start + Duration::hours(h), bikes, 10.0)
//!     })
//!     .collect();
//!
//! let records = StationOrchestrator::sequential(AnomalyParameters::default())
//!     .run(&observations)
//!     .unwrap();
//! assert!(records[24].is_anomaly);
//! assert!(!records[23].is_anomaly);
//! ```

pub mod blocked;
pub mod detector;
pub mod orchestrator;
pub mod params;
pub mod scorer;
pub mod summary;
pub mod types;

// Re-exports
pub use blocked::{is_blocked, BlockState, BlockedRunTracker, BlockedStatus};
pub use detector::StationDetector;
pub use orchestrator::StationOrchestrator;
pub use params::{
    AnomalyParameters, DuplicatePolicy, OutputOrder, DEFAULT_ANOMALY_THRESHOLD,
    DEFAULT_BLOCKED_RUN_THRESHOLD,
};
pub use scorer::{DeviationScore, DeviationScorer, SCALE_EPSILON};
pub use summary::{latest_records, AnomalySummary};
pub use types::{AnomalyRecord, StationObservation, TIMESTAMP_FORMAT};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AnomalyParameters, AnomalyRecord, AnomalySummary, DuplicatePolicy, OutputOrder,
        StationObservation, StationOrchestrator,
    };
    pub use robust_core::{CancellationToken, Error, ExecutionEngine, Result};
}
