//! # Station Anomaly
//!
//! Robust per-station anomaly detection for hourly bike-share occupancy
//! snapshots.
//!
//! The workspace is split by concern:
//!
//! - [`robust_core`]: error taxonomy, execution engines, cancellation
//! - [`robust_quantile`]: linear-interpolation quantiles over sorted data
//! - [`robust_spread`]: interquartile range
//! - [`robust_rolling`]: windowed median/IQR with an incrementally sorted window
//! - [`robust_anomaly`]: scorer, blocked-run tracker, per-station detector,
//!   orchestrator
//! - [`robust_csv`]: the CSV file boundary
//!
//! This crate re-exports them and adds the configuration layer and the
//! file-to-file pipeline used by the `station-anomaly` binary.
//!
//! ## Example
//!
//! ```rust
//! use station_anomaly::prelude::*;
//!
//! let input = "ts_hour,stationcode,bikes_median,docks_mean\n\
//!              2024-05-01 13:00:00,16107,0,0\n\
//!              2024-05-01 14:00:00,16107,0,0\n";
//! let mut output = Vec::new();
//! let orchestrator = StationOrchestrator::sequential(AnomalyParameters::default());
//! let summary = station_anomaly::detect_csv(input.as_bytes(), &mut output, &orchestrator).unwrap();
//! assert_eq!(summary.rows, 2);
//! ```

pub mod config;
pub mod pipeline;

pub use robust_anomaly;
pub use robust_core;
pub use robust_csv;
pub use robust_quantile;
pub use robust_rolling;
pub use robust_spread;

pub use config::{load_parameters, ParameterOverrides};
pub use pipeline::{detect_csv, run_pipeline};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{load_parameters, ParameterOverrides};
    pub use robust_anomaly::prelude::*;
    pub use robust_core::SequentialEngine;
}
