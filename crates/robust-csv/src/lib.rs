//! # Robust CSV
//!
//! File boundary of the detection pipeline: reads hourly station
//! observations and writes one anomaly record per observation.
//!
//! ```rust
//! use robust_anomaly::{AnomalyParameters, StationOrchestrator};
//!
//! let input = "ts_hour,stationcode,bikes_median,docks_mean\n\
//!              2024-05-01 13:00:00,16107,4,31\n";
//! let observations = robust_csv::read_observations(input.as_bytes()).unwrap();
//! let records = StationOrchestrator::sequential(AnomalyParameters::default())
//!     .run(&observations)
//!     .unwrap();
//!
//! let mut out = Vec::new();
//! robust_csv::write_records(&mut out, &records).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
//! ```

pub mod error;
pub mod reader;
pub mod timestamp;
pub mod writer;

pub use error::{Error, Result};
pub use reader::{read_observations, read_observations_from_path, REQUIRED_COLUMNS};
pub use timestamp::{format_timestamp, parse_timestamp};
pub use writer::{write_records, write_records_to_path, OUTPUT_COLUMNS};
