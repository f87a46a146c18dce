//! Robust spread measurements for rolling anomaly scoring
//!
//! Spread (or scale) estimators measure the variability in data. The
//! interquartile range only looks at the middle half of the sample, so the
//! spikes an anomaly detector is looking for do not inflate it.
//!
//! # Example
//!
//! ```rust
//! use robust_quantile::linear;
//! use robust_spread::{Iqr, SpreadEstimator};
//!
//! let mut sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
//! let iqr = Iqr::new().estimate(&mut sample, &linear()).unwrap();
//! assert_eq!(iqr, 4.0);
//! ```

pub mod iqr;
pub mod traits;

// Re-exports
pub use iqr::Iqr;
pub use traits::{SpreadEstimator, SpreadEstimatorProperties};
