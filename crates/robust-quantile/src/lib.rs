//! Quantile estimation over sorted samples
//!
//! This crate provides the [`QuantileEstimator`] seam used by the rolling
//! window statistics, and the linear-interpolation (type 7) estimator that
//! reproduces the rolling median / quartiles computed by common dataframe
//! libraries.
//!
//! # Example
//!
//! ```rust
//! use robust_quantile::{estimators::linear, QuantileEstimator};
//!
//! let sorted = vec![1.0, 2.0, 3.0, 4.0];
//! let median = linear().median_sorted(&sorted).unwrap();
//! assert_eq!(median, 2.5);
//! ```

pub mod error;
pub mod estimators;
pub mod traits;

// Re-export main types
pub use error::{Error, Result};
pub use estimators::{linear, LinearInterpolation};
pub use traits::QuantileEstimator;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Error, LinearInterpolation, QuantileEstimator, Result};
}
