//! # Robust Rolling Statistics
//!
//! Windowed median and interquartile range for a single ordered series,
//! updated one observation at a time.
//!
//! ## Key Features
//!
//! - **Bounded window**: the most recent `window_size` observations, oldest
//!   evicted first
//! - **Missing values**: NaN observations occupy a slot but are excluded
//!   from the order statistics
//! - **Explicit warm-up**: statistics stay undefined until `min_periods`
//!   non-missing values are present
//! - **Incremental order statistics**: the sorted view is maintained on
//!   insert/evict instead of re-sorting the window on each update
//!
//! ## Example
//!
//! ```rust
//! use robust_rolling::{DefaultWindowedEstimator, OnlineRobustEstimator, RollingParameters};
//!
//! let mut est = DefaultWindowedEstimator::new(RollingParameters::new(24));
//! for _ in 0..8 {
//!     est.update(5.0).unwrap();
//! }
//! let stats = est.update(6.0).unwrap();
//! assert_eq!(stats.median, Some(5.0));
//! ```

pub mod estimator;
pub mod naive;
pub mod traits;
pub mod types;
pub mod window;

// Re-exports
pub use estimator::{DefaultWindowedEstimator, WindowedRobustEstimator};
pub use naive::NaiveWindowedEstimator;
pub use traits::OnlineRobustEstimator;
pub use types::{default_min_periods, RollingParameters, RollingStats, DEFAULT_WINDOW_SIZE};
pub use window::RollingWindow;
