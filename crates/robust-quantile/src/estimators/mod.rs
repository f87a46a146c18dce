//! Concrete quantile estimator implementations

mod linear;

pub use linear::{linear, LinearInterpolation};
