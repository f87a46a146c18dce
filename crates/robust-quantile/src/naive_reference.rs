//! Naive reference implementation of the type 7 quantile
//!
//! Written directly from the textbook definition (1-based rank
//! `1 + (n - 1) p`, clamp, interpolate) with no shared code. It sorts a copy
//! on every call and is only used to cross-check the optimized paths.
//!
//! DO NOT USE IN PRODUCTION - these are for testing and debugging only!

pub struct NaiveLinearQuantile;

impl NaiveLinearQuantile {
    pub fn quantile(data: &[f64], p: f64) -> f64 {
        assert!(!data.is_empty(), "Cannot compute quantile of empty data");
        assert!((0.0..=1.0).contains(&p), "Probability must be in [0, 1]");

        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let n = sorted.len() as f64;
        let rank = 1.0 + (n - 1.0) * p;
        let below = rank.floor();
        let above = rank.ceil();

        let x_below = sorted[below as usize - 1];
        let x_above = sorted[above as usize - 1];
        x_below + (rank - below) * (x_above - x_below)
    }

    pub fn iqr(data: &[f64]) -> f64 {
        Self::quantile(data, 0.75) - Self::quantile(data, 0.25)
    }
}
