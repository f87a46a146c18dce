//! Error types for quantile estimation

use thiserror::Error;

/// Errors that can occur during quantile estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Empty data provided
    #[error("Cannot compute quantile of empty data")]
    EmptyData,

    /// Invalid quantile probability
    #[error("Quantile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// A sample value was NaN or infinite
    #[error("Sample contains a non-finite value at position {index}")]
    NonFinite { index: usize },

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] robust_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check if probability is valid
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }

    /// Check if data is non-empty
    pub fn check_non_empty(data: &[f64]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptyData);
        }
        Ok(())
    }
}

impl From<Error> for robust_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Core(inner) => inner,
            Error::EmptyData => robust_core::Error::InsufficientData {
                expected: 1,
                actual: 0,
            },
            Error::InvalidProbability { p } => robust_core::Error::invalid_quantile(p),
            other => robust_core::Error::InvalidInput(other.to_string()),
        }
    }
}
