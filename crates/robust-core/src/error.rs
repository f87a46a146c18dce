//! Error types for robust anomaly detection
//!
//! Provides a unified error type for all robust-* crates.

use thiserror::Error;

/// Core error type for robust statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The input stream contained no observations at all
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// The same (station, timestamp) key appeared more than once
    #[error("Duplicate observation for station {station} at {timestamp}")]
    DuplicateObservation { station: String, timestamp: String },

    /// Work was cancelled before every station group completed
    #[error("Cancelled after {completed} of {total} station groups")]
    Cancelled { completed: usize, total: usize },

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::EmptyInput(format!("{operation} requires at least one observation"))
    }

    /// Create an error for invalid quantile
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }

    /// Create an error for a duplicated observation key
    pub fn duplicate(station: impl Into<String>, timestamp: impl ToString) -> Self {
        Self::DuplicateObservation {
            station: station.into(),
            timestamp: timestamp.to_string(),
        }
    }

    /// Whether this error is a precondition failure on the caller's input
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_)
                | Self::InvalidInput(_)
                | Self::EmptyInput(_)
                | Self::DuplicateObservation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("window_size must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid parameter: window_size must be positive"
        );

        let err = Error::InsufficientData {
            expected: 8,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 8 samples, got 5"
        );

        let err = Error::duplicate("16107", "2024-05-01 13:00:00+00:00");
        assert_eq!(
            err.to_string(),
            "Duplicate observation for station 16107 at 2024-05-01 13:00:00+00:00"
        );

        let err = Error::Cancelled {
            completed: 3,
            total: 10,
        };
        assert_eq!(err.to_string(), "Cancelled after 3 of 10 station groups");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_input("anomaly detection");
        assert!(matches!(err, Error::EmptyInput(_)));
        assert!(err.to_string().contains("anomaly detection"));

        let err = Error::invalid_quantile(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Quantile 1.5 must be in [0, 1]"
        );
    }

    #[test]
    fn test_precondition_classification() {
        assert!(Error::empty_input("x").is_precondition());
        assert!(Error::duplicate("a", "t").is_precondition());
        assert!(Error::InvalidParameter("p".into()).is_precondition());
        assert!(!Error::Cancelled {
            completed: 0,
            total: 1
        }
        .is_precondition());
        assert!(!Error::Execution("pool".into()).is_precondition());
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {
                assert!(err.to_string().contains("file not found"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().contains("custom error message"));
    }
}
