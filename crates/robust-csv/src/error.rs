//! Error types for CSV input and output

use thiserror::Error;

/// Errors raised while reading observations or writing records
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed CSV or a cell that does not fit its column type
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A timestamp cell matched none of the accepted formats
    #[error("Invalid timestamp {value:?} on line {line}")]
    InvalidTimestamp { line: u64, value: String },

    /// A required column is absent from the header
    #[error("Missing required column {0:?}")]
    MissingField(&'static str),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for robust_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(inner) => robust_core::Error::Io(inner),
            other => robust_core::Error::InvalidInput(other.to_string()),
        }
    }
}
