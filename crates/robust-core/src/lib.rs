//! Core types for robust anomaly detection
//!
//! This crate provides the pieces every other robust-* crate shares:
//!
//! - [`Error`] / [`Result`]: the error taxonomy. Precondition failures
//!   (empty input, duplicates, bad parameters) are fatal; insufficient
//!   history and degenerate spread are *not* errors and never reach this type.
//! - [`ExecutionEngine`]: sequential or Rayon-backed batch execution.
//! - [`CancellationToken`]: cooperative cancellation between work units.
//!
//! # Example
//!
//! ```rust
//! use robust_core::{execution::sequential, ExecutionEngine};
//!
//! let engine = sequential();
//! let doubled = engine.execute_batch(4, |i| i * 2);
//! assert_eq!(doubled, vec![0, 2, 4, 6]);
//! ```

pub mod cancel;
pub mod error;
pub mod execution;

// Re-export core types
pub use cancel::CancellationToken;
pub use error::{Error, Result};

pub use execution::{sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{CancellationToken, ExecutionEngine, ExecutionStrategy, Result, SequentialEngine};

    #[cfg(feature = "parallel")]
    pub use crate::ParallelEngine;
}
