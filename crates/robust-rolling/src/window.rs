//! Bounded, insertion-ordered window with a sorted view
//!
//! The window keeps two structures in lockstep:
//!
//! - `buffer`: every pushed value (missing ones included) in arrival order,
//!   capped at `capacity`; the oldest is evicted first.
//! - `sorted`: the finite values currently in `buffer`, ascending.
//!
//! Each push is a binary search plus one shifted insert (and at most one
//! shifted removal), so quantiles never require re-sorting the window.

use std::collections::VecDeque;

/// Upper bound on the storage reserved when a window is created
///
/// Larger windows grow on demand as observations arrive.
pub const MAX_PREALLOCATED: usize = 1024;

/// Whether a value takes part in order statistics
#[inline]
pub fn is_present(value: f64) -> bool {
    value.is_finite()
}

/// Fixed-capacity rolling window over `f64` observations
#[derive(Debug, Clone)]
pub struct RollingWindow {
    capacity: usize,
    buffer: VecDeque<f64>,
    sorted: Vec<f64>,
}

impl RollingWindow {
    /// Create an empty window holding at most `capacity` observations
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            buffer: VecDeque::with_capacity(capacity.min(MAX_PREALLOCATED).saturating_add(1)),
            sorted: Vec::with_capacity(capacity.min(MAX_PREALLOCATED)),
        }
    }

    /// Append `value`, evicting the oldest observation once over capacity
    ///
    /// Returns the evicted observation, if any. Non-finite values occupy a
    /// slot in arrival order but never enter the sorted view.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        // -0.0 and 0.0 must compare equal under total_cmp as well
        let value = if value == 0.0 { 0.0 } else { value };
        self.buffer.push_back(value);
        if is_present(value) {
            let at = self.sorted.partition_point(|x| x.total_cmp(&value).is_lt());
            self.sorted.insert(at, value);
        }

        if self.buffer.len() <= self.capacity {
            return None;
        }

        let evicted = self.buffer.pop_front()?;
        if is_present(evicted) {
            if let Ok(at) = self.sorted.binary_search_by(|x| x.total_cmp(&evicted)) {
                self.sorted.remove(at);
            }
        }
        Some(evicted)
    }

    /// Finite values currently in the window, ascending
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    /// Observations in arrival order, missing values included
    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.buffer.iter()
    }

    /// Number of observations held, missing values included
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of non-missing values held
    pub fn valid_count(&self) -> usize {
        self.sorted.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.sorted.clear();
    }
}
