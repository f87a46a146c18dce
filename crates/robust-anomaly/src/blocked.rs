//! Blocked-run tracker
//!
//! A station is *blocked* when it reports zero bikes and zero free docks at
//! once. The tracker counts consecutive blocked observations; the count has
//! no cap and any non-blocked observation resets it to zero.

/// Live state of one station's tracker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockState {
    #[default]
    Free,
    Blocked { run_length: usize },
}

impl BlockState {
    pub fn run_length(&self) -> usize {
        match self {
            BlockState::Free => 0,
            BlockState::Blocked { run_length } => *run_length,
        }
    }
}

/// Tracker output for one observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockedStatus {
    pub is_blocked_now: bool,
    pub run_length: usize,
    /// `run_length` has reached the tracker's threshold
    pub is_sustained: bool,
}

/// Zero bikes and zero docks; missing values are never blocked
pub fn is_blocked(bikes: f64, docks: f64) -> bool {
    bikes == 0.0 && docks == 0.0
}

/// Consecutive-blocked-observation counter for one station
#[derive(Debug, Clone)]
pub struct BlockedRunTracker {
    threshold: usize,
    state: BlockState,
}

impl BlockedRunTracker {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            state: BlockState::Free,
        }
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Advance on a bike/dock reading
    pub fn update(&mut self, bikes: f64, docks: f64) -> BlockedStatus {
        self.observe(is_blocked(bikes, docks))
    }

    /// Advance on an already-evaluated blocked predicate
    pub fn observe(&mut self, blocked_now: bool) -> BlockedStatus {
        self.state = match (self.state, blocked_now) {
            (_, false) => BlockState::Free,
            (BlockState::Free, true) => BlockState::Blocked { run_length: 1 },
            (BlockState::Blocked { run_length }, true) => BlockState::Blocked {
                run_length: run_length.saturating_add(1),
            },
        };

        let run_length = self.state.run_length();
        BlockedStatus {
            is_blocked_now: blocked_now,
            run_length,
            is_sustained: run_length >= self.threshold,
        }
    }

    pub fn reset(&mut self) {
        self.state = BlockState::Free;
    }
}

impl Default for BlockedRunTracker {
    fn default() -> Self {
        Self::new(crate::params::DEFAULT_BLOCKED_RUN_THRESHOLD)
    }
}
