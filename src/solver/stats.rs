//! Solve statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one solve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// States whose moves were expanded.
    pub states_evaluated: u64,

    /// Lookups answered by the memo table.
    pub memo_hits: u64,

    /// Lookups that found the state still on the recursion stack.
    pub repetition_hits: u64,

    /// Lookups that hit a finished game (goal reached or capture).
    pub terminal_hits: u64,

    /// Deepest recursion reached.
    pub max_depth: u32,

    /// Total time spent solving (microseconds).
    pub time_us: u64,
}

impl SolveStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// All state lookups, whatever answered them.
    #[must_use]
    pub fn lookups(&self) -> u64 {
        self.states_evaluated + self.memo_hits + self.repetition_hits + self.terminal_hits
    }

    /// Fraction of lookups answered by the memo table.
    #[must_use]
    pub fn memo_hit_rate(&self) -> f64 {
        let lookups = self.lookups();
        if lookups == 0 {
            0.0
        } else {
            self.memo_hits as f64 / lookups as f64
        }
    }
}
