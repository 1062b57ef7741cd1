//! Solver configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::Turn;

/// How a solve evaluates the start state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveMethod {
    /// Memoized depth-first minimax. A state met again while it is still
    /// being evaluated counts as a Draw for that branch.
    #[default]
    DepthFirst,
    /// Exact backward induction over the whole state space.
    Retrograde,
}

/// Solver configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Evaluation method (default: depth-first).
    pub method: SolveMethod,

    /// Side to move in the start position (default: Evader).
    pub first_mover: Turn,

    /// Initial capacity of the memo table.
    /// Only a sizing hint; the table grows as needed.
    pub memo_capacity: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            method: SolveMethod::DepthFirst,
            first_mover: Turn::Evader,
            memo_capacity: 256,
        }
    }
}

impl SolverConfig {
    /// Create a new config with a different evaluation method.
    pub fn with_method(mut self, method: SolveMethod) -> Self {
        self.method = method;
        self
    }

    /// Create a new config with a different first mover.
    pub fn with_first_mover(mut self, turn: Turn) -> Self {
        self.first_mover = turn;
        self
    }

    /// Create a new config with a different memo capacity hint.
    pub fn with_memo_capacity(mut self, capacity: usize) -> Self {
        self.memo_capacity = capacity;
        self
    }
}
