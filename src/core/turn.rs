//! Whose turn it is.
//!
//! The two roles strictly alternate: every ply flips the turn and there is
//! no pass. The same enum names the roles themselves (e.g. in error
//! messages about an out-of-range start node).

use serde::{Deserialize, Serialize};

/// The player to move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// The Evader moves next.
    #[default]
    Evader,
    /// The Pursuer moves next.
    Pursuer,
}

impl Turn {
    /// Both turns, Evader first.
    pub const ALL: [Turn; 2] = [Turn::Evader, Turn::Pursuer];

    /// The turn after this one.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Turn::Evader => Turn::Pursuer,
            Turn::Pursuer => Turn::Evader,
        }
    }

    /// Dense index (Evader = 0, Pursuer = 1).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Turn::Evader => 0,
            Turn::Pursuer => 1,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Evader => write!(f, "Evader"),
            Turn::Pursuer => write!(f, "Pursuer"),
        }
    }
}
