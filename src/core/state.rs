//! Joint game state: both positions plus the side to move.

use serde::{Deserialize, Serialize};

use super::node::NodeId;
use super::outcome::Outcome;
use super::turn::Turn;

/// A position in the pursuit game.
///
/// States are small `Copy` values. The search builds one per recursive
/// call and never keeps them beyond the memo table of a single solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Node the Evader stands on.
    pub evader: NodeId,
    /// Node the Pursuer stands on.
    pub pursuer: NodeId,
    /// Side to move.
    pub turn: Turn,
}

impl GameState {
    /// Create a new state.
    #[must_use]
    pub const fn new(evader: NodeId, pursuer: NodeId, turn: Turn) -> Self {
        Self { evader, pursuer, turn }
    }

    /// Decided outcome of this state, if the game is already over.
    ///
    /// Reaching the goal is checked first, so an Evader on node 0 wins even
    /// when the Pursuer shares the node.
    #[must_use]
    pub fn terminal(&self) -> Option<Outcome> {
        if self.evader.is_goal() {
            Some(Outcome::EvaderWin)
        } else if self.evader == self.pursuer {
            Some(Outcome::PursuerWin)
        } else {
            None
        }
    }

    /// Node of the side to move.
    #[must_use]
    pub const fn mover_node(&self) -> NodeId {
        match self.turn {
            Turn::Evader => self.evader,
            Turn::Pursuer => self.pursuer,
        }
    }

    /// State after the side to move steps to `to`.
    #[must_use]
    pub const fn advance(&self, to: NodeId) -> Self {
        match self.turn {
            Turn::Evader => Self::new(to, self.pursuer, Turn::Pursuer),
            Turn::Pursuer => Self::new(self.evader, to, Turn::Evader),
        }
    }

    /// Check if the side to move may step onto `to`.
    ///
    /// The Pursuer may never enter the goal; the Evader may go anywhere.
    #[must_use]
    pub const fn allows(&self, to: NodeId) -> bool {
        match self.turn {
            Turn::Evader => true,
            Turn::Pursuer => !to.is_goal(),
        }
    }

    /// Dense index in a table of `node_count * node_count * 2` states.
    #[inline]
    #[must_use]
    pub const fn dense_index(&self, node_count: usize) -> usize {
        (self.evader.index() * node_count + self.pursuer.index()) * 2 + self.turn.index()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(evader {}, pursuer {}, {} to move)",
            self.evader, self.pursuer, self.turn
        )
    }
}
