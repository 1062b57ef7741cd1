//! Game-theoretic verdicts.
//!
//! Outcomes are ordered per mover rather than numerically: the Evader ranks
//! `EvaderWin > Draw > PursuerWin`, the Pursuer ranks them the other way.

use serde::{Deserialize, Serialize};

use super::turn::Turn;

/// Verdict of a state under optimal play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Neither side can force a win.
    Draw,
    /// The Evader reaches the goal.
    EvaderWin,
    /// The Pursuer catches the Evader.
    PursuerWin,
}

impl Outcome {
    /// The outcome in which `turn`'s player wins.
    #[must_use]
    pub const fn win_for(turn: Turn) -> Self {
        match turn {
            Turn::Evader => Outcome::EvaderWin,
            Turn::Pursuer => Outcome::PursuerWin,
        }
    }

    /// The outcome in which `turn`'s player loses.
    #[must_use]
    pub const fn loss_for(turn: Turn) -> Self {
        Self::win_for(turn.other())
    }

    /// Check if `turn`'s player wins.
    #[must_use]
    pub fn is_win_for(self, turn: Turn) -> bool {
        self == Self::win_for(turn)
    }

    /// Check if this is a draw.
    #[must_use]
    pub fn is_draw(self) -> bool {
        self == Outcome::Draw
    }

    /// Rank of this outcome from `turn`'s perspective (higher is better).
    #[must_use]
    pub fn rank_for(self, turn: Turn) -> u8 {
        match self {
            Outcome::Draw => 1,
            o if o.is_win_for(turn) => 2,
            _ => 0,
        }
    }

    /// Check if `turn`'s player strictly prefers `self` over `other`.
    #[must_use]
    pub fn prefers(self, turn: Turn, other: Outcome) -> bool {
        self.rank_for(turn) > other.rank_for(turn)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Draw => write!(f, "Draw"),
            Outcome::EvaderWin => write!(f, "Evader wins"),
            Outcome::PursuerWin => write!(f, "Pursuer wins"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_and_loss() {
        assert_eq!(Outcome::win_for(Turn::Evader), Outcome::EvaderWin);
        assert_eq!(Outcome::win_for(Turn::Pursuer), Outcome::PursuerWin);
        assert_eq!(Outcome::loss_for(Turn::Evader), Outcome::PursuerWin);
        assert_eq!(Outcome::loss_for(Turn::Pursuer), Outcome::EvaderWin);
    }

    #[test]
    fn test_evader_ordering() {
        let e = Turn::Evader;
        assert!(Outcome::EvaderWin.prefers(e, Outcome::Draw));
        assert!(Outcome::Draw.prefers(e, Outcome::PursuerWin));
        assert!(!Outcome::PursuerWin.prefers(e, Outcome::Draw));
    }

    #[test]
    fn test_pursuer_ordering() {
        let p = Turn::Pursuer;
        assert!(Outcome::PursuerWin.prefers(p, Outcome::Draw));
        assert!(Outcome::Draw.prefers(p, Outcome::EvaderWin));
        assert!(!Outcome::Draw.prefers(p, Outcome::Draw));
    }

    #[test]
    fn test_draw_is_neither_win() {
        assert!(Outcome::Draw.is_draw());
        assert!(!Outcome::Draw.is_win_for(Turn::Evader));
        assert!(!Outcome::Draw.is_win_for(Turn::Pursuer));
    }
}
