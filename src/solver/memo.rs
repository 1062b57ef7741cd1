//! Per-solve bookkeeping: finished results and the active recursion path.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{GameState, Outcome};

/// Outcomes of fully evaluated states.
///
/// Owned by a single solve. A state is recorded once; recording it again
/// with a different outcome is a logic error.
#[derive(Clone, Debug, Default)]
pub struct MemoTable {
    entries: FxHashMap<GameState, Outcome>,
}

impl MemoTable {
    /// Create an empty table sized for roughly `capacity` states.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Outcome recorded for `state`, if any.
    #[must_use]
    pub fn get(&self, state: &GameState) -> Option<Outcome> {
        self.entries.get(state).copied()
    }

    /// Record the outcome of a finished state.
    pub fn record(&mut self, state: GameState, outcome: Outcome) {
        let previous = self.entries.insert(state, outcome);
        debug_assert!(
            previous.is_none() || previous == Some(outcome),
            "memo entry for {state} changed from {previous:?} to {outcome:?}"
        );
    }

    /// Number of recorded states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over recorded `(state, outcome)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&GameState, &Outcome)> {
        self.entries.iter()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// States currently on the recursion stack.
#[derive(Clone, Debug, Default)]
pub struct InProgress {
    states: FxHashSet<GameState>,
}

impl InProgress {
    /// Mark `state` as being evaluated. Returns `false` if it already was.
    pub fn enter(&mut self, state: GameState) -> bool {
        self.states.insert(state)
    }

    /// Unmark `state`.
    pub fn leave(&mut self, state: &GameState) {
        self.states.remove(state);
    }

    /// Check if `state` is being evaluated.
    #[must_use]
    pub fn contains(&self, state: &GameState) -> bool {
        self.states.contains(state)
    }

    /// Number of states on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.states.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NodeId, Turn};

    fn state(e: u32, p: u32) -> GameState {
        GameState::new(NodeId::new(e), NodeId::new(p), Turn::Evader)
    }

    #[test]
    fn test_memo_record_and_get() {
        let mut memo = MemoTable::with_capacity(4);
        assert!(memo.is_empty());

        memo.record(state(1, 2), Outcome::Draw);
        assert_eq!(memo.get(&state(1, 2)), Some(Outcome::Draw));
        assert_eq!(memo.get(&state(2, 1)), None);
        assert_eq!(memo.len(), 1);

        // Same outcome again is fine.
        memo.record(state(1, 2), Outcome::Draw);
        assert_eq!(memo.len(), 1);

        memo.clear();
        assert!(memo.is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "memo entry")]
    fn test_memo_rejects_changed_outcome() {
        let mut memo = MemoTable::default();
        memo.record(state(1, 2), Outcome::Draw);
        memo.record(state(1, 2), Outcome::EvaderWin);
    }

    #[test]
    fn test_in_progress_enter_leave() {
        let mut path = InProgress::default();
        assert!(path.enter(state(1, 2)));
        assert!(!path.enter(state(1, 2)));
        assert!(path.contains(&state(1, 2)));
        assert_eq!(path.len(), 1);

        path.leave(&state(1, 2));
        assert!(path.is_empty());
        assert!(!path.contains(&state(1, 2)));
    }
}
