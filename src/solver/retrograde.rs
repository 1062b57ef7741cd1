//! Exact retrograde analysis of the whole state space.
//!
//! Labels every `(evader, pursuer, turn)` state by backward induction from
//! finished games:
//!
//! - A state is won by the mover if some legal step reaches a state the
//!   mover has already won.
//! - A state is lost by the mover once every legal step reaches a state
//!   the opponent has won. A mover with no legal step loses immediately.
//! - States never labeled are Draws: neither side can force an end.
//!
//! Unlike the depth-first search this is exact on cyclic graphs, and it
//! runs iteratively over a work queue, so deep graphs cannot overflow the
//! stack. Cost is `O(N^2 * (N + E))` time and `O(N^2)` memory.

use std::collections::VecDeque;

use log::debug;

use crate::core::{GameState, NodeId, Outcome, Turn};
use crate::error::{Error, Result};
use crate::graph::Graph;

/// Outcome of every state of one graph.
#[derive(Clone, Debug)]
pub struct RetrogradeTable {
    node_count: usize,
    outcomes: Vec<Outcome>,
}

impl RetrogradeTable {
    /// Label every state of `graph`.
    pub fn analyze(graph: &Graph) -> Self {
        let n = graph.node_count();
        let reversed = graph.reversed();

        let mut labels: Vec<Option<Outcome>> = vec![None; n * n * 2];
        let mut remaining: Vec<usize> = vec![0; n * n * 2];
        let mut queue = VecDeque::new();

        for evader in graph.nodes() {
            for pursuer in graph.nodes() {
                for turn in Turn::ALL {
                    let state = GameState::new(evader, pursuer, turn);
                    let idx = state.dense_index(n);
                    let label = match state.terminal() {
                        Some(outcome) => Some(outcome),
                        None => {
                            remaining[idx] = legal_moves(graph, &state).count();
                            (remaining[idx] == 0).then(|| Outcome::loss_for(turn))
                        }
                    };
                    if let Some(outcome) = label {
                        labels[idx] = Some(outcome);
                        queue.push_back((state, outcome));
                    }
                }
            }
        }

        while let Some((state, outcome)) = queue.pop_front() {
            for pred in predecessors(&reversed, &state) {
                let idx = pred.dense_index(n);
                if labels[idx].is_some() {
                    continue;
                }
                if outcome.is_win_for(pred.turn) {
                    labels[idx] = Some(outcome);
                    queue.push_back((pred, outcome));
                } else {
                    remaining[idx] -= 1;
                    if remaining[idx] == 0 {
                        labels[idx] = Some(outcome);
                        queue.push_back((pred, outcome));
                    }
                }
            }
        }

        let outcomes: Vec<Outcome> = labels
            .into_iter()
            .map(|label| label.unwrap_or(Outcome::Draw))
            .collect();
        let table = Self {
            node_count: n,
            outcomes,
        };
        debug!(
            "retrograde analysis of {n} nodes: {} evader wins, {} pursuer wins, {} draws",
            table.count(Outcome::EvaderWin),
            table.count(Outcome::PursuerWin),
            table.count(Outcome::Draw),
        );
        table
    }

    /// Number of nodes of the analyzed graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Exact outcome of `state`.
    ///
    /// # Panics
    ///
    /// Panics if either position is outside the analyzed graph.
    #[must_use]
    pub fn outcome(&self, state: GameState) -> Outcome {
        assert!(
            state.evader.in_range(self.node_count) && state.pursuer.in_range(self.node_count),
            "state {state} outside a graph of {} nodes",
            self.node_count
        );
        self.outcomes[state.dense_index(self.node_count)]
    }

    /// Number of states with the given outcome.
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        self.outcomes.iter().filter(|&&o| o == outcome).count()
    }
}

/// Legal steps of the side to move.
fn legal_moves<'a>(graph: &'a Graph, state: &'a GameState) -> impl Iterator<Item = NodeId> + 'a {
    graph
        .neighbors(state.mover_node())
        .iter()
        .copied()
        .filter(move |&to| state.allows(to))
}

/// Non-terminal states with a legal step into `state`.
fn predecessors<'a>(
    reversed: &'a Graph,
    state: &'a GameState,
) -> impl Iterator<Item = GameState> + 'a {
    let previous = state.turn.other();
    let sources: &[NodeId] = match previous {
        Turn::Evader => reversed.neighbors(state.evader),
        // The Pursuer never steps onto the goal.
        Turn::Pursuer if state.pursuer.is_goal() => &[],
        Turn::Pursuer => reversed.neighbors(state.pursuer),
    };
    sources
        .iter()
        .map(move |&from| match previous {
            Turn::Evader => GameState::new(from, state.pursuer, previous),
            Turn::Pursuer => GameState::new(state.evader, from, previous),
        })
        .filter(|pred| pred.terminal().is_none())
}

/// Solve exactly by retrograde analysis.
pub fn solve_exact(graph: &Graph, evader_start: NodeId, pursuer_start: NodeId) -> Result<Outcome> {
    for (role, node) in [(Turn::Evader, evader_start), (Turn::Pursuer, pursuer_start)] {
        if !graph.contains(node) {
            return Err(Error::InvalidStart {
                role,
                node: i64::from(node.0),
                node_count: graph.node_count(),
            });
        }
    }
    let state = GameState::new(evader_start, pursuer_start, Turn::Evader);
    Ok(RetrogradeTable::analyze(graph).outcome(state))
}
