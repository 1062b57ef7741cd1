//! Memoized depth-first adversarial search.
//!
//! Each state is evaluated by minimax over the mover's legal steps:
//!
//! 1. Evader on the goal: Evader wins.
//! 2. Evader and Pursuer on the same node: Pursuer wins.
//! 3. State already on the recursion stack: Draw for this branch only.
//!    The repetition signal is never memoized.
//! 4. State already memoized: the stored outcome.
//! 5. Otherwise the mover picks the best child outcome (win, then draw,
//!    then loss), stopping at the first win. A mover with no legal step
//!    loses.
//!
//! Rule 3 is a termination heuristic rather than a proof of optimal play:
//! on some cyclic graphs it reports a Draw where exact analysis finds a
//! forced win (see [`retrograde`](super::retrograde)).

use std::ops::{Deref, DerefMut};
use std::time::Instant;

use log::{debug, trace};

use super::config::{SolveMethod, SolverConfig};
use super::memo::{InProgress, MemoTable};
use super::retrograde::RetrogradeTable;
use super::stats::SolveStats;
use crate::core::{GameState, NodeId, Outcome, Turn};
use crate::error::{Error, Result};
use crate::graph::Graph;

/// Pursuit game solver over a borrowed graph.
///
/// Owns the memo table and in-progress set of its solves. Solvers are
/// cheap; build one per thread to solve concurrently over a shared graph.
///
/// ```
/// use pursuit_solver::core::{NodeId, Outcome};
/// use pursuit_solver::graph::Graph;
/// use pursuit_solver::solver::Solver;
///
/// let graph = Graph::builder(3).edge(1, 2).edge(2, 0).build().unwrap();
/// let mut solver = Solver::new(&graph);
/// let outcome = solver.solve(NodeId::new(2), NodeId::new(1)).unwrap();
/// assert_eq!(outcome, Outcome::EvaderWin);
/// ```
pub struct Solver<'g> {
    /// The board.
    graph: &'g Graph,

    /// Solver configuration.
    config: SolverConfig,

    /// Finished states of the current solve.
    memo: MemoTable,

    /// States on the current recursion path.
    in_progress: InProgress,

    /// Current recursion depth.
    depth: u32,

    /// Statistics of the last solve.
    stats: SolveStats,
}

impl<'g> Solver<'g> {
    /// Create a solver with the default configuration.
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_config(graph, SolverConfig::default())
    }

    /// Create a solver with a custom configuration.
    pub fn with_config(graph: &'g Graph, config: SolverConfig) -> Self {
        Self {
            graph,
            memo: MemoTable::with_capacity(config.memo_capacity),
            in_progress: InProgress::default(),
            depth: 0,
            stats: SolveStats::default(),
            config,
        }
    }

    /// The graph being solved.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Statistics of the last solve.
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Number of states memoized by the last depth-first solve.
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Outcome memoized for `state` by the last depth-first solve.
    pub fn memoized(&self, state: &GameState) -> Option<Outcome> {
        self.memo.get(state)
    }

    /// Iterate over the memo table of the last depth-first solve.
    pub fn memo_entries(&self) -> impl Iterator<Item = (&GameState, &Outcome)> {
        self.memo.iter()
    }

    /// Solve the game from the given start nodes, with the configured
    /// first mover to play.
    ///
    /// Fails with [`Error::InvalidStart`] if either node is outside the
    /// graph.
    pub fn solve(&mut self, evader_start: NodeId, pursuer_start: NodeId) -> Result<Outcome> {
        let state = GameState::new(evader_start, pursuer_start, self.config.first_mover);
        self.evaluate(state)
    }

    /// Evaluate an arbitrary state, either side to move.
    ///
    /// Every call starts from an empty memo table.
    pub fn evaluate(&mut self, state: GameState) -> Result<Outcome> {
        self.check_start(Turn::Evader, state.evader)?;
        self.check_start(Turn::Pursuer, state.pursuer)?;

        self.memo.clear();
        self.in_progress.clear();
        self.depth = 0;
        self.stats.reset();

        let start = Instant::now();
        let outcome = match self.config.method {
            SolveMethod::DepthFirst => self.search(state),
            SolveMethod::Retrograde => RetrogradeTable::analyze(self.graph).outcome(state),
        };
        self.stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            "solved {state} with {:?}: {outcome} ({} states, {} memo hits, {} repetitions, depth {})",
            self.config.method,
            self.stats.states_evaluated,
            self.stats.memo_hits,
            self.stats.repetition_hits,
            self.stats.max_depth,
        );
        Ok(outcome)
    }

    fn check_start(&self, role: Turn, node: NodeId) -> Result<()> {
        if self.graph.contains(node) {
            Ok(())
        } else {
            Err(Error::InvalidStart {
                role,
                node: i64::from(node.0),
                node_count: self.graph.node_count(),
            })
        }
    }

    /// Value of `state`, memoizing it once fully evaluated.
    fn search(&mut self, state: GameState) -> Outcome {
        if let Some(outcome) = state.terminal() {
            self.stats.terminal_hits += 1;
            return outcome;
        }
        if self.in_progress.contains(&state) {
            self.stats.repetition_hits += 1;
            trace!("repetition at {state}, counted as draw");
            return Outcome::Draw;
        }
        if let Some(outcome) = self.memo.get(&state) {
            self.stats.memo_hits += 1;
            return outcome;
        }

        let outcome = PathScope::enter(self, state).best_reply(state);
        self.memo.record(state, outcome);
        outcome
    }

    /// Best outcome the mover can reach from `state`.
    fn best_reply(&mut self, state: GameState) -> Outcome {
        self.stats.states_evaluated += 1;

        let mover = state.turn;
        let graph = self.graph;
        let mut best = Outcome::loss_for(mover);
        for &next in graph.neighbors(state.mover_node()) {
            if !state.allows(next) {
                continue;
            }
            let child = self.search(state.advance(next));
            if child.is_win_for(mover) {
                return child;
            }
            if child.prefers(mover, best) {
                best = child;
            }
        }
        best
    }
}

/// Marks a state as on the recursion path for as long as it lives.
///
/// Dropping the scope unmarks the state, so every exit path of an
/// evaluation (including an early return on a win) restores the set.
struct PathScope<'s, 'g> {
    solver: &'s mut Solver<'g>,
    state: GameState,
}

impl<'s, 'g> PathScope<'s, 'g> {
    fn enter(solver: &'s mut Solver<'g>, state: GameState) -> Self {
        solver.in_progress.enter(state);
        solver.depth += 1;
        solver.stats.max_depth = solver.stats.max_depth.max(solver.depth);
        Self { solver, state }
    }
}

impl<'g> Deref for PathScope<'_, 'g> {
    type Target = Solver<'g>;

    fn deref(&self) -> &Self::Target {
        self.solver
    }
}

impl DerefMut for PathScope<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.solver
    }
}

impl Drop for PathScope<'_, '_> {
    fn drop(&mut self) {
        self.solver.in_progress.leave(&self.state);
        self.solver.depth -= 1;
    }
}

/// Solve with the default configuration.
///
/// ```
/// use pursuit_solver::core::{NodeId, Outcome};
/// use pursuit_solver::graph::build_graph;
/// use pursuit_solver::solver::solve;
///
/// let graph = build_graph(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
/// assert_eq!(solve(&graph, NodeId::new(2), NodeId::new(1)).unwrap(), Outcome::EvaderWin);
/// ```
pub fn solve(graph: &Graph, evader_start: NodeId, pursuer_start: NodeId) -> Result<Outcome> {
    Solver::new(graph).solve(evader_start, pursuer_start)
}

/// Solve with the default configuration and return the statistics too.
pub fn solve_with_stats(
    graph: &Graph,
    evader_start: NodeId,
    pursuer_start: NodeId,
) -> Result<(Outcome, SolveStats)> {
    let mut solver = Solver::new(graph);
    let outcome = solver.solve(evader_start, pursuer_start)?;
    Ok((outcome, solver.stats().clone()))
}

/// The treasure-hunt setup: build the board from adjacency lists and solve
/// with the Evader on node 1, the Pursuer on node 2 and the Evader to move.
///
/// ```
/// use pursuit_solver::core::Outcome;
/// use pursuit_solver::solver::treasure_game;
///
/// let board = [vec![2, 5], vec![3], vec![0, 4, 5], vec![1, 4, 5], vec![2, 3], vec![0, 2, 3]];
/// assert_eq!(treasure_game(&board).unwrap(), Outcome::Draw);
/// ```
pub fn treasure_game(adjacency: &[Vec<usize>]) -> Result<Outcome> {
    let graph = Graph::from_adjacency(adjacency)?;
    solve(&graph, NodeId::new(1), NodeId::new(2))
}
