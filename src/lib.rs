//! # pursuit-solver
//!
//! A solver for a two-player pursuit game on a directed graph.
//!
//! ## The Game
//!
//! - The **Evader** wins by reaching node 0, the goal.
//! - The **Pursuer** wins by standing on the Evader's node. It may never
//!   enter the goal.
//! - Players alternate single steps along edges; there is no pass. If
//!   neither side can force its goal the game is a **Draw**.
//!
//! ## Architecture
//!
//! - **Immutable board**: a [`Graph`] is validated once and shared
//!   read-only, so independent solves may run on separate threads.
//! - **Owned search state**: each [`Solver`] owns its memo table and
//!   in-progress set; nothing is global.
//! - **Two evaluators**: memoized depth-first minimax with repetition
//!   detection (the default) and exact retrograde analysis.
//!
//! ## Modules
//!
//! - `core`: Node IDs, turns, outcomes, game states, RNG
//! - `graph`: Graph model, builder, generators
//! - `solver`: Depth-first search, retrograde analysis, config, stats
//! - `error`: Crate error type
//!
//! ## Example
//!
//! ```
//! use pursuit_solver::{build_graph, solve, NodeId, Outcome};
//!
//! let graph = build_graph(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
//! let outcome = solve(&graph, NodeId::new(2), NodeId::new(1)).unwrap();
//! assert_eq!(outcome, Outcome::EvaderWin);
//! ```

pub mod core;
pub mod error;
pub mod graph;
pub mod solver;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{GameState, GraphRng, NodeId, Outcome, Turn};

pub use crate::error::{Error, Result};

pub use crate::graph::{build_graph, Graph, GraphBuilder};

pub use crate::solver::{
    solve, solve_exact, solve_with_stats, treasure_game, RetrogradeTable, SolveMethod,
    SolveStats, Solver, SolverConfig,
};
