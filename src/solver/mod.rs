//! Adversarial search for the pursuit game.
//!
//! ## Overview
//!
//! - **Depth-first search** ([`Solver`]): memoized minimax with repetition
//!   detection. The default, and the reference behavior of [`solve`].
//! - **Retrograde analysis** ([`RetrogradeTable`]): exact labels for the
//!   whole state space, available through [`solve_exact`] or
//!   [`SolveMethod::Retrograde`].
//!
//! ## Usage
//!
//! ```rust
//! use pursuit_solver::core::{NodeId, Outcome};
//! use pursuit_solver::graph::Graph;
//! use pursuit_solver::solver::{SolveMethod, Solver, SolverConfig};
//!
//! let graph = Graph::builder(4)
//!     .undirected_edge(0, 1)
//!     .undirected_edge(1, 2)
//!     .undirected_edge(2, 3)
//!     .build()
//!     .unwrap();
//!
//! let mut solver = Solver::new(&graph);
//! assert_eq!(solver.solve(NodeId::new(1), NodeId::new(3)).unwrap(), Outcome::EvaderWin);
//!
//! let exact = SolverConfig::default().with_method(SolveMethod::Retrograde);
//! let mut solver = Solver::with_config(&graph, exact);
//! assert_eq!(solver.solve(NodeId::new(1), NodeId::new(3)).unwrap(), Outcome::EvaderWin);
//! ```

pub mod config;
pub mod memo;
pub mod retrograde;
pub mod search;
pub mod stats;

pub use config::{SolveMethod, SolverConfig};
pub use memo::{InProgress, MemoTable};
pub use retrograde::{solve_exact, RetrogradeTable};
pub use search::{solve, solve_with_stats, treasure_game, Solver};
pub use stats::SolveStats;
