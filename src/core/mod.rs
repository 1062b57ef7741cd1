//! Core game types: nodes, turns, outcomes, states, RNG.
//!
//! These are the building blocks shared by the graph model and the solver.

pub mod node;
pub mod outcome;
pub mod rng;
pub mod state;
pub mod turn;

pub use node::NodeId;
pub use outcome::Outcome;
pub use rng::GraphRng;
pub use state::GameState;
pub use turn::Turn;
