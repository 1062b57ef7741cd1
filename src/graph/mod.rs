//! The board: an immutable directed graph.
//!
//! Node 0 is the Evader's goal. Graphs are validated once at construction
//! and never change afterwards.

pub mod adjacency;
pub mod builder;
pub mod generate;

pub use adjacency::{Graph, Neighbors};
pub use builder::{build_graph, GraphBuilder};
