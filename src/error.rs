//! Error types for the pursuit solver.

use thiserror::Error;

use crate::core::Turn;

/// Main error type for the pursuit solver.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Graph construction was given bad input.
    #[error("invalid graph: {message}")]
    InvalidGraph { message: String },

    /// A start node lies outside the graph.
    #[error("invalid start: {role} start node {node} is outside 0..{node_count}")]
    InvalidStart {
        role: Turn,
        node: i64,
        node_count: usize,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

impl Error {
    pub(crate) fn invalid_graph(message: impl Into<String>) -> Self {
        Error::InvalidGraph {
            message: message.into(),
        }
    }

    pub(crate) fn edge_out_of_range(
        from: impl std::fmt::Display,
        to: impl std::fmt::Display,
        node_count: usize,
    ) -> Self {
        Self::invalid_graph(format!(
            "edge {from} -> {to} has an endpoint outside 0..{node_count}"
        ))
    }
}

/// Result alias for pursuit solver operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_graph_message() {
        let err = Error::edge_out_of_range(1, 9, 4);
        assert_eq!(
            err.to_string(),
            "invalid graph: edge 1 -> 9 has an endpoint outside 0..4"
        );
    }

    #[test]
    fn test_invalid_start_message() {
        let err = Error::InvalidStart {
            role: Turn::Pursuer,
            node: 7,
            node_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid start: Pursuer start node 7 is outside 0..3"
        );
    }
}
