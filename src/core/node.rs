//! Node identifiers.
//!
//! Nodes are dense indices `0..node_count`. Node 0 is the goal: the Evader
//! wins by standing on it and the Pursuer may never move onto it.
//!
//! ```
//! use pursuit_solver::core::NodeId;
//!
//! assert!(NodeId::GOAL.is_goal());
//! assert!(!NodeId::new(3).is_goal());
//! assert_eq!(NodeId::new(3).index(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// Index of a node in a [`Graph`](crate::graph::Graph).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The Evader's target node.
    pub const GOAL: NodeId = NodeId(0);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the node index as a `usize`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is the goal node.
    #[inline]
    #[must_use]
    pub const fn is_goal(self) -> bool {
        self.0 == 0
    }

    /// Check if this node exists in a graph with `node_count` nodes.
    #[inline]
    #[must_use]
    pub const fn in_range(self, node_count: usize) -> bool {
        self.index() < node_count
    }

    /// Iterate over all node IDs of a graph with `node_count` nodes.
    pub fn all(node_count: usize) -> impl Iterator<Item = NodeId> {
        (0..node_count as u32).map(NodeId)
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
