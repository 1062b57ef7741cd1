//! Immutable adjacency structure.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::builder::GraphBuilder;
use crate::core::NodeId;
use crate::error::{Error, Result};

/// Neighbor list of a single node. Most pursuit boards have low degree.
pub type Neighbors = SmallVec<[NodeId; 4]>;

/// Directed graph over nodes `0..node_count`.
///
/// Built once through [`GraphBuilder`] and never mutated afterwards, so a
/// `&Graph` can be shared freely between solvers on different threads.
/// Every node has an entry, possibly empty. Neighbors keep insertion order
/// and a repeated edge is stored once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphRepr", into = "GraphRepr")]
pub struct Graph {
    adjacency: Vec<Neighbors>,
    edge_count: usize,
}

impl Graph {
    /// Start building a graph with `node_count` nodes.
    pub fn builder(node_count: usize) -> GraphBuilder {
        GraphBuilder::new(node_count)
    }

    /// Build from per-node neighbor lists: `lists[i]` holds the successors
    /// of node `i`.
    ///
    /// ```
    /// use pursuit_solver::graph::Graph;
    /// use pursuit_solver::core::NodeId;
    ///
    /// let graph = Graph::from_adjacency(&[vec![1], vec![0, 2], vec![]]).unwrap();
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.neighbors(NodeId::new(1)), &[NodeId::new(0), NodeId::new(2)]);
    /// ```
    pub fn from_adjacency(lists: &[Vec<usize>]) -> Result<Self> {
        let mut builder = GraphBuilder::new(lists.len());
        for (from, list) in lists.iter().enumerate() {
            for &to in list {
                builder = builder.edge(from, to);
            }
        }
        builder.build()
    }

    pub(super) fn from_parts(adjacency: Vec<Neighbors>) -> Self {
        let edge_count = adjacency.iter().map(|list| list.len()).sum();
        Self {
            adjacency,
            edge_count,
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check if `node` belongs to this graph.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        node.in_range(self.node_count())
    }

    /// Successors of `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in the graph.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[node.index()]
    }

    /// Check if the directed edge `from -> to` exists.
    #[must_use]
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.contains(from) && self.neighbors(from).contains(&to)
    }

    /// Iterate over all node IDs.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        NodeId::all(self.node_count())
    }

    /// Iterate over all directed edges as `(from, to)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes()
            .flat_map(move |from| self.neighbors(from).iter().map(move |&to| (from, to)))
    }

    /// The graph with every edge reversed.
    #[must_use]
    pub fn reversed(&self) -> Graph {
        let mut adjacency = vec![Neighbors::new(); self.node_count()];
        for (from, to) in self.edges() {
            adjacency[to.index()].push(from);
        }
        Self::from_parts(adjacency)
    }

    /// Encode as a compact bincode snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`Graph::to_bytes`].
    ///
    /// The payload is validated like any other construction.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Wire shape of a graph; validated on the way in.
#[derive(Serialize, Deserialize)]
struct GraphRepr {
    node_count: usize,
    adjacency: Vec<Vec<u32>>,
}

impl TryFrom<GraphRepr> for Graph {
    type Error = Error;

    fn try_from(repr: GraphRepr) -> Result<Self> {
        if repr.adjacency.len() != repr.node_count {
            return Err(Error::invalid_graph(format!(
                "expected {} adjacency lists, got {}",
                repr.node_count,
                repr.adjacency.len()
            )));
        }
        let mut builder = GraphBuilder::new(repr.node_count);
        for (from, list) in repr.adjacency.iter().enumerate() {
            for &to in list {
                builder = builder.edge(from, to as usize);
            }
        }
        builder.build()
    }
}

impl From<Graph> for GraphRepr {
    fn from(graph: Graph) -> Self {
        Self {
            node_count: graph.node_count(),
            adjacency: graph
                .adjacency
                .iter()
                .map(|list| list.iter().map(|n| n.0).collect())
                .collect(),
        }
    }
}
