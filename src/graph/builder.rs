//! Validating graph construction.

use log::debug;

use super::adjacency::{Graph, Neighbors};
use crate::core::NodeId;
use crate::error::{Error, Result};

/// Builder for [`Graph`].
///
/// Edges are collected unchecked and validated all at once by
/// [`GraphBuilder::build`], which reports the first bad edge.
///
/// ```
/// use pursuit_solver::graph::Graph;
///
/// let graph = Graph::builder(3)
///     .undirected_edge(0, 1)
///     .edge(1, 2)
///     .build()
///     .unwrap();
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    node_count: usize,
    edges: Vec<(usize, usize)>,
}

impl GraphBuilder {
    /// Create a builder for `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
        }
    }

    /// Add the directed edge `from -> to`.
    pub fn edge(mut self, from: usize, to: usize) -> Self {
        self.edges.push((from, to));
        self
    }

    /// Add both `a -> b` and `b -> a`.
    pub fn undirected_edge(self, a: usize, b: usize) -> Self {
        self.edge(a, b).edge(b, a)
    }

    /// Add many directed edges.
    pub fn edges(mut self, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Validate and build the graph.
    ///
    /// Fails with [`Error::InvalidGraph`] if the graph has no nodes, more
    /// nodes than a [`NodeId`] can address, or an edge endpoint outside
    /// `0..node_count`.
    pub fn build(self) -> Result<Graph> {
        let node_count = self.node_count;
        if node_count == 0 {
            return Err(Error::invalid_graph("graph must have at least one node"));
        }
        if u32::try_from(node_count).is_err() {
            return Err(Error::invalid_graph(format!(
                "node count {node_count} exceeds the addressable range"
            )));
        }

        let mut adjacency = vec![Neighbors::new(); node_count];
        for (from, to) in self.edges {
            if from >= node_count || to >= node_count {
                return Err(Error::edge_out_of_range(from, to, node_count));
            }
            let to = NodeId::new(to as u32);
            let list = &mut adjacency[from];
            if !list.contains(&to) {
                list.push(to);
            }
        }

        let graph = Graph::from_parts(adjacency);
        debug!(
            "built graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

/// Build a graph from a node count and a list of directed edges.
pub fn build_graph(
    node_count: usize,
    edges: impl IntoIterator<Item = (usize, usize)>,
) -> Result<Graph> {
    GraphBuilder::new(node_count).edges(edges).build()
}
