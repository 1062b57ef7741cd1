//! Graph bindings for Python.

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{NodeId, Turn};
use crate::error::Error;
use crate::graph::{Graph, GraphBuilder};

use super::py_core::{edge, start_node};

/// Python wrapper for Graph.
///
/// Immutable once built. Supports pickling.
#[pyclass(name = "Graph", module = "pursuit_solver")]
#[derive(Clone)]
pub struct PyGraph(pub Graph);

#[pymethods]
impl PyGraph {
    /// Build a graph.
    ///
    /// # Arguments
    /// - node_count: Number of nodes (at least 1); node 0 is the goal
    /// - edges: List of (from, to) pairs
    /// - undirected: Add every edge in both directions (default: False)
    #[new]
    #[pyo3(signature = (node_count, edges, undirected = false))]
    fn new(node_count: i64, edges: Vec<(i64, i64)>, undirected: bool) -> PyResult<Self> {
        let node_count = usize::try_from(node_count)
            .map_err(|_| Error::invalid_graph(format!("node count {node_count} is negative")))?;
        let mut builder = GraphBuilder::new(node_count);
        for (from, to) in edges {
            let (from, to) = edge(from, to, node_count)?;
            builder = if undirected {
                builder.undirected_edge(from, to)
            } else {
                builder.edge(from, to)
            };
        }
        Ok(Self(builder.build()?))
    }

    /// Build from neighbor lists: `lists[i]` holds the successors of node i.
    #[staticmethod]
    fn from_adjacency(lists: Vec<Vec<i64>>) -> PyResult<Self> {
        let node_count = lists.len();
        let mut builder = GraphBuilder::new(node_count);
        for (from, list) in lists.into_iter().enumerate() {
            for to in list {
                let (from, to) = edge(from as i64, to, node_count)?;
                builder = builder.edge(from, to);
            }
        }
        Ok(Self(builder.build()?))
    }

    #[getter]
    fn node_count(&self) -> usize {
        self.0.node_count()
    }

    #[getter]
    fn edge_count(&self) -> usize {
        self.0.edge_count()
    }

    /// Successors of a node.
    fn neighbors(&self, node: i64) -> PyResult<Vec<u32>> {
        let node = start_node(Turn::Evader, node, self.0.node_count())
            .map_err(|_| Error::invalid_graph(format!("no node {node}")))?;
        Ok(self.0.neighbors(node).iter().map(|n: &NodeId| n.0).collect())
    }

    fn __getstate__<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.0.to_bytes()?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    fn __setstate__(&mut self, state: &Bound<'_, PyBytes>) -> PyResult<()> {
        self.0 = Graph::from_bytes(state.as_bytes())?;
        Ok(())
    }

    fn __getnewargs__(&self) -> (i64, Vec<(i64, i64)>) {
        (1, Vec::new())
    }

    fn __repr__(&self) -> String {
        format!(
            "Graph(nodes={}, edges={})",
            self.0.node_count(),
            self.0.edge_count()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
