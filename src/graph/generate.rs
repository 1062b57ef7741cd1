//! Graph generators for tests and benchmarks.
//!
//! All generators are deterministic: the same arguments (and seed) always
//! give the same graph.

use super::adjacency::Graph;
use super::builder::GraphBuilder;
use crate::core::GraphRng;
use crate::error::Result;

/// Directed cycle `0 -> 1 -> ... -> n-1 -> 0`.
pub fn cycle(node_count: usize) -> Result<Graph> {
    GraphBuilder::new(node_count)
        .edges((0..node_count).map(|i| (i, (i + 1) % node_count.max(1))))
        .build()
}

/// Undirected path `0 - 1 - ... - n-1`.
pub fn path(node_count: usize) -> Result<Graph> {
    (1..node_count)
        .fold(GraphBuilder::new(node_count), |b, i| b.undirected_edge(i - 1, i))
        .build()
}

/// Random directed graph: each ordered pair of distinct nodes is an edge
/// with probability `edge_probability`.
pub fn random(node_count: usize, edge_probability: f64, seed: u64) -> Result<Graph> {
    random_with(&mut GraphRng::new(seed), node_count, edge_probability)
}

/// `count` independent random graphs drawn from forks of one seed.
pub fn random_family(
    count: usize,
    node_count: usize,
    edge_probability: f64,
    seed: u64,
) -> Result<Vec<Graph>> {
    let mut rng = GraphRng::new(seed);
    (0..count)
        .map(|_| random_with(&mut rng.fork(), node_count, edge_probability))
        .collect()
}

fn random_with(rng: &mut GraphRng, node_count: usize, edge_probability: f64) -> Result<Graph> {
    let mut builder = GraphBuilder::new(node_count);
    for from in 0..node_count {
        for to in 0..node_count {
            if from != to && rng.gen_bool(edge_probability) {
                builder = builder.edge(from, to);
            }
        }
    }
    builder.build()
}
