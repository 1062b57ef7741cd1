//! Solver bindings for Python.

use pyo3::prelude::*;

use crate::core::Turn;
use crate::solver::{self, SolveMethod, Solver, SolverConfig};

use super::py_core::{start_node, PyOutcome};
use super::py_graph::PyGraph;

/// Solve the pursuit game.
///
/// # Arguments
/// - graph: The board
/// - evader_start: Evader's start node
/// - pursuer_start: Pursuer's start node
/// - exact: Use exact retrograde analysis instead of depth-first search
///   (default: False)
/// - pursuer_first: Let the Pursuer make the first move (default: False)
#[pyfunction]
#[pyo3(signature = (graph, evader_start, pursuer_start, exact = false, pursuer_first = false))]
pub fn solve(
    graph: &PyGraph,
    evader_start: i64,
    pursuer_start: i64,
    exact: bool,
    pursuer_first: bool,
) -> PyResult<PyOutcome> {
    let node_count = graph.0.node_count();
    let evader = start_node(Turn::Evader, evader_start, node_count)?;
    let pursuer = start_node(Turn::Pursuer, pursuer_start, node_count)?;

    let method = if exact {
        SolveMethod::Retrograde
    } else {
        SolveMethod::DepthFirst
    };
    let first_mover = if pursuer_first {
        Turn::Pursuer
    } else {
        Turn::Evader
    };
    let config = SolverConfig::default()
        .with_method(method)
        .with_first_mover(first_mover);

    let outcome = Solver::with_config(&graph.0, config).solve(evader, pursuer)?;
    Ok(outcome.into())
}

/// Solve the treasure-hunt setup: Evader on node 1, Pursuer on node 2.
#[pyfunction]
pub fn treasure_game(graph: &PyGraph) -> PyResult<PyOutcome> {
    let node_count = graph.0.node_count();
    let evader = start_node(Turn::Evader, 1, node_count)?;
    let pursuer = start_node(Turn::Pursuer, 2, node_count)?;
    Ok(solver::solve(&graph.0, evader, pursuer)?.into())
}
