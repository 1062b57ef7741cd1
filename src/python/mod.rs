//! Python bindings for the pursuit solver.
//!
//! Front-ends (boards drawn on screen, notebooks) build a graph, solve it
//! and display the verdict.
//!
//! # Quick Start
//!
//! ```python
//! import pursuit_solver as ps
//!
//! board = ps.Graph(6, [(0, 2), (2, 3), (3, 1)], undirected=True)
//! outcome = ps.solve(board, evader_start=1, pursuer_start=2)
//!
//! # Exact analysis for cyclic boards
//! exact = ps.solve(board, 1, 2, exact=True)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_graph;
mod py_solver;

pub use py_core::*;
pub use py_graph::*;
pub use py_solver::*;

/// pursuit_solver: two-player pursuit games on directed graphs.
#[pymodule]
fn pursuit_solver(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyOutcome>()?;
    m.add_class::<PyGraph>()?;

    m.add_function(wrap_pyfunction!(py_solver::solve, m)?)?;
    m.add_function(wrap_pyfunction!(py_solver::treasure_game, m)?)?;

    Ok(())
}
