//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{NodeId, Outcome, Turn};
use crate::error::Error;

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python mirror of Outcome.
#[pyclass(name = "Outcome", eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PyOutcome {
    Draw,
    EvaderWin,
    PursuerWin,
}

#[pymethods]
impl PyOutcome {
    /// Check if this is a draw.
    fn is_draw(&self) -> bool {
        Outcome::from(*self).is_draw()
    }

    fn __str__(&self) -> String {
        Outcome::from(*self).to_string()
    }
}

impl From<Outcome> for PyOutcome {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Draw => PyOutcome::Draw,
            Outcome::EvaderWin => PyOutcome::EvaderWin,
            Outcome::PursuerWin => PyOutcome::PursuerWin,
        }
    }
}

impl From<PyOutcome> for Outcome {
    fn from(outcome: PyOutcome) -> Self {
        match outcome {
            PyOutcome::Draw => Outcome::Draw,
            PyOutcome::EvaderWin => Outcome::EvaderWin,
            PyOutcome::PursuerWin => Outcome::PursuerWin,
        }
    }
}

/// Convert a Python start node, rejecting anything outside the graph.
pub(crate) fn start_node(role: Turn, node: i64, node_count: usize) -> Result<NodeId, Error> {
    match u32::try_from(node) {
        Ok(id) if (id as usize) < node_count => Ok(NodeId::new(id)),
        _ => Err(Error::InvalidStart {
            role,
            node,
            node_count,
        }),
    }
}

/// Convert a Python edge, rejecting negative endpoints.
pub(crate) fn edge(from: i64, to: i64, node_count: usize) -> Result<(usize, usize), Error> {
    match (usize::try_from(from), usize::try_from(to)) {
        (Ok(from), Ok(to)) => Ok((from, to)),
        _ => Err(Error::edge_out_of_range(from, to, node_count)),
    }
}
