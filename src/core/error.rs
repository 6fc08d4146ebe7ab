use std::fmt;

use thiserror::Error;

/// Failure of [`add_edge_with`](crate::graph::Graph::add_edge_with). The
/// rejected edge identity is handed back to the caller.
#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<E> {
    pub edge: E,
    pub kind: AddEdgeErrorKind,
}

impl<E> AddEdgeError<E> {
    pub fn new(edge: E, kind: AddEdgeErrorKind) -> Self {
        Self { edge, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    TargetAbsent,
    LoopNotAllowed,
}

impl std::error::Error for AddEdgeErrorKind {}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::TargetAbsent => "target does not exist",
            AddEdgeErrorKind::LoopNotAllowed => "loops are not allowed in this graph",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum EdgeWeightError {
    #[error("edge does not exist")]
    EdgeAbsent,
    #[error("edge does not have a modifiable weight")]
    NotWeighted,
}
