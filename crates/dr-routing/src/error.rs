//! Routing error type.

use thiserror::Error;

use dr_core::{CoreError, NodeId};

/// Errors produced by `dr-routing`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("routing source {node} is outside the graph ({node_count} nodes)")]
    InvalidSource { node: NodeId, node_count: usize },

    #[error("node {0} is not covered by the predecessor table")]
    InvalidNode(NodeId),

    #[error("node {0} is unreachable from the source")]
    Unreachable(NodeId),

    #[error("predecessor chain from {node} did not terminate within {limit} steps")]
    CycleDetected { node: NodeId, limit: usize },

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type RouteResult<T> = Result<T, RouteError>;
