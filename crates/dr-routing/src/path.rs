//! Path reconstruction from a predecessor table.

use dr_core::NodeId;

use crate::{RouteError, RouteResult};

/// Follow predecessor links from `node` back to a root, then reverse.
///
/// Returns `[node]` when `predecessors[node]` is `None`.  The walk is capped
/// at `predecessors.len()` nodes: a longer chain can only come from a
/// corrupted table and fails with [`RouteError::CycleDetected`].
///
/// # Errors
///
/// - [`RouteError::InvalidNode`] if `node` or a link is outside the table.
/// - [`RouteError::CycleDetected`] if the chain does not terminate.
pub fn reconstruct_path(node: NodeId, predecessors: &[Option<NodeId>]) -> RouteResult<Vec<NodeId>> {
    let limit = predecessors.len();
    if !node.in_range(limit) {
        return Err(RouteError::InvalidNode(node));
    }

    let mut path = vec![node];
    let mut cur = node;
    while let Some(prev) = predecessors[cur.index()] {
        if !prev.in_range(limit) {
            return Err(RouteError::InvalidNode(prev));
        }
        if path.len() >= limit {
            return Err(RouteError::CycleDetected { node, limit });
        }
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    Ok(path)
}

/// Render a path as `0 -> 1 -> 2`.
pub fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
