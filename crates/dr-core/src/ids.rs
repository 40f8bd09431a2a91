//! Strongly typed intersection identifier.
//!
//! `NodeId` is `Copy + Ord + Hash` so it can be used as a map key, a heap
//! tie-breaker, and a sort key without ceremony.  The inner integer is `pub`
//! for direct indexing into per-node `Vec`s, but callers should prefer
//! [`NodeId::index`] for clarity.

use std::fmt;

/// Index of an intersection in a road graph.  Valid ids are `0..node_count`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// The depot every delivery route starts from.
    pub const DEPOT: NodeId = NodeId(0);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// `true` if this id addresses a node of a graph with `node_count` nodes.
    #[inline]
    pub fn in_range(self, node_count: usize) -> bool {
        self.index() < node_count
    }
}

/// Bare number, so paths render as `0 -> 1 -> 2`.
impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NodeId> for usize {
    #[inline(always)]
    fn from(id: NodeId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for NodeId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<NodeId, Self::Error> {
        u32::try_from(n).map(NodeId)
    }
}
