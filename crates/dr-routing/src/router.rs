//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Sessions call routing via the [`Router`] trait, so applications can swap
//! in custom implementations (bidirectional search, contraction hierarchies,
//! a cached table) without touching plan construction.  The default
//! [`DijkstraRouter`] computes the full single-source tree.
//!
//! # Cost units
//!
//! Edge weights are opaque positive scalars (kilometres for geographic
//! imports, whatever the user typed for manual input).  Distances are their
//! plain `f64` sums wrapped in [`Distance`].

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;

use dr_core::{Distance, NodeId};
use dr_network::RoadGraph;

use crate::path::reconstruct_path;
use crate::{RouteError, RouteResult};

// ── ShortestPaths ─────────────────────────────────────────────────────────────

/// Distance and predecessor tables covering every node of the routed graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source:       NodeId,
    distances:    Vec<Distance>,
    predecessors: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    /// Distance table indexed by `NodeId`; unreached nodes are
    /// [`Distance::INFINITE`].
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// Predecessor table indexed by `NodeId`; `None` for the source and for
    /// unreached nodes.
    pub fn predecessors(&self) -> &[Option<NodeId>] {
        &self.predecessors
    }

    /// Distance to `node`, or `None` if `node` is not in the graph.
    pub fn distance(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(node.index()).copied()
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node.index()).copied().flatten()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some_and(Distance::is_reachable)
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_reachable()).count()
    }

    /// Node sequence from the source to `node`, inclusive.
    ///
    /// # Errors
    ///
    /// - [`RouteError::InvalidNode`] if `node` is not in the graph.
    /// - [`RouteError::Unreachable`] if no path exists.
    pub fn path_to(&self, node: NodeId) -> RouteResult<Vec<NodeId>> {
        match self.distance(node) {
            None => Err(RouteError::InvalidNode(node)),
            Some(d) if !d.is_reachable() => Err(RouteError::Unreachable(node)),
            Some(_) => reconstruct_path(node, &self.predecessors),
        }
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable single-source routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router can serve concurrent
/// requests, each over its own immutable graph snapshot.
pub trait Router: Send + Sync {
    /// Compute shortest distances and predecessors from `source` to every
    /// node of `graph`.  Must not have side effects on the graph.
    ///
    /// Returns [`RouteError::InvalidSource`] if `source` is not in `graph`.
    fn shortest_paths(&self, graph: &RoadGraph, source: NodeId) -> RouteResult<ShortestPaths>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR road graph with a binary-heap
/// frontier.  O((V + E) log V).
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_paths(&self, graph: &RoadGraph, source: NodeId) -> RouteResult<ShortestPaths> {
        dijkstra(graph, source)
    }
}

/// Route from `source` with the default [`DijkstraRouter`].
pub fn shortest_paths(graph: &RoadGraph, source: NodeId) -> RouteResult<ShortestPaths> {
    DijkstraRouter.shortest_paths(graph, source)
}

/// Route every source independently on the rayon pool.  Results are in the
/// order of `sources`.
#[cfg(feature = "parallel")]
pub fn shortest_paths_batch<R: Router + ?Sized>(
    router: &R,
    graph: &RoadGraph,
    sources: &[NodeId],
) -> Vec<RouteResult<ShortestPaths>> {
    use rayon::prelude::*;

    sources
        .par_iter()
        .map(|&source| router.shortest_paths(graph, source))
        .collect()
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(graph: &RoadGraph, source: NodeId) -> RouteResult<ShortestPaths> {
    let n = graph.node_count();
    if !graph.contains(source) {
        return Err(RouteError::InvalidSource { node: source, node_count: n });
    }

    // distances[v] = best known distance to v.
    let mut distances    = vec![Distance::INFINITE; n];
    // predecessors[v] = node that reached v; None for the source and unreached nodes.
    let mut predecessors = vec![None; n];

    distances[source.index()] = Distance::ZERO;

    // Min-heap: (distance, node). Reverse makes BinaryHeap (max) behave as
    // min-heap. Secondary key NodeId ensures deterministic tie-breaking.
    // A node may sit in the heap several times; only its best entry counts.
    let mut heap: BinaryHeap<Reverse<(Distance, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Distance::ZERO, source)));

    let mut stale = 0usize;
    while let Some(Reverse((dist, node))) = heap.pop() {
        // Skip stale heap entries.
        if dist > distances[node.index()] {
            stale += 1;
            continue;
        }

        for (neighbor, weight) in graph.neighbors(node) {
            let candidate = dist.extend(weight);
            if candidate < distances[neighbor.index()] {
                distances[neighbor.index()] = candidate;
                predecessors[neighbor.index()] = Some(node);
                heap.push(Reverse((candidate, neighbor)));
            }
        }
    }

    let paths = ShortestPaths { source, distances, predecessors };
    debug!(
        "dijkstra from {source}: {}/{n} reachable, {stale} stale frontier entries",
        paths.reachable_count()
    );
    Ok(paths)
}

#[cfg(test)]
impl ShortestPaths {
    /// Assemble tables by hand, e.g. to feed corrupted predecessors to
    /// `path_to`.
    pub(crate) fn from_tables(
        source: NodeId,
        distances: Vec<Distance>,
        predecessors: Vec<Option<NodeId>>,
    ) -> Self {
        Self { source, distances, predecessors }
    }
}
