//! Road graph representation and builder.
//!
//! # Lifecycle
//!
//! A [`RoadGraphBuilder`] is the only mutable form of the graph.  Edges are
//! added (and overwritten) there; [`RoadGraphBuilder::build`] freezes the
//! result into an immutable [`RoadGraph`] that routers read.  A router can
//! never observe a half-built graph, and a re-import produces a new
//! `RoadGraph` instead of mutating the one in use.
//!
//! # Data layout
//!
//! The frozen graph uses **Compressed Sparse Row (CSR)** format.  Given a
//! `NodeId n`, its neighbours occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Every undirected road is stored as two directed entries, and each node's
//! slice is sorted by neighbour id, so `weight(u, v)` is a binary search.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest positioned
//! `NodeId`.  Front-ends use it to pick a depot or destination from a map
//! click.

use std::collections::BTreeMap;

use log::debug;
use rstar::{AABB, PointDistance, RTree, RTreeObject};

use dr_core::{GeoPoint, NodeId};

use crate::{NetworkError, NetworkResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space.  Good enough for picking
    /// the closest intersection within a city-sized extract.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Largest accepted road weight.
///
/// A shortest path has fewer than `u32::MAX` edges, so a sum of weights up to
/// this bound (`f64::MAX / 2^33`) stays finite and can never collide with
/// [`Distance::INFINITE`](dr_core::Distance::INFINITE).
pub const MAX_WEIGHT: f64 = f64::MAX / 8_589_934_592.0;

/// Immutable weighted undirected road graph in CSR format.
///
/// Construct with [`RoadGraphBuilder`].  The graph is `Send + Sync` and is
/// typically shared behind an `Arc` by routing sessions.
pub struct RoadGraph {
    /// Optional geographic position of each node.  Indexed by `NodeId`.
    node_pos: Vec<Option<GeoPoint>>,

    /// CSR row pointer.  Length = `node_count + 1`.
    node_out_start: Vec<u32>,

    /// Neighbour of each directed entry, sorted within each node's slice.
    edge_to: Vec<NodeId>,

    /// Weight of each directed entry (mirrors `edge_to`).
    edge_weight: Vec<f64>,

    spatial_idx: RTree<NodeEntry>,
}

impl RoadGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    /// Number of undirected road segments.
    pub fn edge_count(&self) -> usize {
        self.edge_to.len() / 2
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.in_range(self.node_count())
    }

    /// Iterator over all node ids, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.node_count() as u32).map(NodeId)
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// `(neighbour, weight)` pairs of `node`, sorted by neighbour id.
    ///
    /// This is a contiguous slice scan with no heap allocation.
    ///
    /// # Panics
    /// Panics if `node` is not in the graph.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        let (start, end) = self.span(node);
        self.edge_to[start..end]
            .iter()
            .copied()
            .zip(self.edge_weight[start..end].iter().copied())
    }

    /// Number of roads touching `node`.
    ///
    /// # Panics
    /// Panics if `node` is not in the graph.
    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        let (start, end) = self.span(node);
        end - start
    }

    /// Weight of the road between `u` and `v`, if there is one.
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        if !self.contains(u) {
            return None;
        }
        let (start, end) = self.span(u);
        self.edge_to[start..end]
            .binary_search(&v)
            .ok()
            .map(|i| self.edge_weight[start + i])
    }

    /// Every undirected segment once, as `(u, v, weight)` with `u < v`,
    /// ordered by `u` then `v`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.nodes().flat_map(move |u| {
            self.neighbors(u)
                .filter(move |&(v, _)| u < v)
                .map(move |(v, w)| (u, v, w))
        })
    }

    #[inline]
    fn span(&self, node: NodeId) -> (usize, usize) {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start, end)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Geographic position of `node`, if one was recorded.
    pub fn position(&self, node: NodeId) -> Option<GeoPoint> {
        self.node_pos.get(node.index()).copied().flatten()
    }

    /// Return the positioned node nearest to `pos`.
    ///
    /// Returns `None` if no node carries a position.
    pub fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] edge by edge, then call [`build`](Self::build).
///
/// Adding a road between a pair that already has one replaces its weight
/// (last write wins), in either argument order.
///
/// # Example
///
/// ```
/// use dr_core::NodeId;
/// use dr_network::RoadGraphBuilder;
///
/// let mut b = RoadGraphBuilder::new(3)?;
/// b.add_edge(NodeId(0), NodeId(1), 4.0)?;
/// b.add_edge(NodeId(1), NodeId(2), 3.0)?;
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.weight(NodeId(1), NodeId(0)), Some(4.0));
/// # Ok::<(), dr_network::NetworkError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RoadGraphBuilder {
    adjacency: Vec<BTreeMap<NodeId, f64>>,
    positions: Vec<Option<GeoPoint>>,
}

impl RoadGraphBuilder {
    /// Allocate `node_count` intersections with no roads.
    ///
    /// # Errors
    ///
    /// [`NetworkError::InvalidSize`] if `node_count` is zero or does not fit
    /// a `NodeId`.
    pub fn new(node_count: usize) -> NetworkResult<Self> {
        if node_count == 0 || node_count > u32::MAX as usize {
            return Err(NetworkError::InvalidSize(node_count));
        }
        Ok(Self {
            adjacency: vec![BTreeMap::new(); node_count],
            positions: vec![None; node_count],
        })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected roads added so far.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Add an undirected road between `u` and `v`.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::InvalidNode`] if either endpoint is out of range or
    ///   `u == v`.
    /// - [`NetworkError::InvalidWeight`] unless `0 < weight <= MAX_WEIGHT`.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> NetworkResult<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(NetworkError::InvalidNode { node: u, reason: "self-loop" });
        }
        if !(weight > 0.0 && weight <= MAX_WEIGHT) {
            return Err(NetworkError::InvalidWeight { from: u, to: v, weight });
        }
        self.adjacency[u.index()].insert(v, weight);
        self.adjacency[v.index()].insert(u, weight);
        Ok(())
    }

    /// Weight of the road between `u` and `v` added so far.
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.adjacency.get(u.index())?.get(&v).copied()
    }

    /// Attach a geographic position to `node` (display and nearest-node
    /// lookup only; routing never reads it).
    pub fn set_position(&mut self, node: NodeId, pos: GeoPoint) -> NetworkResult<()> {
        self.check_node(node)?;
        self.positions[node.index()] = Some(pos);
        Ok(())
    }

    /// Look up a position recorded earlier.
    pub fn position(&self, node: NodeId) -> Option<GeoPoint> {
        self.positions.get(node.index()).copied().flatten()
    }

    fn check_node(&self, node: NodeId) -> NetworkResult<()> {
        if node.in_range(self.node_count()) {
            Ok(())
        } else {
            Err(NetworkError::InvalidNode { node, reason: "out of range" })
        }
    }

    /// Consume the builder and produce a [`RoadGraph`].
    ///
    /// Time complexity: O(E) for the CSR arrays (adjacency maps are already
    /// sorted) + O(N log N) for the R-tree bulk load.
    pub fn build(self) -> RoadGraph {
        let node_count = self.adjacency.len();
        let directed: usize = self.adjacency.iter().map(BTreeMap::len).sum();

        let mut node_out_start = Vec::with_capacity(node_count + 1);
        let mut edge_to        = Vec::with_capacity(directed);
        let mut edge_weight    = Vec::with_capacity(directed);

        node_out_start.push(0u32);
        for neighbours in &self.adjacency {
            for (&v, &w) in neighbours {
                edge_to.push(v);
                edge_weight.push(w);
            }
            node_out_start.push(edge_to.len() as u32);
        }
        debug_assert_eq!(node_out_start[node_count] as usize, directed);

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<NodeEntry> = self
            .positions
            .iter()
            .enumerate()
            .filter_map(|(i, pos)| {
                pos.map(|p| NodeEntry { point: [p.lat, p.lon], id: NodeId(i as u32) })
            })
            .collect();
        let positioned = entries.len();
        let spatial_idx = RTree::bulk_load(entries);

        debug!(
            "built road graph: {node_count} nodes, {} roads, {positioned} positioned",
            directed / 2
        );

        RoadGraph {
            node_pos: self.positions,
            node_out_start,
            edge_to,
            edge_weight,
            spatial_idx,
        }
    }
}
