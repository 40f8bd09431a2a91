//! Building a road graph from geographic input.
//!
//! Two stages:
//!
//! 1. [`RawExtract::filter`] applies the importer's selection rules (bounding
//!    box, node budget, highway-only ways) to an unfiltered map extract and
//!    yields [`GeoWays`].
//! 2. [`RoadGraphBuilder::from_geo_ways`] assigns dense `NodeId`s in node
//!    order and weights each consecutive pair of way members with its
//!    great-circle distance in kilometres.
//!
//! The OSM loader (feature `osm`) is a thin reader on top of both stages;
//! any other source that produces a `RawExtract` or `GeoWays` gets the same
//! behaviour.

use log::{debug, info, warn};
use rustc_hash::FxHashMap;

use dr_core::{GeoBounds, GeoPoint, NodeId};

use crate::{NetworkResult, RoadGraphBuilder};

// ── Importer input ────────────────────────────────────────────────────────────

/// A map node as read from an extract, keyed by its external id.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RawNode {
    pub id:  i64,
    pub pos: GeoPoint,
}

/// A way as read from an extract: its member references in order, and
/// whether it carries a `highway` tag.
#[derive(Clone, Debug, PartialEq)]
pub struct RawWay {
    pub refs:    Vec<i64>,
    pub highway: bool,
}

/// Unfiltered nodes and ways of a map extract, in file order.
#[derive(Clone, Debug, Default)]
pub struct RawExtract {
    pub nodes: Vec<RawNode>,
    pub ways:  Vec<RawWay>,
}

/// Selection rules applied before a map extract becomes a graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImportConfig {
    /// Keep only nodes inside this box (inclusive).  `None` keeps all.
    pub bounds: Option<GeoBounds>,

    /// Stop accepting nodes once this many have passed the box filter.
    pub max_nodes: Option<usize>,

    /// Drop ways without a `highway` tag (buildings, boundaries, ...).
    pub require_highway: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self { bounds: None, max_nodes: None, require_highway: true }
    }
}

impl RawExtract {
    /// Apply `cfg` and return the routable subset.
    ///
    /// Nodes are accepted in file order, so `max_nodes` keeps the first
    /// matches.  Way references are left untouched; members that did not
    /// survive the node filter are dropped later by
    /// [`RoadGraphBuilder::from_geo_ways`].
    pub fn filter(&self, cfg: &ImportConfig) -> GeoWays {
        let limit = cfg.max_nodes.unwrap_or(usize::MAX);
        let nodes: Vec<(i64, GeoPoint)> = self
            .nodes
            .iter()
            .filter(|n| cfg.bounds.is_none_or(|b| b.contains(n.pos)))
            .take(limit)
            .map(|n| (n.id, n.pos))
            .collect();

        let ways: Vec<Vec<i64>> = self
            .ways
            .iter()
            .filter(|w| w.highway || !cfg.require_highway)
            .map(|w| w.refs.clone())
            .collect();

        debug!(
            "import filter kept {}/{} nodes and {}/{} ways",
            nodes.len(),
            self.nodes.len(),
            ways.len(),
            self.ways.len()
        );
        GeoWays { nodes, ways }
    }
}

// ── GeoWays ───────────────────────────────────────────────────────────────────

/// Already-filtered coordinates and way sequences, ready for weighting.
///
/// The position of a node in `nodes` becomes its `NodeId`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoWays {
    pub nodes: Vec<(i64, GeoPoint)>,
    pub ways:  Vec<Vec<i64>>,
}

impl GeoWays {
    pub fn new(nodes: Vec<(i64, GeoPoint)>, ways: Vec<Vec<i64>>) -> Self {
        Self { nodes, ways }
    }
}

impl RoadGraphBuilder {
    /// Build a graph from geographic ways.
    ///
    /// For every way, references to unknown nodes are dropped; if fewer than
    /// two members remain the way is skipped.  Each consecutive pair of the
    /// remaining members becomes a road weighted by [`GeoPoint::distance_km`].
    /// Repeated ids and coincident coordinates would make zero-length roads
    /// and are skipped.
    ///
    /// # Errors
    ///
    /// [`NetworkError::InvalidSize`](crate::NetworkError::InvalidSize) if
    /// `geo.nodes` is empty.
    pub fn from_geo_ways(geo: &GeoWays) -> NetworkResult<Self> {
        let mut builder = Self::new(geo.nodes.len())?;

        let mut index: FxHashMap<i64, NodeId> =
            FxHashMap::with_capacity_and_hasher(geo.nodes.len(), Default::default());
        for (i, &(external, pos)) in geo.nodes.iter().enumerate() {
            let id = NodeId(i as u32);
            builder.set_position(id, pos)?;
            index.entry(external).or_insert(id);
        }

        let mut skipped_ways = 0usize;
        let mut skipped_pairs = 0usize;
        for way in &geo.ways {
            let members: Vec<NodeId> = way.iter().filter_map(|r| index.get(r).copied()).collect();
            if members.len() < 2 {
                skipped_ways += 1;
                continue;
            }
            for pair in members.windows(2) {
                let (u, v) = (pair[0], pair[1]);
                let km = geo.nodes[u.index()].1.distance_km(geo.nodes[v.index()].1);
                if u == v || km <= 0.0 {
                    skipped_pairs += 1;
                    continue;
                }
                builder.add_edge(u, v, km)?;
            }
        }

        if skipped_pairs > 0 {
            warn!("skipped {skipped_pairs} zero-length way segments");
        }
        info!(
            "geo import: {} nodes, {} roads, {} of {} ways unroutable",
            builder.node_count(),
            builder.edge_count(),
            skipped_ways,
            geo.ways.len()
        );
        Ok(builder)
    }
}
