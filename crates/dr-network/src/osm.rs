//! OSM PBF loader, enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use dr_core::GeoBounds;
//! use dr_network::{ImportConfig, osm::load_from_pbf};
//!
//! let cfg = ImportConfig {
//!     bounds: Some(GeoBounds::new(33.641547, 33.643007, 72.990970, 72.993065)),
//!     max_nodes: Some(50),
//!     ..ImportConfig::default()
//! };
//! let graph = load_from_pbf(Path::new("islamabad.osm.pbf"), &cfg)?.build();
//! ```
//!
//! # What is loaded
//!
//! Nodes (plain and dense) and ways.  Relations are ignored.  Selection is
//! delegated to [`RawExtract::filter`], weighting to
//! [`RoadGraphBuilder::from_geo_ways`].  Every road is undirected; `oneway`
//! tags are not interpreted.

use std::path::Path;

use log::info;
use osmpbf::{Element, ElementReader};

use dr_core::GeoPoint;

use crate::import::{ImportConfig, RawExtract, RawNode, RawWay};
use crate::{NetworkError, NetworkResult, RoadGraphBuilder};

/// Read a PBF extract into an unfiltered [`RawExtract`].
///
/// # Errors
///
/// Returns [`NetworkError::Osm`] on open or parse errors.
pub fn read_pbf(path: &Path) -> NetworkResult<RawExtract> {
    let reader = ElementReader::from_path(path).map_err(|e| NetworkError::Osm(e.to_string()))?;

    let mut extract = RawExtract::default();
    reader
        .for_each(|elem| match elem {
            Element::Node(n) => extract.nodes.push(RawNode {
                id:  n.id(),
                pos: GeoPoint::new(n.lat(), n.lon()),
            }),
            Element::DenseNode(n) => extract.nodes.push(RawNode {
                id:  n.id(),
                pos: GeoPoint::new(n.lat(), n.lon()),
            }),
            Element::Way(w) => {
                let highway = w.tags().any(|(k, _)| k == "highway");
                extract.ways.push(RawWay { refs: w.refs().collect(), highway });
            }
            _ => {}
        })
        .map_err(|e| NetworkError::Osm(e.to_string()))?;

    info!(
        "read {}: {} nodes, {} ways",
        path.display(),
        extract.nodes.len(),
        extract.ways.len()
    );
    Ok(extract)
}

/// Load, filter, and weight a PBF extract in one call.
///
/// # Errors
///
/// [`NetworkError::Osm`] on read errors, [`NetworkError::InvalidSize`] if no
/// node survives `cfg`.
pub fn load_from_pbf(path: &Path, cfg: &ImportConfig) -> NetworkResult<RoadGraphBuilder> {
    let geo = read_pbf(path)?.filter(cfg);
    RoadGraphBuilder::from_geo_ways(&geo)
}
