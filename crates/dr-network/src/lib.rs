//! `dr-network`: road graph model, geographic import, and edge-list I/O.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`graph`]  | `RoadGraph` (CSR + R-tree), `RoadGraphBuilder`               |
//! | [`import`] | `RawExtract`, `ImportConfig`, `GeoWays`, `from_geo_ways`     |
//! | [`export`] | Plain-text edge list read/write                              |
//! | [`osm`]    | `read_pbf`, `load_from_pbf` (feature = `"osm"` only)         |
//! | [`error`]  | `NetworkError`, `NetworkResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `osm`   | Enables OSM PBF loading via the `osmpbf` crate.              |
//! | `serde` | Derives `Serialize`/`Deserialize` on `ImportConfig`.         |

pub mod error;
pub mod export;
pub mod graph;
pub mod import;

#[cfg(feature = "osm")]
pub mod osm;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use export::{export_edge_list, load_edge_list, read_edge_list, write_edge_list};
pub use graph::{MAX_WEIGHT, RoadGraph, RoadGraphBuilder};
pub use import::{GeoWays, ImportConfig, RawExtract, RawNode, RawWay};
