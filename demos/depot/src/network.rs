//! Built-in sample network.
//!
//! Six intersections inside a small Islamabad bounding box, joined by three
//! streets.  Intersection 5 sits on no street and shows up as unreachable.

use dr_core::GeoPoint;
use dr_network::{GeoWays, NetworkResult, RoadGraphBuilder};

/// Build the sample network from geographic ways (weights in km).
pub fn build_network() -> NetworkResult<RoadGraphBuilder> {
    let nodes = vec![
        (1001, GeoPoint::new(33.64160, 72.99100)), // depot
        (1002, GeoPoint::new(33.64200, 72.99150)),
        (1003, GeoPoint::new(33.64250, 72.99200)),
        (1004, GeoPoint::new(33.64290, 72.99280)),
        (1005, GeoPoint::new(33.64170, 72.99260)),
        (1006, GeoPoint::new(33.64295, 72.99105)),
    ];
    let ways = vec![
        vec![1001, 1002, 1003, 1004], // main street
        vec![1001, 1005, 1004],       // southern bypass
        vec![1002, 1005],             // cross street
    ];
    RoadGraphBuilder::from_geo_ways(&GeoWays::new(nodes, ways))
}
