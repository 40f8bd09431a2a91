//! Unit tests for dr-network.
//!
//! All tests use hand-crafted graphs and extracts so they run without any
//! map file.

#[cfg(test)]
mod helpers {
    use dr_core::{GeoPoint, NodeId};
    use crate::{RoadGraph, RoadGraphBuilder};

    /// Triangle used throughout:
    ///
    ///   0 --4-- 1 --3-- 2,   0 --10-- 2
    pub fn triangle() -> RoadGraph {
        let mut b = RoadGraphBuilder::new(3).unwrap();
        b.add_edge(NodeId(0), NodeId(1), 4.0).unwrap();
        b.add_edge(NodeId(1), NodeId(2), 3.0).unwrap();
        b.add_edge(NodeId(0), NodeId(2), 10.0).unwrap();
        b.build()
    }

    /// Four intersections on a small lat/lon grid, one per corner.
    pub fn corners() -> [GeoPoint; 4] {
        [
            GeoPoint::new(33.6420, 72.9910),
            GeoPoint::new(33.6420, 72.9920),
            GeoPoint::new(33.6430, 72.9910),
            GeoPoint::new(33.6430, 72.9920),
        ]
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use dr_core::{GeoPoint, NodeId};
    use crate::{MAX_WEIGHT, NetworkError, RoadGraphBuilder};

    #[test]
    fn zero_nodes_rejected() {
        assert!(matches!(RoadGraphBuilder::new(0), Err(NetworkError::InvalidSize(0))));
    }

    #[test]
    fn edges_are_symmetric() {
        let g = super::helpers::triangle();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        for (u, v, w) in g.edges() {
            assert_eq!(g.weight(u, v), Some(w));
            assert_eq!(g.weight(v, u), Some(w));
        }
        assert_eq!(g.degree(NodeId(1)), 2);
    }

    #[test]
    fn readding_is_idempotent() {
        let mut b = RoadGraphBuilder::new(2).unwrap();
        b.add_edge(NodeId(0), NodeId(1), 5.0).unwrap();
        b.add_edge(NodeId(1), NodeId(0), 5.0).unwrap();
        assert_eq!(b.edge_count(), 1);
        let g = b.build();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight(NodeId(0), NodeId(1)), Some(5.0));
    }

    #[test]
    fn last_write_wins() {
        let mut b = RoadGraphBuilder::new(2).unwrap();
        b.add_edge(NodeId(0), NodeId(1), 5.0).unwrap();
        b.add_edge(NodeId(1), NodeId(0), 2.5).unwrap();
        assert_eq!(b.weight(NodeId(0), NodeId(1)), Some(2.5));
        assert_eq!(b.weight(NodeId(1), NodeId(0)), Some(2.5));
    }

    #[test]
    fn invalid_weights_rejected() {
        let mut b = RoadGraphBuilder::new(2).unwrap();
        for w in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
            let err = b.add_edge(NodeId(0), NodeId(1), w).unwrap_err();
            assert!(matches!(err, NetworkError::InvalidWeight { .. }), "weight {w}");
        }
        assert_eq!(b.edge_count(), 0);
    }

    #[test]
    fn oversized_weight_rejected() {
        let mut b = RoadGraphBuilder::new(2).unwrap();
        let err = b.add_edge(NodeId(0), NodeId(1), 1e308).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidWeight { .. }));
        let err = b.add_edge(NodeId(0), NodeId(1), MAX_WEIGHT * 2.0).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidWeight { .. }));

        b.add_edge(NodeId(0), NodeId(1), MAX_WEIGHT).unwrap();
        assert_eq!(b.weight(NodeId(1), NodeId(0)), Some(MAX_WEIGHT));
    }

    #[test]
    fn invalid_endpoints_rejected() {
        let mut b = RoadGraphBuilder::new(3).unwrap();
        assert!(matches!(
            b.add_edge(NodeId(0), NodeId(3), 1.0),
            Err(NetworkError::InvalidNode { node: NodeId(3), .. })
        ));
        assert!(matches!(
            b.add_edge(NodeId(1), NodeId(1), 1.0),
            Err(NetworkError::InvalidNode { node: NodeId(1), reason: "self-loop" })
        ));
        assert!(b.set_position(NodeId(9), GeoPoint::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn neighbors_sorted() {
        let g = super::helpers::triangle();
        let n0: Vec<_> = g.neighbors(NodeId(0)).collect();
        assert_eq!(n0, vec![(NodeId(1), 4.0), (NodeId(2), 10.0)]);
        assert_eq!(g.weight(NodeId(0), NodeId(0)), None);
        assert_eq!(g.weight(NodeId(7), NodeId(0)), None);
    }

    #[test]
    fn edges_listed_once() {
        let g = super::helpers::triangle();
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(
            edges,
            vec![
                (NodeId(0), NodeId(1), 4.0),
                (NodeId(0), NodeId(2), 10.0),
                (NodeId(1), NodeId(2), 3.0),
            ]
        );
    }

    #[test]
    fn isolated_node_has_no_neighbors() {
        let mut b = RoadGraphBuilder::new(3).unwrap();
        b.add_edge(NodeId(0), NodeId(1), 1.0).unwrap();
        let g = b.build();
        assert_eq!(g.degree(NodeId(2)), 0);
        assert_eq!(g.neighbors(NodeId(2)).count(), 0);
    }
}

// ── Spatial lookup ────────────────────────────────────────────────────────────

#[cfg(test)]
mod spatial {
    use dr_core::{GeoPoint, NodeId};
    use crate::RoadGraphBuilder;

    #[test]
    fn nearest_positioned_node() {
        let corners = super::helpers::corners();
        let mut b = RoadGraphBuilder::new(4).unwrap();
        for (i, p) in corners.iter().enumerate() {
            b.set_position(NodeId(i as u32), *p).unwrap();
        }
        let g = b.build();
        assert_eq!(g.nearest_node(corners[3]), Some(NodeId(3)));
        assert_eq!(g.nearest_node(GeoPoint::new(33.64201, 72.99101)), Some(NodeId(0)));
        assert_eq!(g.position(NodeId(1)), Some(corners[1]));
    }

    #[test]
    fn no_positions_returns_none() {
        let g = super::helpers::triangle();
        assert!(g.nearest_node(GeoPoint::new(0.0, 0.0)).is_none());
        assert!(g.position(NodeId(0)).is_none());
    }
}

// ── Geographic import ─────────────────────────────────────────────────────────

#[cfg(test)]
mod import {
    use dr_core::{GeoBounds, GeoPoint, NodeId};
    use crate::{GeoWays, ImportConfig, NetworkError, RawExtract, RawNode, RawWay, RoadGraphBuilder};

    fn geo() -> GeoWays {
        let c = super::helpers::corners();
        GeoWays::new(
            vec![(100, c[0]), (200, c[1]), (300, c[2]), (400, c[3])],
            vec![
                vec![100, 200, 400],   // two roads
                vec![300, 999],        // only one known member: skipped
                vec![999, 100, 888, 300], // unknown members dropped: 100-300
            ],
        )
    }

    #[test_log::test]
    fn weights_are_haversine_km() {
        let g = RoadGraphBuilder::from_geo_ways(&geo()).unwrap().build();
        let c = super::helpers::corners();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);

        let w01 = g.weight(NodeId(0), NodeId(1)).unwrap();
        assert!((w01 - c[0].distance_km(c[1])).abs() < 1e-12);
        // 0.001° of longitude at 33.64° ≈ 0.0926 km
        assert!((w01 - 0.0926).abs() < 0.001, "got {w01}");

        assert!(g.weight(NodeId(1), NodeId(3)).is_some());
        assert!(g.weight(NodeId(0), NodeId(2)).is_some());
        assert!(g.weight(NodeId(2), NodeId(3)).is_none());
        assert_eq!(g.position(NodeId(2)), Some(c[2]));
    }

    #[test]
    fn zero_length_pairs_skipped() {
        let p = GeoPoint::new(33.0, 72.0);
        let geo = GeoWays::new(
            vec![(1, p), (2, p), (3, GeoPoint::new(33.001, 72.0))],
            vec![vec![1, 1, 2, 3]],
        );
        let g = RoadGraphBuilder::from_geo_ways(&geo).unwrap().build();
        assert_eq!(g.edge_count(), 1);
        assert!(g.weight(NodeId(1), NodeId(2)).is_some());
    }

    #[test]
    fn empty_node_set_is_invalid_size() {
        let geo = GeoWays::new(vec![], vec![vec![1, 2]]);
        assert!(matches!(
            RoadGraphBuilder::from_geo_ways(&geo),
            Err(NetworkError::InvalidSize(0))
        ));
    }

    fn extract() -> RawExtract {
        let node = |id, lat, lon| RawNode { id, pos: GeoPoint::new(lat, lon) };
        RawExtract {
            nodes: vec![
                node(1, 33.6420, 72.9915),
                node(2, 10.0, 10.0), // outside the box
                node(3, 33.6425, 72.9920),
                node(4, 33.6428, 72.9925),
            ],
            ways: vec![
                RawWay { refs: vec![1, 3, 4], highway: true },
                RawWay { refs: vec![1, 4], highway: false },
            ],
        }
    }

    #[test]
    fn filter_applies_box_limit_and_highway() {
        let cfg = ImportConfig {
            bounds: Some(GeoBounds::new(33.641547, 33.643007, 72.990970, 72.993065)),
            max_nodes: Some(2),
            require_highway: true,
        };
        let geo = extract().filter(&cfg);
        let ids: Vec<i64> = geo.nodes.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(geo.ways, vec![vec![1, 3, 4]]);

        let g = RoadGraphBuilder::from_geo_ways(&geo).unwrap().build();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn default_filter_keeps_everything_routable() {
        let geo = extract().filter(&ImportConfig::default());
        assert_eq!(geo.nodes.len(), 4);
        assert_eq!(geo.ways.len(), 1);

        let all = ImportConfig { require_highway: false, ..ImportConfig::default() };
        assert_eq!(extract().filter(&all).ways.len(), 2);
    }
}

// ── Edge list export ──────────────────────────────────────────────────────────

#[cfg(test)]
mod export {
    use dr_core::NodeId;
    use crate::{NetworkError, export_edge_list, load_edge_list, read_edge_list, write_edge_list};

    #[test]
    fn write_format() {
        let g = super::helpers::triangle();
        let mut out = Vec::new();
        write_edge_list(&g, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Number of Intersections: 3\nEdges:\n0 1 4.00\n0 2 10.00\n1 2 3.00\n"
        );
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("graph_export.txt");
        let g = super::helpers::triangle();
        export_edge_list(&g, &path).unwrap();

        let back = load_edge_list(&path).unwrap().build();
        assert_eq!(back.node_count(), 3);
        assert_eq!(back.edges().collect::<Vec<_>>(), g.edges().collect::<Vec<_>>());
    }

    #[test]
    fn reads_hand_written_input() {
        let text = "Number of Intersections: 4\nEdges:\n0 3 1.5\n3 2 0.25\n";
        let g = read_edge_list(text.as_bytes()).unwrap().build();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.weight(NodeId(2), NodeId(3)), Some(0.25));
    }

    #[test]
    fn bad_header_is_parse_error() {
        let err = read_edge_list("Intersections 3\nEdges:\n".as_bytes()).unwrap_err();
        assert!(matches!(err, NetworkError::Parse { line: 1, .. }));
        let err = read_edge_list("Number of Intersections: 3\n0 1 2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, NetworkError::Parse { line: 2, .. }));
    }

    #[test]
    fn invalid_rows_surface_graph_errors() {
        let err = read_edge_list("Number of Intersections: 2\nEdges:\n0 1 -3\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, NetworkError::InvalidWeight { .. }));
        let err = read_edge_list("Number of Intersections: 2\nEdges:\n0 x 3\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, NetworkError::Csv(_)));
    }
}

// ── OSM PBF loading ───────────────────────────────────────────────────────────

#[cfg(all(test, feature = "osm"))]
mod osm {
    use std::io::Write;

    use crate::osm::{load_from_pbf, read_pbf};
    use crate::{ImportConfig, NetworkError};

    #[test]
    fn missing_file_is_osm_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_pbf(&dir.path().join("absent.osm.pbf")).unwrap_err();
        assert!(matches!(err, NetworkError::Osm(_)), "{err}");
    }

    #[test_log::test]
    fn corrupt_extract_is_osm_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // Blob header length followed by bytes that are not a BlobHeader.
        file.write_all(&[0, 0, 0, 8, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]).unwrap();
        file.flush().unwrap();

        let err = load_from_pbf(file.path(), &ImportConfig::default()).unwrap_err();
        assert!(matches!(err, NetworkError::Osm(_)), "{err}");
    }
}
