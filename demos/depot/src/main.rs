//! depot: command-line front-end for the delivery_route engine.
//!
//! ```text
//! depot [EDGE_LIST]
//! depot --pbf EXTRACT.osm.pbf      (requires the `osm` feature)
//! ```
//!
//! Without an argument, plans over the built-in six-intersection network.
//! With one, reads a plain-text edge list (the same format this binary
//! exports).  `--pbf` imports the first 50 intersections of an OSM extract
//! inside the sample Islamabad box instead.  Prints the ranked routes from intersection 0, the summary as
//! JSON, and writes `graph_export.txt` to the working directory.
//!
//! Set `RUST_LOG=debug` to see import and routing diagnostics.

mod network;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::info;

use dr_core::RouteConfig;
use dr_network::{RoadGraphBuilder, export_edge_list, load_edge_list};
use dr_routing::DeliverySession;

use network::build_network;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64  = 42;
const EXPORT_PATH: &str = "graph_export.txt";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== depot: delivery route planner ===");
    println!();

    // 1. Build or load the road network.
    let args: Vec<_> = std::env::args_os().skip(1).collect();
    let builder = match args.as_slice() {
        [] => build_network().context("building sample network")?,
        [flag, path] if flag == "--pbf" => load_pbf(Path::new(path))?,
        [path] => {
            let path = PathBuf::from(path);
            load_edge_list(&path)
                .with_context(|| format!("loading edge list {}", path.display()))?
        }
        _ => bail!("usage: depot [EDGE_LIST] | depot --pbf EXTRACT.osm.pbf"),
    };
    let graph = builder.build();
    println!(
        "Road network: {} intersections, {} roads",
        graph.node_count(),
        graph.edge_count()
    );
    println!();

    // 2. Plan from the depot.
    let config = RouteConfig { seed: SEED, ..RouteConfig::default() };
    let mut session = DeliverySession::new(graph, config)?;

    let t0 = Instant::now();
    let plan = session.plan()?;
    info!("planning took {:.3} ms", t0.elapsed().as_secs_f64() * 1_000.0);

    println!("{plan}");
    println!();
    println!("{}", serde_json::to_string_pretty(plan.summary())?);

    // 3. Export.
    export_edge_list(&session.graph(), Path::new(EXPORT_PATH))
        .with_context(|| format!("exporting graph to {EXPORT_PATH}"))?;
    println!();
    println!("Graph exported to {EXPORT_PATH}");

    Ok(())
}

// ── OSM import ────────────────────────────────────────────────────────────────

#[cfg(feature = "osm")]
fn load_pbf(path: &Path) -> Result<RoadGraphBuilder> {
    use dr_core::GeoBounds;
    use dr_network::{ImportConfig, osm::load_from_pbf};

    let cfg = ImportConfig {
        bounds: Some(GeoBounds::new(33.641547, 33.643007, 72.990970, 72.993065)),
        max_nodes: Some(50),
        ..ImportConfig::default()
    };
    load_from_pbf(path, &cfg).with_context(|| format!("importing {}", path.display()))
}

#[cfg(not(feature = "osm"))]
fn load_pbf(path: &Path) -> Result<RoadGraphBuilder> {
    bail!("cannot import {}: depot was built without the `osm` feature", path.display())
}
