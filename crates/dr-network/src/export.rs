//! Plain-text edge list export and import.
//!
//! # Format
//!
//! ```text
//! Number of Intersections: 3
//! Edges:
//! 0 1 4.00
//! 0 2 10.00
//! 1 2 3.00
//! ```
//!
//! One space-separated `u v weight` row per undirected road with `u < v`;
//! weights are written with two decimals.  Reading accepts any number of
//! decimals, so hand-written files work as manual input.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Terminator, Trim, WriterBuilder};
use log::info;

use dr_core::NodeId;

use crate::{NetworkError, NetworkResult, RoadGraph, RoadGraphBuilder};

const COUNT_PREFIX: &str = "Number of Intersections:";
const EDGES_HEADER: &str = "Edges:";

/// Write `graph` as an edge list.
pub fn write_edge_list<W: Write>(graph: &RoadGraph, mut out: W) -> NetworkResult<()> {
    writeln!(out, "{COUNT_PREFIX} {}", graph.node_count())?;
    writeln!(out, "{EDGES_HEADER}")?;

    let mut rows = WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);
    for (u, v, weight) in graph.edges() {
        rows.write_record(&[u.to_string(), v.to_string(), format!("{weight:.2}")])?;
    }
    rows.flush()?;
    Ok(())
}

/// Write `graph` as an edge list to a new file at `path`.
pub fn export_edge_list(graph: &RoadGraph, path: &Path) -> NetworkResult<()> {
    write_edge_list(graph, BufWriter::new(File::create(path)?))?;
    info!("exported {} roads to {}", graph.edge_count(), path.display());
    Ok(())
}

/// Parse an edge list into a builder.
///
/// # Errors
///
/// - [`NetworkError::Parse`] on a malformed header.
/// - [`NetworkError::Csv`] on a malformed edge row.
/// - Any [`RoadGraphBuilder::add_edge`] error for invalid endpoints or
///   weights.
pub fn read_edge_list<R: Read>(input: R) -> NetworkResult<RoadGraphBuilder> {
    let mut reader = BufReader::new(input);

    let mut line = String::new();
    reader.read_line(&mut line)?;
    let node_count = line
        .trim()
        .strip_prefix(COUNT_PREFIX)
        .and_then(|n| n.trim().parse::<usize>().ok())
        .ok_or_else(|| NetworkError::Parse {
            line:    1,
            message: format!("expected `{COUNT_PREFIX} N`, got {:?}", line.trim()),
        })?;

    line.clear();
    reader.read_line(&mut line)?;
    if line.trim() != EDGES_HEADER {
        return Err(NetworkError::Parse {
            line:    2,
            message: format!("expected `{EDGES_HEADER}`, got {:?}", line.trim()),
        });
    }

    let mut builder = RoadGraphBuilder::new(node_count)?;
    let mut rows = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(reader);
    for row in rows.deserialize::<(u32, u32, f64)>() {
        let (u, v, weight) = row?;
        builder.add_edge(NodeId(u), NodeId(v), weight)?;
    }
    Ok(builder)
}

/// Read an edge list file.
pub fn load_edge_list(path: &Path) -> NetworkResult<RoadGraphBuilder> {
    let builder = read_edge_list(File::open(path)?)?;
    info!(
        "loaded {} intersections and {} roads from {}",
        builder.node_count(),
        builder.edge_count(),
        path.display()
    );
    Ok(builder)
}
