//! Graph-model error type.

use thiserror::Error;

use dr_core::NodeId;

/// Errors produced by `dr-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("graph must have between 1 and {} nodes, got {0}", u32::MAX)]
    InvalidSize(usize),

    #[error("invalid edge endpoint {node}: {reason}")]
    InvalidNode { node: NodeId, reason: &'static str },

    #[error("edge {from} - {to} has invalid weight {weight}; weights must be positive and at most {:e}", crate::MAX_WEIGHT)]
    InvalidWeight { from: NodeId, to: NodeId, weight: f64 },

    #[error("edge list parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "osm")]
    #[error("OSM parse error: {0}")]
    Osm(String),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
