use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the skyline path library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a query endpoint was not supplied.
    #[error("missing query argument: {argument} is required")]
    MissingArgument { argument: &'static str },

    /// Raised when the source and destination of a query are the same node.
    #[error("source and destination must differ (both were {node})")]
    IdenticalEndpoints { node: NodeId },

    /// Raised when a node identifier is not part of the graph.
    #[error("unknown node: {node}")]
    UnknownNode { node: NodeId },

    /// Raised when an attribute lookup is attempted for a non-adjacent pair.
    #[error("no edge from {from} to {to}")]
    MissingEdge { from: NodeId, to: NodeId },

    /// Raised when a path has no edges to aggregate.
    #[error("path has no edges")]
    EmptyPath,

    /// Raised when an attribute vector length differs from the graph dimension.
    #[error("attribute dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Raised when an attribute component is NaN or infinite.
    #[error("invalid attribute on edge {from} -> {to}: {value} is not finite")]
    InvalidAttribute {
        from: NodeId,
        to: NodeId,
        value: f64,
    },

    /// Raised when the same ordered node pair is added twice.
    #[error("duplicate edge from {from} to {to}")]
    DuplicateEdge { from: NodeId, to: NodeId },

    /// Raised when a node is declared twice.
    #[error("duplicate node: {node}")]
    DuplicateNode { node: NodeId },

    /// Raised when a graph text record cannot be interpreted.
    #[error("invalid graph record on line {line}: {message}")]
    GraphFormat { line: u64, message: String },

    /// Raised when a shortest-path objective refers to a missing dimension.
    #[error("objective dimension {index} is out of range for dimension {dimension}")]
    InvalidObjective { index: usize, dimension: usize },

    /// Raised when an engine configuration file cannot be used.
    #[error("invalid engine configuration at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
