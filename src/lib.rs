//! Johnson APSP - All-Pairs Shortest Paths with Negative Edge Weights
//!
//! This library implements Johnson's algorithm for directed graphs whose edge weights may be
//! negative, as long as no negative-weight cycle exists. A single Bellman-Ford run from a virtual
//! source yields vertex potentials, the graph is reweighted to non-negative weights, Dijkstra runs
//! from every vertex, and the resulting distances are unweighted back to the original metric.
//!
//! Unreachable pairs are reported as `None` rather than through a numeric sentinel.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
pub mod io;
#[cfg(feature = "python")]
mod python;
pub mod web;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, johnson::Johnson, AllPairsAlgorithm,
    AllPairsResult, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::traits::Weight;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Missing edge: from {0} to {1}")]
    MissingEdge(usize, usize),

    #[error("Non-finite weight on edge from {0} to {1}")]
    NonFiniteWeight(usize, usize),

    #[error("Bellman-Ford algorithm has detected a negative cycle")]
    NegativeCycle,

    #[error("Path weight overflowed the weight type")]
    WeightOverflow,

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
