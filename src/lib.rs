//! Yens SSSP - Bellman-Ford single-source shortest paths with negative cycle detection
//!
//! This library implements Bellman-Ford relaxation with Yen's FIFO queue
//! discipline: only vertices whose distance just improved are rescanned, and
//! relaxation rounds are counted so the search stops early once a round changes
//! nothing. Edge weights may be negative. When a negative cycle is reachable
//! from the source, the cycle itself is returned instead of distances.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;
pub mod web;

pub use algorithm::{
    BellmanFord, BellmanFordYens, NegativeCycle, ShortestPathAlgorithm, ShortestPathResult,
    ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Graph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid argument: source vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidArgument { vertex: usize, vertex_count: usize },

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Weight overflow on edge {from} -> {to}")]
    WeightOverflow { from: usize, to: usize },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
