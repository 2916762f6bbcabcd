//! Minroute - Shortest-Path Computation Core for Weighted Directed Graphs
//!
//! This library answers minimum-cost route queries over a static graph
//! snapshot under three distinct cost models:
//!
//! - [`Dijkstra`]: single-source with non-negative weights, driven by a
//!   lazy-deletion priority queue.
//! - [`BellmanFord`]: single-source with arbitrary signed weights and
//!   negative-cycle detection.
//! - [`FloydWarshall`]: dense all-pairs closure with next-hop tracking.
//!
//! All three consume the same read-only [`Graph`](graph::Graph) model and
//! share one path-reconstruction contract (see the [`path`] module): each
//! query produces an explicit vertex sequence, or no sequence at all when
//! the target is unreachable. Rendering of distance tables and routes is a
//! caller concern; the core returns structured results only.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod path;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::FloydWarshall,
    AllPairsPaths, ShortestPathTree, SingleSourceAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("The graph contains a negative weight cycle")]
    NegativeCycle,

    #[error("The graph has no vertices")]
    EmptyGraph,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
