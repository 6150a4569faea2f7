//! Graph Search - BFS, Dijkstra and A* over caller-supplied adjacency graphs
//!
//! This library implements the three classic shortest-path searches as
//! stateless entry points over graphs the caller already holds: unweighted
//! breadth-first search, single-source Dijkstra with non-negative weights,
//! and heuristic-guided A*.
//!
//! Graphs are consumed through the adjacency traits in [`graph`], which are
//! implemented for the plain standard-library map forms (`HashMap<N, Vec<N>>`
//! for unweighted graphs, `HashMap<N, HashMap<N, W>>` for weighted ones), so
//! no dedicated graph type is required. The engine never mutates the graph
//! and keeps no state between calls.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    astar::astar_shortest_path, bfs::bfs_shortest_path, dijkstra::dijkstra_shortest_paths,
};
/// Re-export main traits for convenient use
pub use graph::{UnweightedGraph, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("edge from {node} references neighbor {neighbor} absent from the graph's node set")]
    UnknownNeighbor { node: String, neighbor: String },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
