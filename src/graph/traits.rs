use std::fmt::Debug;

use num_traits::{Float, Zero};

/// Trait representing an unweighted graph as a neighbor relation
///
/// Used by breadth-first search, where every edge has implicit unit weight.
pub trait UnweightedGraph<N> {
    /// Returns an iterator over the neighbors of a node
    ///
    /// A node absent from the graph has no neighbors.
    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = N> + '_>;
}

/// Trait representing a weighted directed graph
pub trait WeightedGraph<N, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns an iterator over every node key present in the graph
    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_>;

    /// Returns an iterator over the outgoing edges from a node
    ///
    /// A node absent from the graph has no outgoing edges.
    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_>;
}
