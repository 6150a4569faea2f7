//! Adjacency-trait implementations for the plain map forms callers supply.
//!
//! The engine consumes graphs through [`UnweightedGraph`] and
//! [`WeightedGraph`]; implementing both for the standard-library maps means a
//! `HashMap<N, Vec<N>>` or `HashMap<N, HashMap<N, W>>` the caller already
//! holds is a graph as-is. Lookups are defensive: a node that is not a key
//! simply has no neighbors.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Float, Zero};

use crate::graph::traits::{UnweightedGraph, WeightedGraph};

impl<N> UnweightedGraph<N> for HashMap<N, Vec<N>>
where
    N: Clone + Eq + Hash,
{
    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = N> + '_> {
        if let Some(adjacent) = self.get(node) {
            Box::new(adjacent.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<N> UnweightedGraph<N> for BTreeMap<N, Vec<N>>
where
    N: Clone + Ord,
{
    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = N> + '_> {
        if let Some(adjacent) = self.get(node) {
            Box::new(adjacent.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<N, W> WeightedGraph<N, W> for HashMap<N, HashMap<N, W>>
where
    N: Clone + Eq + Hash,
    W: Float + Zero + Debug + Copy,
{
    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.keys().cloned())
    }

    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_> {
        if let Some(edges) = self.get(node) {
            Box::new(edges.iter().map(|(neighbor, weight)| (neighbor.clone(), *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<N, W> WeightedGraph<N, W> for BTreeMap<N, BTreeMap<N, W>>
where
    N: Clone + Ord,
    W: Float + Zero + Debug + Copy,
{
    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.keys().cloned())
    }

    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_> {
        if let Some(edges) = self.get(node) {
            Box::new(edges.iter().map(|(neighbor, weight)| (neighbor.clone(), *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }
}
