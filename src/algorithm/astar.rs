use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;
use num_traits::{Float, Zero};

use crate::data_structures::SequencedMinHeap;
use crate::graph::WeightedGraph;

/// Returns the minimum-cost path from `start` to `goal` and its total cost,
/// guided by `heuristic`, or `None` when the goal is unreachable
///
/// The heuristic must be non-negative and admissible (never overestimate the
/// remaining cost) for the returned path to be optimal; consistency across
/// edges additionally keeps the lazy revisit pruning exact. A heuristic that
/// is identically zero makes the search Dijkstra-equivalent. Neither property
/// is validated.
///
/// Frontier entries are ordered by estimated total cost, then accumulated
/// cost, then insertion order. Node identifiers and partial paths never
/// participate in the comparison.
pub fn astar_shortest_path<N, W, G, H>(
    graph: &G,
    start: &N,
    goal: &N,
    heuristic: H,
) -> Option<(Vec<N>, W)>
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: Float + Zero + Copy + Debug + Ord,
    G: WeightedGraph<N, W>,
    H: Fn(&N) -> W,
{
    let mut open = SequencedMinHeap::new();
    open.push(
        (heuristic(start), W::zero()),
        (start.clone(), vec![start.clone()]),
    );

    // Best accumulated cost seen per node. Not a strict closed set: a later,
    // cheaper route may still reopen a node.
    let mut best_cost: HashMap<N, W> = HashMap::new();

    while let Some(((_, cost), (node, path))) = open.pop() {
        // With an admissible heuristic the first goal pop is optimal.
        if node == *goal {
            return Some((path, cost));
        }

        // Lazy pruning of stale entries, mirroring Dijkstra's lazy deletion.
        if let Some(&seen) = best_cost.get(&node) {
            if cost >= seen {
                continue;
            }
        }
        best_cost.insert(node.clone(), cost);

        for (neighbor, weight) in graph.outgoing_edges(&node) {
            let next_cost = cost + weight;
            let mut next_path = path.clone();
            next_path.push(neighbor.clone());
            open.push((next_cost + heuristic(&neighbor), next_cost), (neighbor, next_path));
        }
    }

    debug!("astar drained the frontier, goal unreachable");
    None
}
