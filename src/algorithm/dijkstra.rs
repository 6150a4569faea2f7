use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;
use num_traits::{Float, Zero};

use crate::data_structures::MinPriorityQueue;
use crate::graph::WeightedGraph;
use crate::{Error, Result};

/// Computes the minimum cumulative edge-weight distance from `start` to every
/// node key present in the graph
///
/// Nodes the search never reaches keep `W::infinity()` in the returned table.
/// Only distances are produced, not paths. All edge weights must be
/// non-negative; negative weights are not detected and leave the result
/// unspecified. A start absent from the graph is permitted: its zero entry is
/// added to the table and nothing is reachable from it.
///
/// # Errors
///
/// Returns [`Error::UnknownNeighbor`] when an adjacency entry references a
/// neighbor that is not itself a key in the graph. The graph is not validated
/// up front; the error surfaces at the first relaxation that trips over the
/// missing key.
pub fn dijkstra_shortest_paths<N, W, G>(graph: &G, start: &N) -> Result<HashMap<N, W>>
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: Float + Zero + Copy + Debug + Ord,
    G: WeightedGraph<N, W>,
{
    let mut distances: HashMap<N, W> =
        graph.nodes().map(|node| (node, W::infinity())).collect();
    distances.insert(start.clone(), W::zero());

    let mut queue = MinPriorityQueue::new();
    queue.push(start.clone(), W::zero());

    while let Some((node, distance)) = queue.pop() {
        // Lazy deletion: a popped entry worse than the recorded distance is
        // stale, left over from before a shorter path was found.
        if let Some(&best) = distances.get(&node) {
            if distance > best {
                continue;
            }
        }

        for (neighbor, weight) in graph.outgoing_edges(&node) {
            let candidate = distance + weight;

            match distances.get_mut(&neighbor) {
                Some(entry) => {
                    if candidate < *entry {
                        *entry = candidate;
                        queue.push(neighbor, candidate);
                    }
                }
                None => {
                    return Err(Error::UnknownNeighbor {
                        node: format!("{:?}", node),
                        neighbor: format!("{:?}", neighbor),
                    });
                }
            }
        }
    }

    let reached = distances.values().filter(|d| **d < W::infinity()).count();
    debug!("dijkstra settled {} of {} nodes", reached, distances.len());

    Ok(distances)
}
