use std::collections::HashMap;

use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with approximately `edge_factor * n` edges
/// Returns the weighted adjacency map consumed by Dijkstra and A*
pub fn random_weighted_graph(
    num_nodes: usize,
    edge_factor: f64,
) -> HashMap<usize, HashMap<usize, OrderedFloat<f64>>> {
    let mut graph: HashMap<usize, HashMap<usize, OrderedFloat<f64>>> = HashMap::new();
    let mut rng = rand::thread_rng();

    // Every node must be present as a key, even if it has no outgoing edges
    for v in 0..num_nodes {
        graph.insert(v, HashMap::new());
    }

    let num_edges = (edge_factor * num_nodes as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_nodes);
        let v = rng.gen_range(0..num_nodes);
        // Avoid self-loops and ensure positive weights
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            if let Some(edges) = graph.get_mut(&u) {
                edges.insert(v, weight);
            }
        }
    }

    graph
}

/// Generates an 8-connected grid graph with (x, y) coordinate nodes
///
/// Cardinal moves cost 1.0, diagonal moves 1.4, matching the usual
/// grid-pathfinding setup.
pub fn grid_graph(
    width: usize,
    height: usize,
) -> HashMap<(usize, usize), HashMap<(usize, usize), OrderedFloat<f64>>> {
    let mut graph = HashMap::new();

    for y in 0..height {
        for x in 0..width {
            let mut edges = HashMap::new();

            // Define possible moves (8 directions)
            let directions = [
                // Cardinal directions (N, E, S, W)
                (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
                // Diagonal directions (NE, SE, SW, NW)
                (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
            ];

            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    edges.insert((nx as usize, ny as usize), OrderedFloat(cost));
                }
            }

            graph.insert((x, y), edges);
        }
    }

    graph
}
