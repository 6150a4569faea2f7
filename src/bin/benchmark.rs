use std::time::Instant;

use ordered_float::OrderedFloat;

use graph_search::graph::generators::{grid_graph, random_weighted_graph};
use graph_search::{astar_shortest_path, dijkstra_shortest_paths};

/// Octile distance on an 8-connected grid with 1.0/1.4 move costs
fn octile(from: (usize, usize), to: (usize, usize)) -> OrderedFloat<f64> {
    let dx = (from.0 as f64 - to.0 as f64).abs();
    let dy = (from.1 as f64 - to.1 as f64).abs();
    OrderedFloat(dx.max(dy) + 0.4 * dx.min(dy))
}

fn benchmark_random_graphs() {
    println!("=====================================================");
    println!("Benchmark: Dijkstra on random directed graphs");
    println!("Edge factor: 4 edges per vertex (on average)");
    println!("=====================================================");

    for &num_nodes in &[1_000usize, 10_000, 50_000] {
        let graph = random_weighted_graph(num_nodes, 4.0);

        let start = Instant::now();
        let distances = dijkstra_shortest_paths(&graph, &0).unwrap();
        let duration = start.elapsed();

        let reached = distances
            .values()
            .filter(|d| d.into_inner().is_finite())
            .count();
        println!(
            "  {} nodes: reached {} in {:?}",
            num_nodes, reached, duration
        );
    }
}

fn benchmark_grid_pathfinding() {
    let (width, height) = (200usize, 200usize);
    let graph = grid_graph(width, height);
    let start = (0usize, 0usize);
    let goal = (width - 1, height - 1);

    println!("=====================================================");
    println!("Benchmark: goal-directed A* vs Dijkstra, {}x{} grid", width, height);
    println!("=====================================================");

    let t = Instant::now();
    let distances = dijkstra_shortest_paths(&graph, &start).unwrap();
    let dijkstra_time = t.elapsed();
    let dijkstra_cost = distances[&goal];

    let t = Instant::now();
    let (_, astar_cost) =
        astar_shortest_path(&graph, &start, &goal, |n| octile(*n, goal)).unwrap();
    let astar_time = t.elapsed();

    let t = Instant::now();
    let (_, blind_cost) =
        astar_shortest_path(&graph, &start, &goal, |_| OrderedFloat(0.0)).unwrap();
    let blind_time = t.elapsed();

    assert_eq!(astar_cost, dijkstra_cost, "octile A* must match Dijkstra");
    assert_eq!(blind_cost, dijkstra_cost, "zero-heuristic A* must match Dijkstra");

    println!("  Dijkstra (all nodes):    {:?}", dijkstra_time);
    println!("  A*, octile heuristic:    {:?}", astar_time);
    println!("  A*, zero heuristic:      {:?}", blind_time);
    println!("  Path cost: {:.1}", astar_cost.into_inner());
}

fn main() {
    env_logger::init();

    benchmark_random_graphs();
    benchmark_grid_pathfinding();
}
