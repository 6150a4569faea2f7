use std::collections::HashMap;

use ordered_float::OrderedFloat;

use graph_search::{astar_shortest_path, bfs_shortest_path, dijkstra_shortest_paths, Error};

// The unweighted fixture: A branches to B and C, and the only two routes to F
// are A-C-F (two edges) and A-B-E-F (three edges).
fn sample_unweighted() -> HashMap<&'static str, Vec<&'static str>> {
    HashMap::from([
        ("A", vec!["B", "C"]),
        ("B", vec!["D", "E"]),
        ("C", vec!["F"]),
        ("D", vec![]),
        ("E", vec!["F"]),
        ("F", vec![]),
    ])
}

fn sample_weighted() -> HashMap<&'static str, HashMap<&'static str, OrderedFloat<f64>>> {
    HashMap::from([
        (
            "A",
            HashMap::from([("B", OrderedFloat(1.0)), ("C", OrderedFloat(4.0))]),
        ),
        (
            "B",
            HashMap::from([("C", OrderedFloat(2.0)), ("D", OrderedFloat(5.0))]),
        ),
        ("C", HashMap::from([("D", OrderedFloat(1.0))])),
        ("D", HashMap::new()),
    ])
}

#[test]
fn bfs_returns_fewest_edge_path() {
    let graph = sample_unweighted();

    let path = bfs_shortest_path(&graph, &"A", &"F");
    assert_eq!(path, Some(vec!["A", "C", "F"]), "should take the two-edge route");
}

#[test]
fn bfs_start_equals_goal() {
    let graph = sample_unweighted();
    assert_eq!(bfs_shortest_path(&graph, &"A", &"A"), Some(vec!["A"]));
}

#[test]
fn bfs_unreachable_goal_returns_none() {
    let mut graph = sample_unweighted();
    graph.insert("Z", vec![]);

    assert_eq!(bfs_shortest_path(&graph, &"A", &"Z"), None);
}

#[test]
fn bfs_absent_start_and_goal_are_permissive() {
    let graph = sample_unweighted();

    // Absent nodes simply have no neighbors; no panic, no error.
    assert_eq!(bfs_shortest_path(&graph, &"X", &"F"), None);
    assert_eq!(bfs_shortest_path(&graph, &"A", &"X"), None);
}

#[test]
fn dijkstra_distance_table() {
    let graph = sample_weighted();
    let distances = dijkstra_shortest_paths(&graph, &"A").unwrap();

    assert_eq!(distances[&"A"], OrderedFloat(0.0));
    assert_eq!(distances[&"B"], OrderedFloat(1.0));
    assert_eq!(distances[&"C"], OrderedFloat(3.0), "A-B-C beats the direct A-C edge");
    assert_eq!(distances[&"D"], OrderedFloat(4.0));
    assert_eq!(distances.len(), 4, "every graph key gets a table entry");
}

#[test]
fn dijkstra_unreached_nodes_stay_infinite() {
    let mut graph = sample_weighted();
    graph.insert("E", HashMap::new());

    let distances = dijkstra_shortest_paths(&graph, &"A").unwrap();
    assert_eq!(distances[&"E"], OrderedFloat(f64::INFINITY));
}

#[test]
fn dijkstra_absent_start_is_permissive() {
    let graph = sample_weighted();
    let distances = dijkstra_shortest_paths(&graph, &"Z").unwrap();

    assert_eq!(distances[&"Z"], OrderedFloat(0.0));
    for node in ["A", "B", "C", "D"] {
        assert_eq!(
            distances[&node],
            OrderedFloat(f64::INFINITY),
            "nothing is reachable from a node outside the graph"
        );
    }
}

#[test]
fn dijkstra_inconsistent_adjacency_is_an_error() {
    let graph: HashMap<&str, HashMap<&str, OrderedFloat<f64>>> = HashMap::from([
        ("A", HashMap::from([("B", OrderedFloat(1.0))])),
        // B points at a neighbor that is not a key in the graph.
        ("B", HashMap::from([("X", OrderedFloat(1.0))])),
    ]);

    let err = dijkstra_shortest_paths(&graph, &"A").unwrap_err();
    let Error::UnknownNeighbor { node, neighbor } = err;
    assert!(node.contains('B'), "error should name the offending node, got {node}");
    assert!(neighbor.contains('X'), "error should name the missing neighbor, got {neighbor}");
}

#[test]
fn astar_zero_heuristic_matches_dijkstra() {
    let graph = sample_weighted();

    let (path, cost) =
        astar_shortest_path(&graph, &"A", &"D", |_| OrderedFloat(0.0)).unwrap();
    assert_eq!(path, vec!["A", "B", "C", "D"]);
    assert_eq!(cost, OrderedFloat(4.0));

    let distances = dijkstra_shortest_paths(&graph, &"A").unwrap();
    assert_eq!(cost, distances[&"D"]);
}

#[test]
fn astar_start_equals_goal() {
    let graph = sample_weighted();
    let (path, cost) =
        astar_shortest_path(&graph, &"A", &"A", |_| OrderedFloat(0.0)).unwrap();
    assert_eq!(path, vec!["A"]);
    assert_eq!(cost, OrderedFloat(0.0));
}

#[test]
fn astar_unreachable_goal_returns_none() {
    let mut graph = sample_weighted();
    graph.insert("E", HashMap::new());

    let result = astar_shortest_path(&graph, &"A", &"E", |_| OrderedFloat(0.0));
    assert_eq!(result, None);
}

#[test]
fn astar_absent_nodes_are_permissive() {
    let graph = sample_weighted();

    assert_eq!(astar_shortest_path(&graph, &"X", &"D", |_| OrderedFloat(0.0)), None);
    assert_eq!(astar_shortest_path(&graph, &"A", &"X", |_| OrderedFloat(0.0)), None);
}

#[test]
fn repeated_calls_return_identical_results() {
    let unweighted = sample_unweighted();
    let weighted = sample_weighted();

    assert_eq!(
        bfs_shortest_path(&unweighted, &"A", &"F"),
        bfs_shortest_path(&unweighted, &"A", &"F"),
    );
    assert_eq!(
        dijkstra_shortest_paths(&weighted, &"A").unwrap(),
        dijkstra_shortest_paths(&weighted, &"A").unwrap(),
    );
    assert_eq!(
        astar_shortest_path(&weighted, &"A", &"D", |_| OrderedFloat(0.0)),
        astar_shortest_path(&weighted, &"A", &"D", |_| OrderedFloat(0.0)),
    );
}
