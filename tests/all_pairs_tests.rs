use minroute::graph::{AdjacencyGraph, Graph};
use minroute::{BellmanFord, Error, FloydWarshall, SingleSourceAlgorithm};

fn example_graph() -> AdjacencyGraph<&'static str, i64> {
    AdjacencyGraph::from_adjacency(vec![
        ("A", vec![("B", 3), ("C", 5)]),
        ("B", vec![("C", 2), ("D", 6)]),
        ("C", vec![("B", 1), ("D", 4), ("E", 6)]),
        ("D", vec![("E", 2)]),
        ("E", vec![("A", 3), ("D", 7)]),
    ])
    .unwrap()
}

#[test]
fn example_graph_distances_from_a() {
    let graph = example_graph();
    let paths = FloydWarshall::new().all_pairs(&graph).unwrap();

    assert_eq!(paths.distance_between(&"A", &"A").unwrap(), Some(0));
    assert_eq!(paths.distance_between(&"A", &"B").unwrap(), Some(3));
    assert_eq!(paths.distance_between(&"A", &"C").unwrap(), Some(5));
    assert_eq!(paths.distance_between(&"A", &"D").unwrap(), Some(9));
    assert_eq!(paths.distance_between(&"A", &"E").unwrap(), Some(11));
}

#[test]
fn matches_bellman_ford_for_every_source() {
    let graph = example_graph();
    let paths = FloydWarshall::new().all_pairs(&graph).unwrap();

    for source in graph.vertices() {
        let tree = BellmanFord::new().shortest_paths(&graph, source).unwrap();
        for target in graph.vertices() {
            assert_eq!(
                paths.distance_between(source, target).unwrap(),
                tree.distance(target),
                "all-pairs and single-source disagree on {} -> {}",
                source,
                target
            );
        }
    }
}

#[test]
fn forward_walk_rebuilds_a_shortest_path() {
    let graph = example_graph();
    let paths = FloydWarshall::new().all_pairs(&graph).unwrap();

    let route = paths.path(&"A", &"D").unwrap().expect("D is reachable");

    assert_eq!(route.first(), Some(&"A"));
    assert_eq!(route.last(), Some(&"D"));

    // The walk may only use real edges, and their weights must add up to
    // the reported distance.
    let mut cost = 0;
    for hop in route.windows(2) {
        let weight = graph
            .outgoing_edges(&hop[0])
            .filter(|(destination, _)| **destination == hop[1])
            .map(|(_, weight)| weight)
            .min()
            .expect("walk must follow existing edges");
        cost += weight;
    }
    assert_eq!(Some(cost), paths.distance_between(&"A", &"D").unwrap());
}

#[test]
fn next_hop_points_along_the_path() {
    let graph = example_graph();
    let paths = FloydWarshall::new().all_pairs(&graph).unwrap();

    let route = paths.path(&"A", &"E").unwrap().unwrap();
    assert_eq!(paths.next_hop(&"A", &"E").unwrap(), Some(&route[1]));
}

#[test]
fn vertex_order_is_deterministic() {
    let graph = example_graph();

    let first = FloydWarshall::new().all_pairs(&graph).unwrap();
    let second = FloydWarshall::new().all_pairs(&graph).unwrap();

    assert_eq!(first.vertices(), second.vertices());
    for i in first.vertices() {
        for j in first.vertices() {
            assert_eq!(
                first.distance_between(i, j).unwrap(),
                second.distance_between(i, j).unwrap()
            );
        }
    }
}

#[test]
fn empty_graph_is_rejected() {
    let graph: AdjacencyGraph<&str, i64> = AdjacencyGraph::from_adjacency(vec![]).unwrap();

    assert_eq!(
        FloydWarshall::new().all_pairs(&graph).unwrap_err(),
        Error::EmptyGraph
    );
}

#[test]
fn single_vertex_graph_has_zero_self_distance_and_no_self_path() {
    let graph: AdjacencyGraph<&str, i64> =
        AdjacencyGraph::from_adjacency(vec![("A", vec![])]).unwrap();
    let paths = FloydWarshall::new().all_pairs(&graph).unwrap();

    assert_eq!(paths.distance_between(&"A", &"A").unwrap(), Some(0));
    assert_eq!(paths.path(&"A", &"A").unwrap(), None);
}

#[test]
fn disconnected_pair_has_no_distance_and_no_path() {
    let graph = AdjacencyGraph::from_adjacency(vec![
        ("A", vec![("B", 1)]),
        ("B", vec![]),
        ("X", vec![]),
    ])
    .unwrap();
    let paths = FloydWarshall::new().all_pairs(&graph).unwrap();

    assert_eq!(paths.distance_between(&"A", &"X").unwrap(), None);
    assert_eq!(paths.next_hop(&"A", &"X").unwrap(), None);
    assert_eq!(paths.path(&"A", &"X").unwrap(), None);
}

#[test]
fn unknown_vertices_are_rejected() {
    let graph = example_graph();
    let paths = FloydWarshall::new().all_pairs(&graph).unwrap();

    assert!(matches!(
        paths.distance_between(&"A", &"Z"),
        Err(Error::UnknownVertex(_))
    ));
    assert!(matches!(paths.path(&"Z", &"A"), Err(Error::UnknownVertex(_))));
}

#[test]
fn negative_diagonal_flags_a_cycle() {
    let graph = AdjacencyGraph::from_adjacency(vec![
        ("A", vec![("B", 1)]),
        ("B", vec![("C", -3)]),
        ("C", vec![("A", 1)]),
    ])
    .unwrap();

    // The run itself does not fail; the post-check reports the cycle.
    let paths = FloydWarshall::new().all_pairs(&graph).unwrap();
    assert!(paths.has_negative_cycle());

    let clean = FloydWarshall::new().all_pairs(&example_graph()).unwrap();
    assert!(!clean.has_negative_cycle());
}
