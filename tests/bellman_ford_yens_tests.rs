mod common;

use common::{assert_valid_cycle, assert_valid_tree, reachable_from};
use yens_sssp::graph::read_graph;
use yens_sssp::{
    BellmanFordYens, DirectedGraph, Error, NegativeCycle, ShortestPathAlgorithm, ShortestPathResult,
    ShortestPathTree,
};

fn compute(graph: &DirectedGraph<i32>, source: usize) -> ShortestPathResult {
    BellmanFordYens::new().compute(graph, source).unwrap()
}

/// Rotates a cycle so that its smallest vertex comes first
fn canonical(cycle: &NegativeCycle) -> Vec<usize> {
    let start = cycle
        .vertices
        .iter()
        .enumerate()
        .min_by_key(|(_, v)| **v)
        .map(|(i, _)| i)
        .unwrap();
    let mut vertices = cycle.vertices.clone();
    vertices.rotate_left(start);
    vertices
}

#[test]
fn test_three_vertex_tree() {
    let graph = DirectedGraph::from_edges(3, vec![(0, 1, 5), (0, 2, 2), (2, 1, 1)]).unwrap();
    let result = compute(&graph, 0);

    assert_eq!(
        result,
        ShortestPathResult::ShortestPathTree(ShortestPathTree {
            source: 0,
            distances: vec![Some(0), Some(3), Some(2)],
            predecessors: vec![None, Some(2), Some(0)],
        })
    );
}

#[test]
fn test_four_vertex_negative_cycle() {
    let graph = DirectedGraph::from_edges(4, vec![(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 1, -3)]).unwrap();
    let cycle = compute(&graph, 0).negative_cycle().cloned().expect("negative cycle");

    assert_eq!(canonical(&cycle), vec![1, 2, 3]);
    assert_eq!(cycle.total_weight, -1);
    assert_valid_cycle(&graph, &cycle);
}

#[test]
fn test_source_without_outgoing_edges() {
    let graph = DirectedGraph::from_edges(4, vec![(1, 0, -3), (2, 3, 4), (3, 1, -1)]).unwrap();
    let tree = compute(&graph, 0).shortest_path_tree().cloned().expect("tree");

    assert_eq!(tree.distances, vec![Some(0), None, None, None]);
    assert_eq!(tree.predecessors, vec![None; 4]);
}

#[test]
fn test_negative_self_loop() {
    let graph = DirectedGraph::from_edges(4, vec![(0, 1, 4), (1, 2, -2), (2, 2, -7), (2, 3, 1)]).unwrap();
    let cycle = compute(&graph, 0).negative_cycle().cloned().expect("negative cycle");

    assert_eq!(cycle.vertices, vec![2]);
    assert_eq!(cycle.total_weight, -7);
}

#[test]
fn test_unreachable_negative_cycle_is_ignored() {
    let graph = DirectedGraph::from_edges(5, vec![(0, 1, 3), (1, 2, -1), (3, 4, -5), (4, 3, 2)]).unwrap();
    let tree = compute(&graph, 0).shortest_path_tree().cloned().expect("tree");

    assert_eq!(tree.distances, vec![Some(0), Some(3), Some(2), None, None]);
    assert_valid_tree(&graph, &tree);
}

#[test]
fn test_cycle_behind_a_tail() {
    // 0 -> 1 -> 2 -> 3 -> 4 -> 2, cycle 2 -> 3 -> 4 weighs -2
    let graph = DirectedGraph::from_edges(
        6,
        vec![(0, 1, 2), (1, 2, 2), (2, 3, 1), (3, 4, 1), (4, 2, -4), (4, 5, 10)],
    )
    .unwrap();
    let cycle = compute(&graph, 0).negative_cycle().cloned().expect("negative cycle");

    assert_eq!(canonical(&cycle), vec![2, 3, 4]);
    assert_eq!(cycle.total_weight, -2);
}

#[test]
fn test_negative_cycle_through_source() {
    let graph = DirectedGraph::from_edges(2, vec![(0, 1, -1), (1, 0, -1)]).unwrap();
    let cycle = compute(&graph, 0).negative_cycle().cloned().expect("negative cycle");

    assert_eq!(canonical(&cycle), vec![0, 1]);
    assert_eq!(cycle.total_weight, -2);
}

#[test]
fn test_zero_weight_cycle_is_not_negative() {
    let graph = DirectedGraph::from_edges(3, vec![(0, 1, 2), (1, 2, -3), (2, 1, 3)]).unwrap();
    let tree = compute(&graph, 0).shortest_path_tree().cloned().expect("tree");

    assert_eq!(tree.distances, vec![Some(0), Some(2), Some(-1)]);
    assert_valid_tree(&graph, &tree);
}

#[test]
fn test_parallel_edges_use_the_cheapest() {
    let graph = DirectedGraph::from_edges(2, vec![(0, 1, 9), (0, 1, -4), (0, 1, 2)]).unwrap();
    let tree = compute(&graph, 0).shortest_path_tree().cloned().expect("tree");

    assert_eq!(tree.distance(1), Some(-4));
}

#[test]
fn test_invalid_source() {
    let graph: DirectedGraph<i32> = DirectedGraph::new(3);
    let err = BellmanFordYens::new().compute(&graph, 3).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { vertex: 3, vertex_count: 3 }));

    let empty: DirectedGraph<i32> = DirectedGraph::new(0);
    assert!(BellmanFordYens::new().compute(&empty, 0).is_err());
}

#[test]
fn test_compute_is_idempotent() {
    let graph = DirectedGraph::from_edges(
        5,
        vec![(0, 1, 4), (0, 2, -1), (2, 1, 2), (1, 3, -2), (3, 4, 3), (4, 2, 1)],
    )
    .unwrap();
    let snapshot = graph.clone();

    let first = compute(&graph, 0);
    let second = compute(&graph, 0);

    assert_eq!(first, second);
    assert_eq!(graph, snapshot);
}

#[test]
fn test_small_weight_types() {
    let graph: DirectedGraph<i8> =
        DirectedGraph::from_edges(3, vec![(0, 1, 127), (1, 2, 127), (0, 2, -128)]).unwrap();
    let result = BellmanFordYens::new().compute(&graph, 0).unwrap();
    let tree = result.shortest_path_tree().unwrap();
    assert_eq!(tree.distances, vec![Some(0), Some(127), Some(-128)]);
}

#[test]
fn test_long_chain_settles_without_false_cycle() {
    // A path of n - 1 edges needs every available round
    let n = 50;
    let edges: Vec<_> = (0..n - 1).map(|v| (v, v + 1, -1)).collect();
    let graph = DirectedGraph::from_edges(n, edges).unwrap();
    let tree = compute(&graph, 0).shortest_path_tree().cloned().expect("tree");

    assert_eq!(tree.distance(n - 1), Some(-(n as i64 - 1)));
    assert_eq!(tree.path_to(n - 1).map(|p| p.len()), Some(n));
}

#[test]
fn test_reported_cycle_is_reachable() {
    let graph = DirectedGraph::from_edges(
        6,
        vec![(0, 1, 1), (1, 2, 1), (2, 1, -5), (3, 4, -9), (4, 3, -9), (5, 3, 0)],
    )
    .unwrap();
    let cycle = compute(&graph, 0).negative_cycle().cloned().expect("negative cycle");

    let reached = reachable_from(&graph, 0);
    assert!(cycle.vertices.iter().all(|&v| reached[v]));
    assert_valid_cycle(&graph, &cycle);
}

#[test]
fn test_bundled_data_files() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let engine = BellmanFordYens::new();

    let tree_graph: DirectedGraph<i32> = read_graph(dir.join("reseau1.txt")).unwrap();
    let tree = engine.compute(&tree_graph, 0).unwrap();
    assert_eq!(tree.shortest_path_tree().unwrap().distances, vec![Some(0), Some(1), Some(2)]);

    let cycle_graph: DirectedGraph<i32> = read_graph(dir.join("reseau2.txt")).unwrap();
    let cycle = engine.compute(&cycle_graph, 0).unwrap();
    assert_eq!(cycle.negative_cycle().unwrap().total_weight, -1);

    let loop_graph: DirectedGraph<i32> = read_graph(dir.join("reseau3.txt")).unwrap();
    let self_loop = engine.compute(&loop_graph, 0).unwrap();
    assert_eq!(self_loop.negative_cycle().unwrap().vertices, vec![2]);

    let unreachable_graph: DirectedGraph<i32> = read_graph(dir.join("reseau4.txt")).unwrap();
    assert!(!engine.compute(&unreachable_graph, 0).unwrap().is_negative_cycle());

    let large_graph: DirectedGraph<i32> = read_graph(dir.join("reseau5.txt")).unwrap();
    let large = engine.compute(&large_graph, 0).unwrap();
    assert_valid_tree(&large_graph, large.shortest_path_tree().unwrap());
}
