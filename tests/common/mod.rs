#![allow(dead_code)]

use std::collections::VecDeque;
use yens_sssp::{DirectedGraph, Graph, NegativeCycle, ShortestPathTree};

/// Checks that a reported cycle is a closed walk over single edges with the reported negative weight
pub fn assert_valid_cycle(graph: &DirectedGraph<i32>, cycle: &NegativeCycle) {
    assert!(!cycle.is_empty(), "cycle must not be empty");
    assert!(cycle.total_weight < 0, "cycle weight {} must be negative", cycle.total_weight);

    let mut seen = vec![false; graph.vertex_count()];
    let mut weight = 0i64;
    for (i, &from) in cycle.vertices.iter().enumerate() {
        assert!(!seen[from], "vertex {} repeats in {:?}", from, cycle.vertices);
        seen[from] = true;

        let to = cycle.vertices[(i + 1) % cycle.len()];
        let edge_weight = graph
            .get_edge_weight(from, to)
            .unwrap_or_else(|| panic!("missing edge {} -> {} in {:?}", from, to, cycle.vertices));
        weight += edge_weight as i64;
    }
    assert_eq!(weight, cycle.total_weight, "recomputed weight differs for {:?}", cycle.vertices);
}

/// Checks predecessor chains: short, repetition free, consistent with distances and edges
pub fn assert_valid_tree(graph: &DirectedGraph<i32>, tree: &ShortestPathTree) {
    let n = graph.vertex_count();
    assert_eq!(tree.distance(tree.source), Some(0));

    for v in 0..n {
        if !tree.is_reachable(v) || v == tree.source {
            assert!(tree.is_reachable(v) || tree.predecessor(v).is_none());
            continue;
        }

        let pred = tree.predecessor(v).expect("reachable vertex has a predecessor");
        let weight = graph.get_edge_weight(pred, v).expect("predecessor edge exists") as i64;
        assert_eq!(tree.distance(v), tree.distance(pred).map(|d| d + weight));

        let path = tree.path_to(v).expect("path to reachable vertex");
        assert_eq!(path[0], tree.source);
        assert!(path.len() <= n, "chain of {} edges is too long", path.len() - 1);
        let mut seen = vec![false; n];
        for &u in &path {
            assert!(!seen[u], "vertex {} repeats on path {:?}", u, path);
            seen[u] = true;
        }
    }
}

/// Vertices reachable from `source` by breadth-first search
pub fn reachable_from(graph: &DirectedGraph<i32>, source: usize) -> Vec<bool> {
    let mut reached = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::from([source]);
    reached[source] = true;
    while let Some(u) = queue.pop_front() {
        for (v, _) in graph.outgoing_edges(u) {
            if !reached[v] {
                reached[v] = true;
                queue.push_back(v);
            }
        }
    }
    reached
}
