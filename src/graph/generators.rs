use crate::graph::{DirectedGraph, Graph};
use crate::{Error, Result};
use rand::prelude::*;
use std::collections::HashSet;

/// Generates a random directed graph with `n` vertices and roughly `m` edges per vertex.
/// Weights are drawn uniformly from `min_weight..=max_weight`, so negative cycles are possible.
/// Self-loops and parallel edges are never produced.
pub fn generate_random_digraph<R: Rng + ?Sized>(
    n: usize,
    m: usize,
    min_weight: i32,
    max_weight: i32,
    rng: &mut R,
) -> Result<DirectedGraph<i32>> {
    assert!(min_weight <= max_weight, "min_weight must not exceed max_weight");

    if n < 2 {
        return Ok(DirectedGraph::new(n));
    }

    let per_vertex = m.min(n - 1);
    let mut edges = Vec::with_capacity(n * per_vertex);
    for u in 0..n {
        let mut targets = HashSet::new();
        while targets.len() < per_vertex {
            let v = rng.gen_range(0..n);
            if v != u && targets.insert(v) {
                edges.push((u, v, rng.gen_range(min_weight..=max_weight)));
            }
        }
    }

    DirectedGraph::from_edges(n, edges)
}

/// Generates a graph with negative edges but no negative cycle.
///
/// Every vertex gets a random potential `p(v)` and every edge a non-negative base
/// cost `c`; the stored weight is `c + p(u) - p(v)`. Potentials telescope around
/// any cycle, so each cycle weighs the sum of its base costs, which is never negative.
///
/// Fails with [`Error::WeightOverflow`] when a shifted weight does not fit in `i32`.
pub fn generate_potential_digraph<R: Rng + ?Sized>(
    n: usize,
    m: usize,
    max_cost: i32,
    max_potential: i32,
    rng: &mut R,
) -> Result<DirectedGraph<i32>> {
    assert!(max_cost >= 0, "max_cost must be non-negative");
    assert!(max_potential >= 0, "max_potential must be non-negative");

    let potentials: Vec<i64> = (0..n)
        .map(|_| i64::from(rng.gen_range(0..=max_potential)))
        .collect();
    let base = generate_random_digraph(n, m, 0, max_cost, rng)?;

    let edges = base
        .edges()
        .map(|edge| {
            let shifted = i64::from(edge.weight) + potentials[edge.from] - potentials[edge.to];
            i32::try_from(shifted)
                .map(|weight| (edge.from, edge.to, weight))
                .map_err(|_| Error::WeightOverflow {
                    from: edge.from,
                    to: edge.to,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    DirectedGraph::from_edges(n, edges)
}

/// Generates a potential graph (see [`generate_potential_digraph`]) with a planted
/// negative cycle of `cycle_len` vertices reachable from vertex 0.
///
/// The potential part covers vertices `0 .. n - cycle_len`, the cycle runs over the
/// remaining vertices and weighs exactly `-1`. A chain `0 -> 1 -> ... -> n - cycle_len`
/// makes the cycle reachable. No parallel edges are produced.
pub fn generate_with_negative_cycle<R: Rng + ?Sized>(
    n: usize,
    m: usize,
    cycle_len: usize,
    rng: &mut R,
) -> Result<DirectedGraph<i32>> {
    assert!(cycle_len >= 1, "cycle_len must be positive");
    assert!(n > cycle_len, "n must be greater than cycle_len");

    let first = n - cycle_len;
    let potential = generate_potential_digraph(first, m, 20, 10, rng)?;

    let mut edges: Vec<(usize, usize, i32)> = potential
        .edges()
        .map(|edge| (edge.from, edge.to, edge.weight))
        .collect();

    for u in 0..first {
        if !potential.has_edge(u, u + 1) {
            edges.push((u, u + 1, rng.gen_range(0..=5)));
        }
    }

    // cycle_len - 1 edges of weight 1 closed by one edge of weight -cycle_len
    for offset in 0..cycle_len - 1 {
        edges.push((first + offset, first + offset + 1, 1));
    }
    edges.push((n - 1, first, -(cycle_len as i32)));

    DirectedGraph::from_edges(n, edges)
}
