use crate::algorithm::{NegativeCycle, ShortestPathAlgorithm, ShortestPathResult, ShortestPathTree};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Bellman-Ford: full edge sweeps, no work queue
///
/// Up to `n - 1` sweeps (stopping early once a sweep changes nothing), then one
/// more sweep; an improvement there means a negative cycle, found by stepping
/// `n` predecessors back from the improved vertex.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute(&self, graph: &G, source: usize) -> Result<ShortestPathResult> {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::InvalidArgument {
                vertex: source,
                vertex_count: n,
            });
        }

        let mut distances: Vec<Option<i64>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut incoming_weights = vec![0i64; n];
        distances[source] = Some(0);

        // Sweep n times; only the n-th sweep can observe a negative cycle
        let mut last_relaxed = None;
        for sweep in 0..n {
            last_relaxed = None;
            for u in 0..n {
                let Some(dist_u) = distances[u] else {
                    continue;
                };
                for (v, weight) in graph.outgoing_edges(u) {
                    if v >= n {
                        return Err(Error::InvalidEdge(u, v));
                    }
                    let weight: i64 = weight.into();
                    let new_dist = dist_u
                        .checked_add(weight)
                        .ok_or(Error::WeightOverflow { from: u, to: v })?;
                    if distances[v].map_or(true, |current| new_dist < current) {
                        distances[v] = Some(new_dist);
                        predecessors[v] = Some(u);
                        incoming_weights[v] = weight;
                        last_relaxed = Some(v);
                    }
                }
            }
            if last_relaxed.is_none() {
                log::debug!("Bellman-Ford settled after {} sweeps", sweep + 1);
                break;
            }
        }

        let Some(mut vertex) = last_relaxed else {
            return Ok(ShortestPathResult::ShortestPathTree(ShortestPathTree {
                source,
                distances,
                predecessors,
            }));
        };

        let broken = |at: usize| Error::AlgorithmError(format!("vertex {} has no predecessor", at));

        // n steps back from a vertex improved in the n-th sweep always land on the cycle
        for _ in 0..n {
            vertex = predecessors[vertex].ok_or_else(|| broken(vertex))?;
        }

        let mut vertices = vec![vertex];
        let mut total_weight = i128::from(incoming_weights[vertex]);
        let mut current = predecessors[vertex].ok_or_else(|| broken(vertex))?;
        while current != vertex {
            vertices.push(current);
            total_weight += i128::from(incoming_weights[current]);
            current = predecessors[current].ok_or_else(|| broken(current))?;
        }
        vertices.reverse();
        let total_weight = i64::try_from(total_weight).map_err(|_| {
            Error::AlgorithmError(format!("weight {} of cycle {:?} does not fit in i64", total_weight, vertices))
        })?;

        Ok(ShortestPathResult::NegativeCycle(NegativeCycle {
            vertices,
            total_weight,
        }))
    }
}
