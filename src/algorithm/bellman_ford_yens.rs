use crate::algorithm::{NegativeCycle, ShortestPathAlgorithm, ShortestPathResult, ShortestPathTree};
use crate::data_structures::{QueueEntry, RoundQueue};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Bellman-Ford with Yen's FIFO queue and negative cycle reconstruction
///
/// Vertices whose distance improved are queued once; an end-of-round marker
/// separates relaxation rounds. Relaxation stops as soon as a round improves
/// nothing. If the queue is still busy when the round count reaches the
/// vertex count, some vertex was improved by a walk of `n` edges, which only a
/// negative cycle allows, and that cycle is rebuilt from the predecessors.
///
/// Any negative cycle reachable from the source may be reported; it is not
/// necessarily the one of minimum weight.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFordYens;

impl BellmanFordYens {
    /// Creates a new Bellman-Ford-Yens algorithm instance
    pub fn new() -> Self {
        BellmanFordYens
    }
}

/// Mutable state of one `compute` call
struct Relaxation {
    distances: Vec<Option<i64>>,
    predecessors: Vec<Option<usize>>,
    /// Weight of the edge that last improved each vertex
    incoming_weights: Vec<i64>,
    last_relaxed: Option<usize>,
}

impl Relaxation {
    fn new(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![None; vertex_count];
        distances[source] = Some(0);
        Relaxation {
            distances,
            predecessors: vec![None; vertex_count],
            incoming_weights: vec![0; vertex_count],
            last_relaxed: None,
        }
    }

    /// Relaxes every outgoing edge of `u`, queueing the improved targets
    fn relax_from<W, G>(&mut self, graph: &G, u: usize, queue: &mut RoundQueue) -> Result<()>
    where
        W: Weight,
        G: Graph<W>,
    {
        // Unreachable vertices never relax anything
        let Some(dist_u) = self.distances[u] else {
            return Ok(());
        };

        for (v, weight) in graph.outgoing_edges(u) {
            if v >= self.distances.len() {
                return Err(Error::InvalidEdge(u, v));
            }
            let weight: i64 = weight.into();
            let new_dist = dist_u
                .checked_add(weight)
                .ok_or(Error::WeightOverflow { from: u, to: v })?;
            let improves = match self.distances[v] {
                None => true,
                Some(current) => new_dist < current,
            };

            if improves {
                self.distances[v] = Some(new_dist);
                self.predecessors[v] = Some(u);
                self.incoming_weights[v] = weight;
                self.last_relaxed = Some(v);
                queue.push(v);
            }
        }

        Ok(())
    }

    /// Walks predecessors back from `start` until a vertex repeats and keeps the cyclic part
    fn reconstruct_cycle(&self, start: usize) -> Result<NegativeCycle> {
        let mut visited = vec![false; self.predecessors.len()];
        let mut walk = Vec::new();
        // Wide enough that a walk of at most n i64 weights cannot wrap
        let mut total_weight = 0i128;
        let mut current = start;

        while !visited[current] {
            visited[current] = true;
            walk.push(current);
            total_weight += i128::from(self.incoming_weights[current]);
            current = self.predecessors[current].ok_or_else(|| {
                Error::AlgorithmError(format!(
                    "predecessor walk from vertex {} ended at vertex {} without closing a cycle",
                    start, current
                ))
            })?;
        }

        // `current` closes the cycle; everything walked before reaching it is a tail
        let cycle_start = walk.iter().position(|&v| v == current).unwrap_or(0);
        for &v in &walk[..cycle_start] {
            total_weight -= i128::from(self.incoming_weights[v]);
        }

        let mut vertices = walk.split_off(cycle_start);
        vertices.reverse();

        if total_weight >= 0 {
            return Err(Error::AlgorithmError(format!(
                "reconstructed cycle {:?} has non-negative weight {}",
                vertices, total_weight
            )));
        }

        let total_weight = i64::try_from(total_weight).map_err(|_| {
            Error::AlgorithmError(format!(
                "weight {} of cycle {:?} does not fit in i64",
                total_weight, vertices
            ))
        })?;

        Ok(NegativeCycle {
            vertices,
            total_weight,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFordYens
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford-Yens"
    }

    fn compute(&self, graph: &G, source: usize) -> Result<ShortestPathResult> {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::InvalidArgument {
                vertex: source,
                vertex_count: n,
            });
        }

        log::debug!(
            "Running {} from vertex {} on {} vertices / {} edges",
            <Self as ShortestPathAlgorithm<W, G>>::name(self),
            source,
            n,
            graph.edge_count()
        );

        let mut state = Relaxation::new(n, source);
        let mut queue = RoundQueue::new(n, source);

        while let Some(entry) = queue.pop() {
            match entry {
                QueueEntry::Vertex(u) => state.relax_from::<W, G>(graph, u, &mut queue)?,
                QueueEntry::EndOfRound => {
                    if queue.is_empty() {
                        break;
                    }

                    let round = queue.advance_round();
                    log::trace!("Round {} closed with {} vertices queued", round, queue.len());

                    if round == n {
                        // The queue is non-empty, so something was relaxed this round
                        let start = state.last_relaxed.unwrap_or(source);
                        let cycle = state.reconstruct_cycle(start)?;
                        log::debug!(
                            "Negative cycle of {} vertices (weight {}) found after {} rounds",
                            cycle.len(),
                            cycle.total_weight,
                            round
                        );
                        return Ok(ShortestPathResult::NegativeCycle(cycle));
                    }

                    queue.close_round();
                }
            }
        }

        log::debug!("Relaxation settled after {} rounds", queue.round());

        Ok(ShortestPathResult::ShortestPathTree(ShortestPathTree {
            source,
            distances: state.distances,
            predecessors: state.predecessors,
        }))
    }
}
