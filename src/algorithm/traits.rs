use serde::{Deserialize, Serialize};

use crate::graph::{Graph, Weight};
use crate::Result;

/// Shortest distances and predecessors from a source vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTree {
    /// Source vertex ID
    pub source: usize,

    /// Distances from source to each vertex, `None` when unreachable
    pub distances: Vec<Option<i64>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,
}

impl ShortestPathTree {
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    pub fn distance(&self, vertex: usize) -> Option<i64> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Get the shortest path from source to target as a sequence of vertices
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);

            // A tree path never repeats a vertex
            if path.len() > self.vertex_count() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// A negative-weight cycle reachable from the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegativeCycle {
    /// Cycle vertices in edge order; the last one connects back to the first
    pub vertices: Vec<usize>,

    /// Sum of the edge weights along the cycle, always negative
    pub total_weight: i64,
}

impl NegativeCycle {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.vertices.contains(&vertex)
    }
}

/// Outcome of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShortestPathResult {
    ShortestPathTree(ShortestPathTree),
    NegativeCycle(NegativeCycle),
}

impl ShortestPathResult {
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, ShortestPathResult::NegativeCycle(_))
    }

    pub fn shortest_path_tree(&self) -> Option<&ShortestPathTree> {
        match self {
            ShortestPathResult::ShortestPathTree(tree) => Some(tree),
            ShortestPathResult::NegativeCycle(_) => None,
        }
    }

    pub fn negative_cycle(&self) -> Option<&NegativeCycle> {
        match self {
            ShortestPathResult::NegativeCycle(cycle) => Some(cycle),
            ShortestPathResult::ShortestPathTree(_) => None,
        }
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex, or a negative cycle reachable from it
    fn compute(&self, graph: &G, source: usize) -> Result<ShortestPathResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> ShortestPathTree {
        ShortestPathTree {
            source: 0,
            distances: vec![Some(0), Some(3), Some(2), None],
            predecessors: vec![None, Some(2), Some(0), None],
        }
    }

    #[test]
    fn test_path_to() {
        let tree = sample_tree();
        assert_eq!(tree.path_to(1), Some(vec![0, 2, 1]));
        assert_eq!(tree.path_to(0), Some(vec![0]));
        assert_eq!(tree.path_to(3), None);
        assert_eq!(tree.path_to(42), None);
    }

    #[test]
    fn test_lookups() {
        let tree = sample_tree();
        assert_eq!(tree.distance(1), Some(3));
        assert_eq!(tree.distance(3), None);
        assert_eq!(tree.predecessor(1), Some(2));
        assert_eq!(tree.predecessor(0), None);
        assert!(!tree.is_reachable(3));
    }

    #[test]
    fn test_result_accessors() {
        let result = ShortestPathResult::NegativeCycle(NegativeCycle {
            vertices: vec![4],
            total_weight: -2,
        });
        assert!(result.is_negative_cycle());
        assert!(result.shortest_path_tree().is_none());
        assert!(result.negative_cycle().unwrap().contains(4));
    }

    #[test]
    fn test_result_serializes_with_kind_tag() {
        let result = ShortestPathResult::ShortestPathTree(sample_tree());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["kind"], "shortest_path_tree");
        assert_eq!(json["distances"][3], serde_json::Value::Null);
    }
}
