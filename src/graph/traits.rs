use std::fmt::{Debug, Display};
use num_traits::{PrimInt, Signed};

/// Signed integer edge weight.
///
/// Path sums are always accumulated in `i64`, so any weight type that widens
/// losslessly into `i64` qualifies (`i8`, `i16`, `i32`, `i64`). A sum that
/// leaves the `i64` range is reported as [`crate::Error::WeightOverflow`].
pub trait Weight: PrimInt + Signed + Into<i64> + Debug + Display + Send + Sync + 'static {}

impl<T> Weight for T where T: PrimInt + Signed + Into<i64> + Debug + Display + Send + Sync + 'static {}

/// Trait representing a weighted directed graph
///
/// Vertices are the dense indices `0..vertex_count()`. Implementations must
/// only report edges whose endpoints lie in that range, and must return the
/// same edges for a vertex every time they are asked.
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of the first edge between two vertices, if any
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if !self.has_vertex(from) {
            return None;
        }
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}
