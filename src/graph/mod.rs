pub mod traits;
pub mod directed;
pub mod generators;
pub mod reader;

pub use traits::{Graph, Weight};
pub use directed::{DirectedGraph, Edge};
pub use reader::{parse_graph, read_graph};
