pub mod traits;
pub mod bellman_ford;
pub mod bellman_ford_yens;

pub use traits::{NegativeCycle, ShortestPathAlgorithm, ShortestPathResult, ShortestPathTree};
pub use bellman_ford::BellmanFord;
pub use bellman_ford_yens::BellmanFordYens;
