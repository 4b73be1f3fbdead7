pub mod traits;
pub mod dijkstra;
pub mod bellman_ford;
pub mod johnson;

pub use traits::{AllPairsAlgorithm, AllPairsResult, ShortestPathAlgorithm, ShortestPathResult};
