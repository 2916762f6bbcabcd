pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod traits;

pub use floyd_warshall::AllPairsPaths;
pub use traits::{ShortestPathTree, SingleSourceAlgorithm};
