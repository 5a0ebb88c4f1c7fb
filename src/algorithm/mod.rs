pub mod cancel;
pub mod dijkstra;
pub mod engine;
pub mod traits;

pub use cancel::CancellationToken;
pub use engine::ShortestPathEngine;
pub use traits::{PathEntry, ShortestPathAlgorithm, ShortestPathResult};
