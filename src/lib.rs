//! Metro Route - shortest-route queries over a fixed-topology transit network
//!
//! Stations are keyed by `(name, line)` for user queries and by a numeric id
//! internally. Connections are directed edges between station ids weighted by
//! travel time. A query resolves both endpoints through the [`StationDirectory`],
//! runs Dijkstra's algorithm over the [`ConnectionGraph`] from the start id and
//! renders the predecessor chain back from the end id as a [`Route`].

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod loader;
pub mod network;
pub mod route;
pub mod station;

// Re-export main types for convenient use
pub use algorithm::{
    dijkstra::Dijkstra, CancellationToken, ShortestPathEngine, ShortestPathAlgorithm,
    ShortestPathResult,
};
pub use config::NetworkConfig;
pub use graph::{ConnectionGraph, ConnectionRecord, DuplicatePolicy, Graph, MutableGraph, Weight};
pub use loader::{LoadReport, MalformedRecord};
pub use network::{MetroNetwork, TransitNetwork};
pub use route::{Route, RouteFormatter, RoutePlanner, RouteQuery, RouteStop};
pub use station::{Station, StationDirectory, StationId, StationKey, StationRecord};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Station not found: {name} (line {line})")]
    StationNotFound { name: String, line: String },

    #[error("Station ID not found: {0}")]
    StationIdNotFound(StationId),

    #[error("No path from station {from} to station {to}")]
    Unreached { from: StationId, to: StationId },

    #[error("Station {0} is referenced by the network but missing from the directory")]
    InconsistentReference(StationId),

    #[error("Route computation cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for lookup misses, where suggesting similar station names makes sense
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::StationNotFound { .. } | Error::StationIdNotFound(_)
        )
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
