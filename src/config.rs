use std::path::PathBuf;
use std::time::Duration;

use crate::graph::DuplicatePolicy;

/// Where the network comes from and how queries against it behave
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub stations_path: PathBuf,
    pub connections_path: PathBuf,
    pub duplicate_policy: DuplicatePolicy,
    /// Per-query limit; `None` lets a computation run to completion
    pub query_timeout: Option<Duration>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            stations_path: PathBuf::from("data/stations.csv"),
            connections_path: PathBuf::from("data/connections.csv"),
            duplicate_policy: DuplicatePolicy::Overwrite,
            query_timeout: None,
        }
    }
}

impl NetworkConfig {
    pub fn with_stations_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stations_path = path.into();
        self
    }

    pub fn with_connections_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.connections_path = path.into();
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn with_query_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.query_timeout = timeout;
        self
    }
}
