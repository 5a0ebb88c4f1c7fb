use log::{info, warn};
use std::io::Read;
use std::time::Duration;

use crate::config::NetworkConfig;
use crate::graph::{ConnectionGraph, ConnectionRecord, DuplicatePolicy, Weight};
use crate::loader::{self, LoadReport};
use crate::route::RoutePlanner;
use crate::station::{StationDirectory, StationId, StationRecord};
use crate::Result;

/// A transit network with travel times in whole minutes
pub type MetroNetwork = TransitNetwork<u64>;

/// Owns the station directory and connection graph for the process lifetime.
///
/// Planners borrow both read-only, so any number of them can run at once.
#[derive(Debug, Clone)]
pub struct TransitNetwork<W>
where
    W: Weight,
{
    directory: StationDirectory,
    graph: ConnectionGraph<W>,
    station_report: LoadReport,
    connection_report: LoadReport,
    query_timeout: Option<Duration>,
}

impl<W> TransitNetwork<W>
where
    W: Weight,
{
    /// Builds a network from already-read rows
    pub fn from_records<S, C>(stations: S, connections: C, policy: DuplicatePolicy) -> Self
    where
        S: IntoIterator<Item = StationRecord>,
        C: IntoIterator<Item = ConnectionRecord>,
    {
        let mut directory = StationDirectory::new();
        let station_report = directory.load(stations);

        let mut graph = ConnectionGraph::with_policy(policy);
        let connection_report = graph.load(connections);

        let network = TransitNetwork {
            directory,
            graph,
            station_report,
            connection_report,
            query_timeout: None,
        };

        let dangling = network.dangling_references();
        if !dangling.is_empty() {
            warn!(
                "{} station ids appear in connections but not in the directory: {:?}",
                dangling.len(),
                dangling
            );
        }
        network
    }

    /// Reads both CSV sources, header line first
    pub fn from_readers<S, C>(stations: S, connections: C, policy: DuplicatePolicy) -> Result<Self>
    where
        S: Read,
        C: Read,
    {
        let stations = loader::read_station_records(stations)?;
        let connections = loader::read_connection_records(connections)?;
        Ok(Self::assemble(
            stations.records,
            stations.malformed,
            connections.records,
            connections.malformed,
            policy,
        ))
    }

    /// Loads the files named in `config`
    pub fn load(config: &NetworkConfig) -> Result<Self> {
        info!(
            "Loading network from {} and {}",
            config.stations_path.display(),
            config.connections_path.display()
        );
        let stations = loader::read_station_file(&config.stations_path)?;
        let connections = loader::read_connection_file(&config.connections_path)?;

        let network = Self::assemble(
            stations.records,
            stations.malformed,
            connections.records,
            connections.malformed,
            config.duplicate_policy,
        );
        Ok(network.with_query_timeout(config.query_timeout))
    }

    fn assemble(
        stations: Vec<StationRecord>,
        station_errors: Vec<loader::MalformedRecord>,
        connections: Vec<ConnectionRecord>,
        connection_errors: Vec<loader::MalformedRecord>,
        policy: DuplicatePolicy,
    ) -> Self {
        let mut network = Self::from_records(stations, connections, policy);
        network.station_report = network.station_report.with_read_errors(station_errors);
        network.connection_report = network.connection_report.with_read_errors(connection_errors);
        network
    }

    pub fn with_query_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn directory(&self) -> &StationDirectory {
        &self.directory
    }

    pub fn graph(&self) -> &ConnectionGraph<W> {
        &self.graph
    }

    pub fn station_report(&self) -> &LoadReport {
        &self.station_report
    }

    pub fn connection_report(&self) -> &LoadReport {
        &self.connection_report
    }

    /// Ids used by some connection that the directory does not know, ascending
    pub fn dangling_references(&self) -> Vec<StationId> {
        self.graph
            .referenced_ids()
            .into_iter()
            .filter(|id| !self.directory.contains(*id))
            .collect()
    }

    /// A planner borrowing this network
    pub fn planner(&self) -> RoutePlanner<'_, W, ConnectionGraph<W>> {
        RoutePlanner::new(&self.directory, &self.graph).with_timeout(self.query_timeout)
    }
}
