use log::{debug, info, warn};
use std::collections::{BTreeSet, HashMap, HashSet};

use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::loader::{LoadReport, MalformedRecord};
use crate::station::StationId;

/// What to do when a second edge arrives for an existing `(from, to)` pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later edge replaces the earlier one
    #[default]
    Overwrite,
    /// The cheaper of the two edges is kept
    KeepMinimum,
}

/// One unparsed row of the connections file: `start_id, end_id, duration`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionRecord {
    /// 1-based line number in the source file, 0 when built in memory
    pub line_number: u64,
    pub start_id: String,
    pub end_id: String,
    pub duration: String,
}

impl ConnectionRecord {
    pub fn new(
        start_id: impl Into<String>,
        end_id: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        ConnectionRecord {
            line_number: 0,
            start_id: start_id.into(),
            end_id: end_id.into(),
            duration: duration.into(),
        }
    }

    pub fn at_line(mut self, line_number: u64) -> Self {
        self.line_number = line_number;
        self
    }

    /// The row as it would appear in the connections file
    pub fn to_line(&self) -> String {
        format!("{},{},{}", self.start_id, self.end_id, self.duration)
    }

    /// Parses the three fields
    pub fn parse<W: Weight>(&self) -> Result<(StationId, StationId, W), MalformedRecord> {
        let malformed =
            |reason: String| MalformedRecord::new(self.line_number, self.to_line(), reason);

        let start = self
            .start_id
            .trim()
            .parse::<StationId>()
            .map_err(|_| malformed(format!("start id '{}' is not numeric", self.start_id)))?;
        let end = self
            .end_id
            .trim()
            .parse::<StationId>()
            .map_err(|_| malformed(format!("end id '{}' is not numeric", self.end_id)))?;
        let duration = self.duration.trim().parse::<W>().map_err(|_| {
            malformed(format!(
                "duration '{}' is not a non-negative integer",
                self.duration
            ))
        })?;

        Ok((start, end, duration))
    }
}

/// Directed travel-time edges between station ids, stored as adjacency lists
#[derive(Debug, Clone)]
pub struct ConnectionGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each station: station_id -> [(target_station, weight)]
    outgoing: HashMap<StationId, Vec<(StationId, W)>>,

    /// Every id seen on either side of an edge
    stations: HashSet<StationId>,

    /// Number of distinct `(from, to)` pairs
    edge_count: usize,

    policy: DuplicatePolicy,
}

impl<W> Default for ConnectionGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> ConnectionGraph<W>
where
    W: Weight,
{
    /// Creates a new empty graph where duplicate edges overwrite
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    /// Creates a new empty graph with the given duplicate-edge policy
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        ConnectionGraph {
            outgoing: HashMap::new(),
            stations: HashSet::new(),
            edge_count: 0,
            policy,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (StationId, StationId, W)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Ingests connection records; a row that does not parse is skipped and reported
    pub fn load<I>(&mut self, records: I) -> LoadReport
    where
        I: IntoIterator<Item = ConnectionRecord>,
    {
        let mut report = LoadReport::default();

        for record in records {
            match record.parse::<W>() {
                Ok((from, to, weight)) => {
                    if let Some(previous) = self.add_edge(from, to, weight) {
                        debug!(
                            "Duplicate connection {} -> {} at line {} (was {}, now {})",
                            from,
                            to,
                            record.line_number,
                            previous,
                            self.edge_weight(from, to).unwrap_or(weight)
                        );
                    }
                    report.loaded += 1;
                }
                Err(malformed) => {
                    warn!("Skipping connection row: {}", malformed);
                    report.skipped.push(malformed);
                }
            }
        }

        info!(
            "Loaded {} connections ({} rows skipped, {} distinct edges)",
            report.loaded,
            report.skipped.len(),
            self.edge_count
        );
        report
    }

    /// Every station id referenced by an edge, in ascending order
    pub fn referenced_ids(&self) -> BTreeSet<StationId> {
        self.stations.iter().copied().collect()
    }
}

impl<W> Graph<W> for ConnectionGraph<W>
where
    W: Weight,
{
    fn station_count(&self) -> usize {
        self.stations.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, station: StationId) -> Box<dyn Iterator<Item = (StationId, W)> + '_> {
        match self.outgoing.get(&station) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn contains(&self, station: StationId) -> bool {
        self.stations.contains(&station)
    }
}

impl<W> MutableGraph<W> for ConnectionGraph<W>
where
    W: Weight,
{
    fn add_edge(&mut self, from: StationId, to: StationId, weight: W) -> Option<W> {
        self.stations.insert(from);
        self.stations.insert(to);

        let edges = self.outgoing.entry(from).or_default();

        // Check if edge already exists and update it if it does
        if let Some(edge) = edges.iter_mut().find(|(target, _)| *target == to) {
            let previous = edge.1;
            edge.1 = match self.policy {
                DuplicatePolicy::Overwrite => weight,
                DuplicatePolicy::KeepMinimum => previous.min(weight),
            };
            return Some(previous);
        }

        edges.push((to, weight));
        self.edge_count += 1;
        None
    }

    fn remove_edge(&mut self, from: StationId, to: StationId) -> bool {
        let Some(edges) = self.outgoing.get_mut(&from) else {
            return false;
        };

        let len_before = edges.len();
        edges.retain(|(target, _)| *target != to);
        let removed = len_before > edges.len();
        if removed {
            self.edge_count -= 1;
        }
        removed
    }
}
