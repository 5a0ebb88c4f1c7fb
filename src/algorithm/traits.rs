use log::error;
use std::collections::HashMap;

use crate::graph::{Graph, Weight};
use crate::station::StationId;
use crate::{Error, Result};

/// Best known distance to a station and the station it was reached from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEntry<W> {
    pub distance: W,
    /// `None` only for the source
    pub predecessor: Option<StationId>,
}

/// Result of one single-source shortest path computation.
///
/// Holds an entry for every station reachable from the source; stations
/// without an entry are unreached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Source station ID
    pub source: StationId,

    /// Distances and predecessors in the shortest path tree
    entries: HashMap<StationId, PathEntry<W>>,

    /// Number of stations whose distance was finalised
    pub settled_count: usize,

    /// Number of superseded queue entries that were popped and discarded
    pub stale_pops: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Assembles a result from its parts
    pub fn from_parts(
        source: StationId,
        entries: HashMap<StationId, PathEntry<W>>,
        settled_count: usize,
        stale_pops: usize,
    ) -> Self {
        ShortestPathResult {
            source,
            entries,
            settled_count,
            stale_pops,
        }
    }

    /// Shortest distance from the source, `None` if unreached
    pub fn distance_to(&self, target: StationId) -> Option<W> {
        self.entries.get(&target).map(|entry| entry.distance)
    }

    /// The station preceding `target` on its shortest path
    pub fn predecessor_of(&self, target: StationId) -> Option<StationId> {
        self.entries.get(&target).and_then(|entry| entry.predecessor)
    }

    /// Returns true if `target` was reached from the source
    pub fn is_reached(&self, target: StationId) -> bool {
        self.entries.contains_key(&target)
    }

    /// Iterates over every reached station with its entry, in no particular order
    pub fn reachable(&self) -> impl Iterator<Item = (StationId, &PathEntry<W>)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    /// Number of reached stations, the source included
    pub fn reachable_count(&self) -> usize {
        self.entries.len()
    }

    /// Gets the shortest path from the source to `target` as a sequence of stations.
    ///
    /// Walks predecessors back from `target` and reverses. Fails with
    /// [`Error::Unreached`] if `target` was never reached or its predecessor
    /// chain does not lead back to the source.
    pub fn path_to(&self, target: StationId) -> Result<Vec<StationId>> {
        let unreached = Error::Unreached {
            from: self.source,
            to: target,
        };
        if !self.entries.contains_key(&target) {
            return Err(unreached);
        }

        let mut path = vec![target];
        let mut current = target;

        while current != self.source {
            match self.predecessor_of(current) {
                Some(predecessor) => {
                    path.push(predecessor);
                    current = predecessor;
                }
                None => {
                    error!(
                        "Predecessor chain from {} breaks at {} before reaching {}",
                        target, current, self.source
                    );
                    return Err(unreached);
                }
            }

            if path.len() > self.entries.len() {
                error!("Cycle in predecessor chain from {}", target);
                return Err(unreached);
            }
        }

        path.reverse();
        Ok(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source station to all other stations.
    ///
    /// A source the graph has never seen is not an error: the result holds
    /// only the source at distance zero.
    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: StationId,
    ) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
