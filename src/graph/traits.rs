use num_traits::{PrimInt, Unsigned};
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use crate::station::StationId;

/// Travel-time weight: any unsigned primitive integer
pub trait Weight:
    PrimInt + Unsigned + FromStr + Hash + Debug + Display + Serialize + Send + Sync + 'static
{
}

impl<T> Weight for T where
    T: PrimInt + Unsigned + FromStr + Hash + Debug + Display + Serialize + Send + Sync + 'static
{
}

/// Trait representing a weighted directed graph over station ids
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of distinct station ids seen on either side of an edge
    fn station_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a station.
    ///
    /// Ids with no outgoing edges, including ids the graph has never seen,
    /// yield an empty iterator.
    fn neighbors(&self, station: StationId) -> Box<dyn Iterator<Item = (StationId, W)> + '_>;

    /// Returns true if the station has been seen on either side of an edge
    fn contains(&self, station: StationId) -> bool;

    /// Returns true if there's an edge between the two stations
    fn has_edge(&self, from: StationId, to: StationId) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: StationId, to: StationId) -> Option<W> {
        self.neighbors(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a directed edge and returns the weight it replaced, if any
    fn add_edge(&mut self, from: StationId, to: StationId, weight: W) -> Option<W>;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: StationId, to: StationId) -> bool;
}
