use log::error;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{CancellationToken, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::station::{StationDirectory, StationId};
use crate::{Error, Result};

/// Runs single-source shortest path queries over a borrowed graph.
///
/// The engine holds no per-query state: every call builds and returns a
/// fresh [`ShortestPathResult`], so one engine can serve concurrent queries.
#[derive(Debug)]
pub struct ShortestPathEngine<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    graph: &'g G,
    timeout: Option<Duration>,
    _weight: PhantomData<fn() -> W>,
}

impl<'g, W, G> Clone for ShortestPathEngine<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    fn clone(&self) -> Self {
        ShortestPathEngine {
            graph: self.graph,
            timeout: self.timeout,
            _weight: PhantomData,
        }
    }
}

impl<'g, W, G> ShortestPathEngine<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    pub fn new(graph: &'g G) -> Self {
        ShortestPathEngine {
            graph,
            timeout: None,
            _weight: PhantomData,
        }
    }

    /// Cancels any single computation that runs longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Computes shortest distances from `start` to every reachable station
    pub fn compute_from(&self, start: StationId) -> Result<ShortestPathResult<W>> {
        self.compute_from_with(start, &CancellationToken::new())
    }

    /// Like [`compute_from`](Self::compute_from) with a caller-supplied token.
    ///
    /// The engine timeout, if any, still applies: the computation stops at
    /// whichever of the token deadline and the engine deadline comes first.
    pub fn compute_from_with(
        &self,
        start: StationId,
        token: &CancellationToken,
    ) -> Result<ShortestPathResult<W>> {
        let token = match self.timeout {
            Some(timeout) => {
                let engine_deadline = Instant::now() + timeout;
                let deadline = token
                    .deadline()
                    .map_or(engine_deadline, |deadline| deadline.min(engine_deadline));
                token.clone().deadline_at(deadline)
            }
            None => token.clone(),
        };

        let dijkstra = Dijkstra::new().with_cancellation(token);
        dijkstra
            .compute_shortest_paths(self.graph, start)
            .inspect_err(|err| {
                if matches!(err, Error::Cancelled) {
                    error!("Shortest path computation from {} cancelled", start);
                }
            })
    }

    /// Resolves `(name, line)` through the directory and computes from that station
    pub fn compute_from_station(
        &self,
        directory: &StationDirectory,
        name: &str,
        line: &str,
    ) -> Result<ShortestPathResult<W>> {
        let start = directory.resolve(name, line)?;
        self.compute_from(start)
    }
}
