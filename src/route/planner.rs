use log::debug;
use rayon::prelude::*;
use std::time::Duration;

use crate::algorithm::{CancellationToken, ShortestPathEngine, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::route::{Route, RouteFormatter, RouteQuery};
use crate::station::{StationDirectory, StationId};
use crate::{Error, Result};

/// Answers `(name, line)` to `(name, line)` route queries.
///
/// Borrows the directory and graph read-only; both must outlive the planner.
#[derive(Debug)]
pub struct RoutePlanner<'a, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    directory: &'a StationDirectory,
    engine: ShortestPathEngine<'a, W, G>,
}

impl<'a, W, G> RoutePlanner<'a, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    pub fn new(directory: &'a StationDirectory, graph: &'a G) -> Self {
        RoutePlanner {
            directory,
            engine: ShortestPathEngine::new(graph),
        }
    }

    /// Cancels any single query that runs longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.engine = self.engine.with_timeout(timeout);
        self
    }

    pub fn directory(&self) -> &'a StationDirectory {
        self.directory
    }

    /// Resolves both ends and returns the minimum-time route between them
    pub fn plan(&self, query: &RouteQuery) -> Result<Route<W>> {
        self.plan_with(query, &CancellationToken::new())
    }

    /// Like [`plan`](Self::plan) with a caller-supplied cancellation token
    pub fn plan_with(&self, query: &RouteQuery, token: &CancellationToken) -> Result<Route<W>> {
        let from = self.directory.resolve_key(&query.from)?;
        let to = self.directory.resolve_key(&query.to)?;
        let result = self.engine.compute_from_with(from, token)?;
        self.route_to(&result, to)
    }

    /// Route between two station ids
    pub fn plan_ids(&self, from: StationId, to: StationId) -> Result<Route<W>> {
        let result = self.engine.compute_from(from)?;
        self.route_to(&result, to)
    }

    /// Renders the route to `to` out of an already computed result
    pub fn route_to(&self, result: &ShortestPathResult<W>, to: StationId) -> Result<Route<W>> {
        let total_time = result.distance_to(to).ok_or(Error::Unreached {
            from: result.source,
            to,
        })?;
        let path = result.path_to(to)?;
        let stops = RouteFormatter::new(self.directory).render(&path)?;

        debug!(
            "Route {} -> {}: {} stops, total time {}",
            result.source,
            to,
            stops.len(),
            total_time
        );

        Ok(Route { stops, total_time })
    }
}

impl<'a, W, G> RoutePlanner<'a, W, G>
where
    W: Weight,
    G: Graph<W> + Sync,
{
    /// Plans independent queries in parallel over the shared network.
    ///
    /// Each query runs its own computation; results come back in query order.
    pub fn plan_batch(&self, queries: &[RouteQuery]) -> Vec<Result<Route<W>>> {
        queries.par_iter().map(|query| self.plan(query)).collect()
    }
}
