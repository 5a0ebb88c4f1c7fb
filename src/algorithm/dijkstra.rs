use log::{debug, warn};
use std::collections::{HashMap, HashSet};

use crate::algorithm::{CancellationToken, PathEntry, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::LazyMinQueue;
use crate::graph::{Graph, Weight};
use crate::station::StationId;
use crate::{Error, Result};

/// Queue pops between two cancellation checks
const CANCEL_CHECK_INTERVAL: usize = 64;

/// Classic Dijkstra's algorithm over a lazy-deletion priority queue
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    cancellation: Option<CancellationToken>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Aborts the computation with [`Error::Cancelled`] once `token` trips
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: StationId,
    ) -> Result<ShortestPathResult<W>> {
        // Every piece of state is local to this call
        let mut entries: HashMap<StationId, PathEntry<W>> = HashMap::new();
        let mut settled: HashSet<StationId> = HashSet::new();
        let mut queue = LazyMinQueue::new();
        let mut pops = 0usize;
        let mut stale_pops = 0usize;

        entries.insert(
            source,
            PathEntry {
                distance: W::zero(),
                predecessor: None,
            },
        );
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            if pops % CANCEL_CHECK_INTERVAL == 0 && self.is_cancelled() {
                debug!("Dijkstra from {} cancelled after {} pops", source, pops);
                return Err(Error::Cancelled);
            }
            pops += 1;

            // A shorter distance to u was found after this entry was queued
            let is_current = entries
                .get(&u)
                .is_some_and(|entry| entry.distance == dist_u);
            if !is_current || settled.contains(&u) {
                stale_pops += 1;
                continue;
            }
            settled.insert(u);

            // Relax all outgoing edges
            for (v, weight) in graph.neighbors(u) {
                let Some(new_dist) = dist_u.checked_add(&weight) else {
                    warn!(
                        "Skipping edge {} -> {}: distance overflows the weight type",
                        u, v
                    );
                    continue;
                };

                let should_update = match entries.get(&v) {
                    None => true,
                    Some(current) => new_dist < current.distance,
                };

                if should_update {
                    entries.insert(
                        v,
                        PathEntry {
                            distance: new_dist,
                            predecessor: Some(u),
                        },
                    );
                    queue.push(v, new_dist);
                }
            }
        }

        debug!(
            "Dijkstra from {}: {} settled, {} stale pops",
            source,
            settled.len(),
            stale_pops
        );

        Ok(ShortestPathResult::from_parts(
            source,
            entries,
            settled.len(),
            stale_pops,
        ))
    }
}
