use log::error;

use crate::route::RouteStop;
use crate::station::{StationDirectory, StationId};
use crate::{Error, Result};

/// Turns a sequence of station ids into named stops
#[derive(Debug, Clone, Copy)]
pub struct RouteFormatter<'a> {
    directory: &'a StationDirectory,
}

impl<'a> RouteFormatter<'a> {
    pub fn new(directory: &'a StationDirectory) -> Self {
        RouteFormatter { directory }
    }

    /// Resolves every id through the directory.
    ///
    /// The whole render fails with [`Error::InconsistentReference`] on the
    /// first id the directory does not know: the graph and directory disagree.
    pub fn render(&self, path: &[StationId]) -> Result<Vec<RouteStop>> {
        path.iter()
            .map(|&id| {
                let station = self.directory.by_id(id).map_err(|_| {
                    error!("Route passes through station {} which is not in the directory", id);
                    Error::InconsistentReference(id)
                })?;
                Ok(RouteStop {
                    id,
                    name: station.name.clone(),
                    line_id: station.line_id.clone(),
                    line_name: station.line_name.clone(),
                })
            })
            .collect()
    }
}
