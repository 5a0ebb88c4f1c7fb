pub mod formatter;
pub mod planner;

pub use formatter::RouteFormatter;
pub use planner::RoutePlanner;

use serde::Serialize;
use std::fmt;

use crate::graph::Weight;
use crate::station::{StationId, StationKey};

/// A start and end station, both given as `(name, line)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteQuery {
    pub from: StationKey,
    pub to: StationKey,
}

impl RouteQuery {
    pub fn new(from: StationKey, to: StationKey) -> Self {
        RouteQuery { from, to }
    }
}

/// One station along a rendered route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteStop {
    pub id: StationId,
    pub name: String,
    pub line_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_name: Option<String>,
}

impl fmt::Display for RouteStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Line : {}", self.name, self.line_id)
    }
}

/// A rendered shortest route and its total travel time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<W>
where
    W: Weight,
{
    pub stops: Vec<RouteStop>,
    pub total_time: W,
}

impl<W> Route<W>
where
    W: Weight,
{
    /// Station ids from start to end
    pub fn station_ids(&self) -> Vec<StationId> {
        self.stops.iter().map(|stop| stop.id).collect()
    }

    /// Number of times consecutive stops are on different lines
    pub fn transfers(&self) -> usize {
        self.stops
            .windows(2)
            .filter(|pair| pair[0].line_id != pair[1].line_id)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }
}

impl<W> fmt::Display for Route<W>
where
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, stop) in self.stops.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", stop)?;
        }
        Ok(())
    }
}
