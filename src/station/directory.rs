use log::{info, warn};
use std::collections::HashMap;

use crate::loader::{LoadReport, MalformedRecord};
use crate::station::record::{Station, StationId, StationKey, StationRecord};
use crate::{Error, Result};

/// Station records with lookup by id and by `(name, line)`
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    /// Station records keyed by id
    stations: HashMap<StationId, Station>,

    /// Composite user-facing key -> station id
    by_key: HashMap<StationKey, StationId>,
}

impl StationDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from records, discarding the load report
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = StationRecord>,
    {
        let mut directory = Self::new();
        directory.load(records);
        directory
    }

    /// Ingests station records.
    ///
    /// A record with a non-numeric id, an empty name or line, or a duplicate
    /// id or `(name, line)` key is skipped and reported; the rest still load.
    pub fn load<I>(&mut self, records: I) -> LoadReport
    where
        I: IntoIterator<Item = StationRecord>,
    {
        let mut report = LoadReport::default();

        for record in records {
            match self.insert_record(record) {
                Ok(()) => report.loaded += 1,
                Err(malformed) => {
                    warn!("Skipping station row: {}", malformed);
                    report.skipped.push(malformed);
                }
            }
        }

        info!(
            "Loaded {} stations ({} rows skipped)",
            report.loaded,
            report.skipped.len()
        );
        report
    }

    fn insert_record(&mut self, record: StationRecord) -> std::result::Result<(), MalformedRecord> {
        let line_number = record.line_number;
        let raw = record.to_line();
        let station = Station::try_from(record)?;

        if self.stations.contains_key(&station.id) {
            return Err(MalformedRecord::new(
                line_number,
                raw,
                format!("duplicate station id {}", station.id),
            ));
        }

        let key = station.key();
        if let Some(existing) = self.by_key.get(&key) {
            return Err(MalformedRecord::new(
                line_number,
                raw,
                format!("duplicate station {} (already loaded as id {})", key, existing),
            ));
        }

        self.by_key.insert(key, station.id);
        self.stations.insert(station.id, station);
        Ok(())
    }

    /// Resolves an exact `(name, line)` pair to a station id
    pub fn resolve(&self, name: &str, line: &str) -> Result<StationId> {
        self.by_key
            .get(&StationKey::new(name.trim(), line.trim()))
            .copied()
            .ok_or_else(|| Error::StationNotFound {
                name: name.to_string(),
                line: line.to_string(),
            })
    }

    /// Resolves a [`StationKey`]
    pub fn resolve_key(&self, key: &StationKey) -> Result<StationId> {
        self.resolve(&key.name, &key.line)
    }

    /// Looks up a station by id
    pub fn by_id(&self, id: StationId) -> Result<&Station> {
        self.stations.get(&id).ok_or(Error::StationIdNotFound(id))
    }

    /// Case-insensitive substring match over station names.
    ///
    /// ASCII punctuation is ignored on both sides, so `saintlazare` and
    /// `Saint-Lazare` both find `Saint-Lazare`. Every matching
    /// `(name, line)` pair is returned, so a name served by several lines
    /// appears once per line. Results are sorted for stable output.
    pub fn search(&self, needle: &str) -> Vec<StationKey> {
        let needle = fold(needle);
        let mut matches: Vec<StationKey> = self
            .stations
            .values()
            .filter(|station| fold(&station.name).contains(&needle))
            .map(Station::key)
            .collect();
        matches.sort();
        matches
    }

    /// Returns true if a station with this id was loaded
    pub fn contains(&self, id: StationId) -> bool {
        self.stations.contains_key(&id)
    }

    /// Iterates over all stations in ascending id order
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        let mut stations: Vec<&Station> = self.stations.values().collect();
        stations.sort_by_key(|station| station.id);
        stations.into_iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Lowercased text with ASCII punctuation removed
fn fold(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect()
}
