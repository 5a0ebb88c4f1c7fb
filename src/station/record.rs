use serde::Serialize;
use std::fmt;

use crate::loader::MalformedRecord;

/// Numeric station identifier used by the connection graph
pub type StationId = u64;

/// A station as held by the directory; immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub line_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_name: Option<String>,
}

impl Station {
    /// The composite lookup key users query by
    pub fn key(&self) -> StationKey {
        StationKey::new(&self.name, &self.line_id)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Line : {}", self.name, self.line_id)
    }
}

/// The user-facing `(name, line)` key of a station
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StationKey {
    pub name: String,
    pub line: String,
}

impl StationKey {
    pub fn new(name: impl Into<String>, line: impl Into<String>) -> Self {
        StationKey {
            name: name.into(),
            line: line.into(),
        }
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Line {})", self.name, self.line)
    }
}

/// One unparsed row of the stations file: `name, id, line_id, address, line_name`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationRecord {
    /// 1-based line number in the source file, 0 when built in memory
    pub line_number: u64,
    pub name: String,
    pub id: String,
    pub line_id: String,
    pub address: Option<String>,
    pub line_name: Option<String>,
}

impl StationRecord {
    pub fn new(name: impl Into<String>, id: impl Into<String>, line_id: impl Into<String>) -> Self {
        StationRecord {
            name: name.into(),
            id: id.into(),
            line_id: line_id.into(),
            ..Default::default()
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_line_name(mut self, line_name: impl Into<String>) -> Self {
        self.line_name = Some(line_name.into());
        self
    }

    pub fn at_line(mut self, line_number: u64) -> Self {
        self.line_number = line_number;
        self
    }

    /// The row as it would appear in the stations file
    pub fn to_line(&self) -> String {
        let mut fields = vec![self.name.as_str(), self.id.as_str(), self.line_id.as_str()];
        if self.address.is_some() || self.line_name.is_some() {
            fields.push(self.address.as_deref().unwrap_or(""));
        }
        if let Some(line_name) = &self.line_name {
            fields.push(line_name);
        }
        fields.join(",")
    }

    fn malformed(&self, reason: impl Into<String>) -> MalformedRecord {
        MalformedRecord::new(self.line_number, self.to_line(), reason)
    }
}

impl TryFrom<StationRecord> for Station {
    type Error = MalformedRecord;

    fn try_from(record: StationRecord) -> std::result::Result<Self, Self::Error> {
        let id = record
            .id
            .trim()
            .parse::<StationId>()
            .map_err(|_| record.malformed(format!("station id '{}' is not numeric", record.id)))?;

        if record.name.trim().is_empty() {
            return Err(record.malformed("station name is empty"));
        }
        if record.line_id.trim().is_empty() {
            return Err(record.malformed("line id is empty"));
        }

        let non_empty = |field: Option<String>| field.filter(|value| !value.trim().is_empty());

        Ok(Station {
            id,
            name: record.name.trim().to_string(),
            line_id: record.line_id.trim().to_string(),
            address: non_empty(record.address),
            line_name: non_empty(record.line_name),
        })
    }
}
