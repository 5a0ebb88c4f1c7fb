//! Reads station and connection rows from comma-delimited files.
//!
//! Both file formats start with a header line, which is skipped. Rows are
//! handed over as unparsed [`StationRecord`]s and [`ConnectionRecord`]s; the
//! directory and graph decide what a well-formed row is. Rows the CSV layer
//! cannot split are reported here and never abort the rest of the file.

use csv::{ReaderBuilder, StringRecord, Trim};
use log::warn;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::graph::ConnectionRecord;
use crate::station::StationRecord;
use crate::{Error, Result};

/// A single input row that could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// 1-based line number in the source file, 0 when built in memory
    pub line: u64,
    /// The offending row
    pub content: String,
    pub reason: String,
}

impl MalformedRecord {
    pub fn new(line: u64, content: impl Into<String>, reason: impl Into<String>) -> Self {
        MalformedRecord {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed record at line {}: '{}' ({})",
            self.line, self.content, self.reason
        )
    }
}

/// Outcome of loading a batch of records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of rows accepted
    pub loaded: usize,
    /// Rows that were dropped, in input order
    pub skipped: Vec<MalformedRecord>,
}

impl LoadReport {
    /// True when no row was dropped
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Prepends rows that were already rejected while reading the file
    pub fn with_read_errors(mut self, mut malformed: Vec<MalformedRecord>) -> Self {
        malformed.append(&mut self.skipped);
        self.skipped = malformed;
        self
    }
}

/// Rows read from a file, plus the rows the CSV layer rejected
#[derive(Debug, Clone)]
pub struct RecordBatch<T> {
    pub records: Vec<T>,
    pub malformed: Vec<MalformedRecord>,
}

impl<T> Default for RecordBatch<T> {
    fn default() -> Self {
        RecordBatch {
            records: Vec::new(),
            malformed: Vec::new(),
        }
    }
}

/// Reads `name, id, line_id, address, line_name` rows
pub fn read_station_records<R: Read>(reader: R) -> Result<RecordBatch<StationRecord>> {
    read_rows(reader, |line_number, row| StationRecord {
        line_number,
        name: field(row, 0),
        id: field(row, 1),
        line_id: field(row, 2),
        address: optional_field(row, 3),
        line_name: optional_field(row, 4),
    })
}

/// Reads `start_id, end_id, duration` rows
pub fn read_connection_records<R: Read>(reader: R) -> Result<RecordBatch<ConnectionRecord>> {
    read_rows(reader, |line_number, row| ConnectionRecord {
        line_number,
        start_id: field(row, 0),
        end_id: field(row, 1),
        duration: field(row, 2),
    })
}

/// Opens and reads a stations file
pub fn read_station_file(path: impl AsRef<Path>) -> Result<RecordBatch<StationRecord>> {
    read_station_records(File::open(path)?)
}

/// Opens and reads a connections file
pub fn read_connection_file(path: impl AsRef<Path>) -> Result<RecordBatch<ConnectionRecord>> {
    read_connection_records(File::open(path)?)
}

fn read_rows<R, T, F>(reader: R, convert: F) -> Result<RecordBatch<T>>
where
    R: Read,
    F: Fn(u64, &StringRecord) -> T,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut batch = RecordBatch::default();
    for row in csv_reader.records() {
        match row {
            Ok(row) => {
                let line_number = row.position().map_or(0, |position| position.line());
                batch.records.push(convert(line_number, &row));
            }
            Err(err) if err.is_io_error() => return Err(Error::Csv(err)),
            Err(err) => {
                let line_number = err.position().map_or(0, |position| position.line());
                let malformed = MalformedRecord::new(line_number, "", err.to_string());
                warn!("Skipping unreadable row: {}", malformed);
                batch.malformed.push(malformed);
            }
        }
    }

    Ok(batch)
}

fn field(row: &StringRecord, index: usize) -> String {
    row.get(index).unwrap_or_default().to_string()
}

fn optional_field(row: &StringRecord, index: usize) -> Option<String> {
    row.get(index)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
