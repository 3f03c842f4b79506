//! History export
//!
//! Supports:
//! - CSV export, one row per recorded day, with a fixed header
//! - JSON export of the full records
//! - Reading a CSV export back for offline reports

use std::collections::BTreeSet;
use std::io::{Read, Write};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::DailyRecord;

/// Column names of the CSV export, in order
pub const CSV_HEADER: [&str; 7] = [
    "date",
    "total_energy",
    "base_energy",
    "appliance_energy",
    "appliances",
    "notes",
    "timestamp",
];

/// Separator between appliance names inside the `appliances` column
pub const APPLIANCE_SEPARATOR: &str = ";";

/// Largest accepted gap between `total_energy` and `base + appliance` on import
pub const TOTAL_TOLERANCE: f64 = 1e-6;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Json => "application/json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown export format: {} (valid: csv, json)", s)),
        }
    }
}

/// Download filename embedding the export date, e.g. `energy_consumption_20240315.csv`
pub fn export_filename(format: ExportFormat, exported_on: NaiveDate) -> String {
    format!(
        "energy_consumption_{}.{}",
        exported_on.format("%Y%m%d"),
        format.extension()
    )
}

/// One CSV row; field names double as the header
#[derive(Debug, Serialize, Deserialize)]
struct RecordRow {
    date: NaiveDate,
    total_energy: f64,
    base_energy: f64,
    appliance_energy: f64,
    appliances: String,
    notes: String,
    timestamp: DateTime<Utc>,
}

impl From<&DailyRecord> for RecordRow {
    fn from(record: &DailyRecord) -> Self {
        Self {
            date: record.date,
            total_energy: record.total_energy,
            base_energy: record.base_energy,
            appliance_energy: record.appliance_energy,
            appliances: record
                .appliances
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(APPLIANCE_SEPARATOR),
            notes: record.notes.clone().unwrap_or_default(),
            timestamp: record.created_at,
        }
    }
}

impl From<RecordRow> for DailyRecord {
    fn from(row: RecordRow) -> Self {
        let appliances: BTreeSet<String> = row
            .appliances
            .split(APPLIANCE_SEPARATOR)
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            date: row.date,
            base_energy: row.base_energy,
            appliance_energy: row.appliance_energy,
            total_energy: row.total_energy,
            appliances,
            notes: Some(row.notes).filter(|n| !n.is_empty()),
            created_at: row.timestamp,
        }
    }
}

/// Write records as CSV (header always present)
pub fn write_csv<W: Write>(records: &[DailyRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if records.is_empty() {
        wtr.write_record(CSV_HEADER)?;
    }
    for record in records {
        wtr.serialize(RecordRow::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export records to a CSV string
pub fn export_csv(records: &[DailyRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    String::from_utf8(buf).map_err(|e| Error::InvalidData(e.to_string()))
}

/// Export records to pretty-printed JSON
pub fn export_json(records: &[DailyRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Read a CSV export back into records, sorted by date
///
/// Later rows win when a date repeats, matching upsert semantics.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<DailyRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(Error::InvalidData(format!(
            "unexpected CSV header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut by_date = std::collections::BTreeMap::new();
    for row in rdr.deserialize::<RecordRow>() {
        let record = DailyRecord::from(row?);
        let figures = [
            record.total_energy,
            record.base_energy,
            record.appliance_energy,
        ];
        if figures.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidData(format!(
                "non-numeric energy on {}",
                record.date
            )));
        }
        if figures.iter().any(|v| *v < 0.0) {
            return Err(Error::InvalidData(format!(
                "negative energy on {}",
                record.date
            )));
        }
        if (record.total_energy - (record.base_energy + record.appliance_energy)).abs()
            > TOTAL_TOLERANCE
        {
            return Err(Error::InvalidData(format!(
                "total energy on {} does not match base plus appliance energy",
                record.date
            )));
        }
        by_date.insert(record.date, record);
    }

    Ok(by_date.into_values().collect())
}
