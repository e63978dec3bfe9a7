//! Raw WCA tables, directly as loaded from CSV exports.
//!
//! Both tables are read whole and without any per-row filtering. Filtering
//! in memory keeps the same code path usable for database dumps and partial
//! exports alike.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::IsochronError;

/// One row of the `Results` table, before any filtering.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResult {
    pub person_id: String,
    pub event_id: String,
    /// Best single in centiseconds. Non-positive values mark DNF/DNS.
    pub best: i64,
    pub competition_id: String,
}

/// One row of the `Competitions` table.
#[derive(Debug, Clone, Deserialize)]
pub struct Competition {
    pub id: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// The two raw tables the alignment pipeline starts from.
#[derive(Debug, Clone)]
pub struct RawData {
    pub results: Vec<RawResult>,
    pub competitions: Vec<Competition>,
}

impl RawData {
    /// Load both tables from CSV files with headers.
    pub fn load(results: &Path, competitions: &Path) -> Result<Self, IsochronError> {
        Ok(Self {
            results: read_csv(results)?,
            competitions: read_csv(competitions)?,
        })
    }
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, IsochronError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
