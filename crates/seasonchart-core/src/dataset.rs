//! Static dataset loading
//!
//! The dataset is a CSV file with a header row. Columns may appear in any
//! order and any of them may be missing; missing columns read as blank.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::{RawDate, RawRecord, RawSeason, RecordKey};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One CSV row with the dataset's column names.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DatasetRow {
    name: Option<String>,
    season_one_starting_month: String,
    season_one_starting_day: String,
    season_one_ending_month: String,
    season_one_ending_day: String,
    season_two_starting_month: String,
    season_two_starting_day: String,
    season_two_ending_month: String,
    season_two_ending_day: String,
}

impl DatasetRow {
    fn into_record(self, row: usize) -> RawRecord {
        RawRecord {
            key: RecordKey::Static(row),
            name: self.name,
            season_one: RawSeason::new(
                RawDate::parse(&self.season_one_starting_month, &self.season_one_starting_day),
                RawDate::parse(&self.season_one_ending_month, &self.season_one_ending_day),
            ),
            season_two: RawSeason::new(
                RawDate::parse(&self.season_two_starting_month, &self.season_two_starting_day),
                RawDate::parse(&self.season_two_ending_month, &self.season_two_ending_day),
            ),
        }
    }
}

/// Read dataset rows from any CSV source, keyed by row index.
pub fn read_dataset<R: Read>(reader: R) -> Result<Vec<RawRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<DatasetRow>().enumerate() {
        records.push(result?.into_record(row));
    }
    tracing::debug!(rows = records.len(), "loaded dataset");
    Ok(records)
}

/// Read dataset rows from a CSV file.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, DatasetError> {
    let file = std::fs::File::open(path)?;
    read_dataset(file)
}
