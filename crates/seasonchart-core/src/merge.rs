//! Merging of dataset rows and form overrides, and per-record normalization

use crate::date::normalize_season;
use crate::{NormalizedRecord, RawRecord};

/// Combine the static dataset with form override rows.
///
/// Override rows are appended after the dataset rows. Nothing is coalesced: a
/// form row that renames an item shows up as its own entry.
pub fn merge(dataset: &[RawRecord], overrides: &[RawRecord]) -> Vec<RawRecord> {
    dataset.iter().chain(overrides).cloned().collect()
}

/// Convert one raw record to half-month units.
pub fn normalize_record(record: &RawRecord) -> NormalizedRecord {
    let (start_first, end_first) = normalize_season(&record.season_one);
    let (start_second, end_second) = normalize_season(&record.season_two);
    NormalizedRecord {
        key: record.key,
        name: record.name.clone().unwrap_or_default(),
        start_first,
        end_first,
        start_second,
        end_second,
    }
}

pub fn normalize_records(records: &[RawRecord]) -> Vec<NormalizedRecord> {
    records.iter().map(normalize_record).collect()
}
