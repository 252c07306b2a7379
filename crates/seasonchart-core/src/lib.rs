//! # seasonchart-core
//!
//! Record model and data pipeline for the seasonchart timeline engine.
//!
//! This crate provides:
//! - Domain types: `RawRecord`, `RawSeason`, `NormalizedRecord`, `RecordKey`
//! - Half-month date normalization (`date`)
//! - Form field descriptors and override building (`form`)
//! - Merging of dataset rows with form overrides (`merge`)
//! - Case-insensitive stable ordering (`order`)
//! - CSV dataset loading (`dataset`)
//!
//! ## Example
//!
//! ```rust
//! use seasonchart_core::{merge, normalize_records, order, FormState, RawRecord, RecordKey};
//!
//! let dataset = vec![RawRecord::new(RecordKey::Static(0)).name("Tomato")];
//! let mut form = FormState::new();
//! form.set("0-name", "basil");
//!
//! let merged = merge(&dataset, &form.overrides());
//! let ordered = order(normalize_records(&merged));
//! assert_eq!(ordered[0].name, "basil");
//! assert_eq!(ordered[1].name, "Tomato");
//! ```

pub mod dataset;
pub mod date;
pub mod form;
pub mod merge;
pub mod order;

pub use dataset::{load_dataset, read_dataset, DatasetError};
pub use date::{normalize, normalize_season};
pub use form::{FieldDescriptor, FieldIdError, FieldRole, FormField, FormState, SeasonTag};
pub use merge::{merge, normalize_record, normalize_records};
pub use order::order;

use serde::Serialize;
use std::fmt;

// ============================================================================
// Record Identity
// ============================================================================

/// Stable identity of a chart row.
///
/// Keys come from the source and the row index within that source, never from
/// the name or the sorted position, so re-sorting does not churn visual groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "source", content = "row", rename_all = "lowercase")]
pub enum RecordKey {
    /// Row `i` of the static dataset
    Static(usize),
    /// Row `i` of the editable form
    Form(usize),
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Static(row) => write!(f, "static-{}", row),
            RecordKey::Form(row) => write!(f, "form-{}", row),
        }
    }
}

// ============================================================================
// Raw Records
// ============================================================================

/// One calendar endpoint as read from a source, before normalization.
///
/// `None` means the field was blank. A non-numeric value is kept as `NaN`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawDate {
    pub month: Option<f64>,
    pub day: Option<f64>,
}

impl RawDate {
    pub const fn new(month: f64, day: f64) -> Self {
        Self {
            month: Some(month),
            day: Some(day),
        }
    }

    /// Read month and day from text fields.
    pub fn parse(month: &str, day: &str) -> Self {
        Self {
            month: parse_component(month),
            day: parse_component(day),
        }
    }

    /// Read a form date value: the 2nd and 3rd dash-delimited segments are
    /// month and day (`2012-06-15`).
    pub fn from_form_value(value: &str) -> Self {
        let mut segments = value.split('-').skip(1);
        let month = segments.next().and_then(parse_component);
        let day = segments.next().and_then(parse_component);
        Self { month, day }
    }

    fn is_blank(&self) -> bool {
        let blank = |v: Option<f64>| v.map_or(true, |v| v == 0.0);
        blank(self.month) && blank(self.day)
    }
}

/// Parse one numeric text field. Blank is absent; garbage becomes `NaN`.
pub fn parse_component(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(text.parse::<f64>().unwrap_or(f64::NAN))
}

/// One season interval as read from a source.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawSeason {
    pub start: RawDate,
    pub end: RawDate,
}

impl RawSeason {
    pub const fn new(start: RawDate, end: RawDate) -> Self {
        Self { start, end }
    }

    /// A season with every field blank or zero is absent.
    pub fn is_absent(&self) -> bool {
        self.start.is_blank() && self.end.is_blank()
    }
}

/// One chart row before normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct RawRecord {
    pub key: RecordKey,
    pub name: Option<String>,
    pub season_one: RawSeason,
    pub season_two: RawSeason,
}

impl RawRecord {
    pub fn new(key: RecordKey) -> Self {
        Self {
            key,
            name: None,
            season_one: RawSeason::default(),
            season_two: RawSeason::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn season_one(mut self, start: RawDate, end: RawDate) -> Self {
        self.season_one = RawSeason::new(start, end);
        self
    }

    pub fn season_two(mut self, start: RawDate, end: RawDate) -> Self {
        self.season_two = RawSeason::new(start, end);
        self
    }
}

// ============================================================================
// Normalized Records
// ============================================================================

/// One chart row in half-month units, ready for layout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub key: RecordKey,
    pub name: String,
    pub start_first: f64,
    pub end_first: f64,
    pub start_second: f64,
    pub end_second: f64,
}

impl NormalizedRecord {
    /// Whether the second season bar is drawn.
    ///
    /// Gated on the first season's start, not on the second season's own data.
    pub fn shows_second_season(&self) -> bool {
        self.start_first != 0.0
    }
}
