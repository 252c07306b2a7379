//! Editable form fields
//!
//! Each field identifier has the shape `row-role[-season]`, e.g. `0-name`,
//! `2-start-one`, `2-end-two`. Identifiers are parsed once into a
//! [`FieldDescriptor`]; values for date roles are `YYYY-MM-DD` strings.

use std::collections::BTreeMap;
use std::str::FromStr;

use thiserror::Error;

use crate::{RawDate, RawRecord, RecordKey};

/// What a field edits within its row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRole {
    Name,
    Start,
    End,
}

/// Which season a date field is tagged with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeasonTag {
    One,
    Two,
}

/// Typed form of a field identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub row: usize,
    pub role: FieldRole,
    /// `None` when the tag is missing or not recognized
    pub season: Option<SeasonTag>,
}

/// Reasons a field identifier does not describe an edit
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldIdError {
    #[error("field '{0}' has no numeric row index")]
    InvalidRow(String),

    #[error("field role '{role}' in row {row} is not one of name/start/end")]
    UnknownRole { row: usize, role: String },
}

impl FromStr for FieldDescriptor {
    type Err = FieldIdError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let mut parts = id.split('-');
        let row = parts
            .next()
            .and_then(|r| r.trim().parse::<usize>().ok())
            .ok_or_else(|| FieldIdError::InvalidRow(id.to_string()))?;

        let role = match parts.next().unwrap_or("") {
            "name" => FieldRole::Name,
            "start" => FieldRole::Start,
            "end" => FieldRole::End,
            other => {
                return Err(FieldIdError::UnknownRole {
                    row,
                    role: other.to_string(),
                })
            }
        };

        let season = match parts.next() {
            Some("one") => Some(SeasonTag::One),
            Some("two") => Some(SeasonTag::Two),
            _ => None,
        };

        Ok(Self { row, role, season })
    }
}

/// One input on the form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub id: String,
    pub value: String,
}

impl FormField {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// The form's fields in registration order.
///
/// Order matters: later fields of the same row overwrite what earlier ones set.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    fields: Vec<FormField>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a field's value, registering it at the end if it is new.
    pub fn set(&mut self, id: impl Into<String>, value: impl Into<String>) {
        let id = id.into();
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.id == id) {
            Some(field) => field.value = value,
            None => self.fields.push(FormField { id, value }),
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Scan every field and build one override record per row, ordered by row.
    pub fn overrides(&self) -> Vec<RawRecord> {
        build_overrides(&self.fields)
    }
}

/// Group fields by row index into override records.
///
/// A `start`/`end` field tagged `one` writes both the season-one and the
/// season-two endpoint from its value. Untagged and `two`-tagged fields only
/// write season two.
pub fn build_overrides(fields: &[FormField]) -> Vec<RawRecord> {
    let mut rows: BTreeMap<usize, RawRecord> = BTreeMap::new();

    for field in fields {
        let descriptor = match field.id.parse::<FieldDescriptor>() {
            Ok(descriptor) => descriptor,
            Err(FieldIdError::UnknownRole { row, role }) => {
                tracing::debug!(field = %field.id, %role, "ignoring field with unknown role");
                rows.entry(row)
                    .or_insert_with(|| RawRecord::new(RecordKey::Form(row)));
                continue;
            }
            Err(err) => {
                tracing::debug!(field = %field.id, "ignoring field: {}", err);
                continue;
            }
        };

        let record = rows
            .entry(descriptor.row)
            .or_insert_with(|| RawRecord::new(RecordKey::Form(descriptor.row)));

        match descriptor.role {
            FieldRole::Name => record.name = Some(field.value.clone()),
            FieldRole::Start => {
                let date = RawDate::from_form_value(&field.value);
                if descriptor.season == Some(SeasonTag::One) {
                    record.season_one.start = date;
                }
                record.season_two.start = date;
            }
            FieldRole::End => {
                let date = RawDate::from_form_value(&field.value);
                if descriptor.season == Some(SeasonTag::One) {
                    record.season_one.end = date;
                }
                record.season_two.end = date;
            }
        }
    }

    rows.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_full_descriptor() {
        let d: FieldDescriptor = "3-start-one".parse().unwrap();
        assert_eq!(
            d,
            FieldDescriptor {
                row: 3,
                role: FieldRole::Start,
                season: Some(SeasonTag::One),
            }
        );
    }

    #[test]
    fn parse_name_descriptor_has_no_season() {
        let d: FieldDescriptor = "0-name".parse().unwrap();
        assert_eq!(d.role, FieldRole::Name);
        assert_eq!(d.season, None);
    }

    #[test]
    fn parse_rejects_bad_row_and_role() {
        assert_eq!(
            "x-name".parse::<FieldDescriptor>(),
            Err(FieldIdError::InvalidRow("x-name".into()))
        );
        assert_eq!(
            "1-color".parse::<FieldDescriptor>(),
            Err(FieldIdError::UnknownRole {
                row: 1,
                role: "color".into()
            })
        );
    }

    #[test]
    fn unknown_season_tag_is_untagged() {
        let d: FieldDescriptor = "1-end-three".parse().unwrap();
        assert_eq!(d.season, None);
    }

    #[test]
    fn season_one_field_also_writes_season_two() {
        let fields = vec![
            FormField::new("0-start-one", "2012-03-01"),
            FormField::new("0-end-one", "2012-05-25"),
        ];
        let rows = build_overrides(&fields);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.season_one.start, RawDate::new(3.0, 1.0));
        assert_eq!(row.season_one.end, RawDate::new(5.0, 25.0));
        assert_eq!(row.season_two.start, RawDate::new(3.0, 1.0));
        assert_eq!(row.season_two.end, RawDate::new(5.0, 25.0));
    }

    #[test]
    fn later_season_two_field_overrides_copy() {
        let fields = vec![
            FormField::new("0-end-one", "2012-05-25"),
            FormField::new("0-end-two", "2012-10-01"),
        ];
        let rows = build_overrides(&fields);
        assert_eq!(rows[0].season_one.end, RawDate::new(5.0, 25.0));
        assert_eq!(rows[0].season_two.end, RawDate::new(10.0, 1.0));
    }

    #[test]
    fn rows_are_created_lazily_and_ordered() {
        let fields = vec![
            FormField::new("2-name", "Kale"),
            FormField::new("0-name", "Leek"),
        ];
        let rows = build_overrides(&fields);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, RecordKey::Form(0));
        assert_eq!(rows[0].name.as_deref(), Some("Leek"));
        assert_eq!(rows[1].key, RecordKey::Form(2));
    }

    #[test]
    fn unknown_role_creates_empty_row() {
        let rows = build_overrides(&[FormField::new("4-color", "red")]);
        assert_eq!(rows, vec![RawRecord::new(RecordKey::Form(4))]);
    }

    #[test]
    fn invalid_row_is_skipped() {
        let rows = build_overrides(&[FormField::new("abc-name", "Kale")]);
        assert!(rows.is_empty());
    }

    #[test]
    fn form_state_updates_in_place() {
        let mut form = FormState::new();
        assert!(form.is_empty());
        form.set("0-name", "Kale");
        assert!(!form.is_empty());
        form.set("0-start-one", "2012-04-12");
        form.set("0-name", "Chard");
        assert_eq!(form.fields().len(), 2);
        assert_eq!(form.fields()[0], FormField::new("0-name", "Chard"));
    }
}
