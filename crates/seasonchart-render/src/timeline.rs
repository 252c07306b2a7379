//! Keyed timeline reconciliation
//!
//! The timeline keeps one [`VisualGroup`] per record, keyed by [`RecordKey`].
//! Each call to [`Timeline::reconcile`] matches the new ordered record set
//! against the groups already on screen:
//!
//! - **enter**: key not rendered before, a group is created with a fresh id
//! - **update**: key already rendered, the group keeps its id and every
//!   attribute is recomputed
//! - **exit**: key no longer present, the group is removed
//!
//! Rows are laid out at `index * row_height` in the order given, so a re-sort
//! moves groups without recreating them.

use std::collections::{HashMap, HashSet};

use seasonchart_core::{NormalizedRecord, RecordKey};

use crate::config::ChartConfig;
use crate::scale::LinearScale;

/// Identity of a rendered group, stable for as long as its key stays present
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u64);

/// Full-width background shading behind a row
#[derive(Clone, Debug, PartialEq)]
pub struct Band {
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

/// One season interval drawn as a rectangle
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

/// Row label, right-aligned left of the body
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub dy: f64,
    pub font_size: f64,
}

/// Shapes drawn for one record
#[derive(Clone, Debug, PartialEq)]
pub struct VisualGroup {
    pub id: GroupId,
    pub key: RecordKey,
    /// Row position in the current order
    pub index: usize,
    pub y: f64,
    pub band: Band,
    pub season_one: Bar,
    pub season_two: Option<Bar>,
    pub label: Label,
}

/// What one reconciliation did, by key
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub entered: Vec<RecordKey>,
    pub updated: Vec<RecordKey>,
    pub exited: Vec<RecordKey>,
}

impl ReconcileReport {
    /// True when no group was created or removed.
    pub fn is_stable(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

/// Retained set of visual groups
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    groups: HashMap<RecordKey, VisualGroup>,
    order: Vec<RecordKey>,
    next_id: u64,
    body_height: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synchronize the rendered groups with `records`, taken in display order.
    pub fn reconcile(
        &mut self,
        records: &[NormalizedRecord],
        scale: &LinearScale,
        config: &ChartConfig,
    ) -> ReconcileReport {
        let mut report = ReconcileReport::default();
        let mut seen = HashSet::with_capacity(records.len());
        let mut order = Vec::with_capacity(records.len());

        for record in records {
            if !seen.insert(record.key) {
                tracing::warn!(key = %record.key, "duplicate record key, keeping first");
                continue;
            }
            let index = order.len();
            order.push(record.key);

            match self.groups.get_mut(&record.key) {
                Some(group) => {
                    layout(group, record, index, scale, config);
                    report.updated.push(record.key);
                }
                None => {
                    let id = GroupId(self.next_id);
                    self.next_id += 1;
                    let group = create_group(id, record, index, scale, config);
                    self.groups.insert(record.key, group);
                    report.entered.push(record.key);
                }
            }
        }

        for key in &self.order {
            if !seen.contains(key) {
                self.groups.remove(key);
                report.exited.push(*key);
            }
        }

        self.order = order;
        self.body_height = config.row_height * self.order.len() as f64;

        tracing::debug!(
            entered = report.entered.len(),
            updated = report.updated.len(),
            exited = report.exited.len(),
            "reconciled timeline"
        );
        report
    }

    /// Groups in display order
    pub fn groups(&self) -> impl Iterator<Item = &VisualGroup> {
        self.order.iter().filter_map(|key| self.groups.get(key))
    }

    pub fn group(&self, key: RecordKey) -> Option<&VisualGroup> {
        self.groups.get(&key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Height of the body container, one row per group
    pub fn body_height(&self) -> f64 {
        self.body_height
    }
}

fn create_group(
    id: GroupId,
    record: &NormalizedRecord,
    index: usize,
    scale: &LinearScale,
    config: &ChartConfig,
) -> VisualGroup {
    let empty_bar = Bar {
        x: 0.0,
        width: 0.0,
        height: 0.0,
        fill: String::new(),
    };
    let mut group = VisualGroup {
        id,
        key: record.key,
        index,
        y: 0.0,
        band: Band {
            width: 0.0,
            height: 0.0,
            fill: String::new(),
        },
        season_one: empty_bar,
        season_two: None,
        label: Label {
            text: String::new(),
            x: 0.0,
            dy: 0.0,
            font_size: 0.0,
        },
    };
    layout(&mut group, record, index, scale, config);
    group
}

/// Recompute every attribute of `group` from `record` at row `index`.
fn layout(
    group: &mut VisualGroup,
    record: &NormalizedRecord,
    index: usize,
    scale: &LinearScale,
    config: &ChartConfig,
) {
    let bar_height = (config.row_height - 1.0).max(0.0);
    let font_size = config.font_size();

    group.index = index;
    group.y = index as f64 * config.row_height;

    // Band spans twelve months whatever the current domain is.
    group.band = Band {
        width: scale.apply(12.0),
        height: config.row_height,
        fill: if index % 2 == 0 {
            config.band_even.clone()
        } else {
            config.band_odd.clone()
        },
    };

    group.season_one = season_bar(
        record.start_first,
        record.end_first,
        bar_height,
        scale,
        config,
    );
    group.season_two = record.shows_second_season().then(|| {
        season_bar(
            record.start_second,
            record.end_second,
            bar_height,
            scale,
            config,
        )
    });

    group.label = Label {
        text: record.name.clone(),
        x: -config.label_padding,
        dy: config.row_height / 2.0 + font_size / 2.0,
        font_size,
    };
}

fn season_bar(
    start: f64,
    end: f64,
    height: f64,
    scale: &LinearScale,
    config: &ChartConfig,
) -> Bar {
    Bar {
        x: scale.apply(start),
        width: scale.apply(end - start).max(0.0),
        height,
        fill: config.bar_color.clone(),
    }
}
