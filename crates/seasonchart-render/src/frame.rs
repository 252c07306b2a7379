//! One-time chart frame: canvas size, body offset and the month axis

use chrono::{Datelike, NaiveDate};

use crate::config::ChartConfig;

/// Offset of month labels from their tick
const LABEL_OFFSET: f64 = 6.0;

/// A month name placed on the top axis
#[derive(Clone, Debug, PartialEq)]
pub struct MonthTick {
    pub label: String,
    pub x: f64,
}

/// Static layout built once per chart
#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    /// Translation of the chart body
    pub body_x: f64,
    pub body_y: f64,
    /// Vertical position of the month axis
    pub axis_y: f64,
    pub months: Vec<MonthTick>,
}

impl ChartFrame {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            width: config.canvas_width,
            height: config.canvas_height,
            body_x: config.margin.left,
            body_y: config.margin.top,
            axis_y: config.row_height,
            months: month_ticks(config.year, config.content_width()),
        }
    }
}

/// Month labels for `year`, positioned on a calendar-time scale running from
/// January 1st to December 31st across `width` pixels.
pub fn month_ticks(year: i32, width: f64) -> Vec<MonthTick> {
    let (Some(first), Some(last)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        tracing::warn!(year, "calendar year out of range, axis left empty");
        return Vec::new();
    };
    let span = (last - first).num_days() as f64;

    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(first.year(), month, 1))
        .map(|start| MonthTick {
            label: start.format("%B").to_string(),
            x: (start - first).num_days() as f64 / span * width + LABEL_OFFSET,
        })
        .collect()
}
