//! # seasonchart-render
//!
//! Layout and rendering for seasonal timeline charts.
//!
//! This crate provides:
//! - Chart configuration with TOML overrides (`config`)
//! - The half-month to pixel scale (`scale`)
//! - Keyed enter/update/exit reconciliation of row groups (`timeline`)
//! - Gridlines and the static chart frame (`grid`, `frame`)
//! - The update cycle over both data sources (`chart`)
//! - SVG export and a plain-text renderer
//!
//! ## Example
//!
//! ```rust,ignore
//! use seasonchart_core::load_dataset;
//! use seasonchart_render::{Chart, ChartConfig, ChartRenderer, SvgExporter};
//!
//! let mut chart = Chart::new(ChartConfig::default());
//! chart.load(load_dataset("seasons.csv")?);
//! let report = chart.on_field_changed("0-name", "Cherry Tomato");
//! assert_eq!(report.entered.len(), 1);
//!
//! let svg = SvgExporter::new().render(chart.state())?;
//! ```

pub mod chart;
pub mod config;
pub mod export;
pub mod frame;
pub mod grid;
pub mod scale;
pub mod timeline;

pub use chart::{Chart, ChartState};
pub use config::{ChartConfig, ConfigError, Margin};
pub use export::SvgExporter;
pub use frame::ChartFrame;
pub use grid::{GridLayer, Gridline};
pub use scale::LinearScale;
pub use timeline::{GroupId, ReconcileReport, Timeline, VisualGroup};

use std::fmt::Write as _;

use thiserror::Error;

/// Errors from rendering a chart
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),
}

/// Turns the current chart state into an output format
pub trait ChartRenderer {
    type Output;

    fn render(&self, chart: &ChartState) -> Result<Self::Output, RenderError>;
}

/// Plain text listing of the ordered record set
#[derive(Default)]
pub struct TextRenderer;

impl ChartRenderer for TextRenderer {
    type Output = String;

    fn render(&self, chart: &ChartState) -> Result<String, RenderError> {
        let records = chart.records();
        let width = records
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(0)
            .max(4);

        let mut out = String::new();
        let fmt_err = |e: std::fmt::Error| RenderError::Format(e.to_string());
        writeln!(out, "{:<width$}  {:>11}  {:>11}", "Name", "Season 1", "Season 2")
            .map_err(fmt_err)?;
        for record in records {
            let second = if record.shows_second_season() {
                format!("{:>4.1} - {:>4.1}", record.start_second, record.end_second)
            } else {
                "-".to_string()
            };
            writeln!(
                out,
                "{:<width$}  {:>4.1} - {:>4.1}  {:>11}",
                record.name, record.start_first, record.end_first, second
            )
            .map_err(fmt_err)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seasonchart_core::{RawDate, RawRecord, RecordKey};

    #[test]
    fn text_renderer_lists_rows_in_order() {
        let mut state = ChartState::default();
        state.update(&[
            RawRecord::new(RecordKey::Static(0))
                .name("Tomato")
                .season_one(RawDate::new(6.0, 15.0), RawDate::new(8.0, 5.0)),
            RawRecord::new(RecordKey::Static(1)).name("apple"),
        ]);

        let text = TextRenderer.render(&state).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].starts_with("apple"));
        assert!(lines[2].starts_with("Tomato"));
        assert!(lines[2].contains(" 5.5 -  7.0"));
    }

    #[test]
    fn svg_export_has_one_group_per_row() {
        let mut state = ChartState::default();
        state.update(&[
            RawRecord::new(RecordKey::Static(0)).name("Leek"),
            RawRecord::new(RecordKey::Static(1)).name("Kale"),
        ]);
        let svg = SvgExporter::new().render(&state).unwrap();
        assert!(svg.contains("<svg"));
        assert_eq!(svg.matches("class=\"row\"").count(), 2);
        assert!(svg.contains("data-key=\"static-1\""));
        assert!(svg.contains("January"));
        assert_eq!(svg.matches("<line").count(), grid::TICK_COUNT);
    }
}
