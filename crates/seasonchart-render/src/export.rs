//! SVG export of the current visual tree

use std::path::Path;

use svg::node::element::{Group, Line, Rectangle, Text};
use svg::Document;

use crate::chart::ChartState;
use crate::timeline::{Bar, VisualGroup};
use crate::{ChartRenderer, RenderError};

/// Serializes a chart's visual tree as SVG markup
#[derive(Clone, Debug, Default)]
pub struct SvgExporter;

impl SvgExporter {
    pub fn new() -> Self {
        Self
    }

    /// Write the chart to `path` as an SVG file.
    pub fn export(&self, chart: &ChartState, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let markup = self.render(chart)?;
        std::fs::write(path.as_ref(), markup)?;
        tracing::info!(path = %path.as_ref().display(), "exported chart");
        Ok(())
    }

    fn render_axis(&self, chart: &ChartState) -> Group {
        let config = chart.config();
        let frame = chart.frame();
        let mut group = Group::new().set("class", "months").set(
            "transform",
            format!("translate({},{})", frame.body_x, frame.axis_y),
        );
        for tick in &frame.months {
            let label = Text::new(tick.label.as_str())
                .set("x", tick.x)
                .set("y", 0)
                .set("font-family", config.font_family.as_str())
                .set("font-size", 10)
                .set("fill", config.text_color.as_str())
                .set("text-anchor", "start");
            group = group.add(label);
        }
        group
    }

    fn render_row(&self, chart: &ChartState, row: &VisualGroup) -> Group {
        let config = chart.config();

        let band = Rectangle::new()
            .set("width", row.band.width)
            .set("height", row.band.height)
            .set("fill", row.band.fill.as_str());

        let mut group = Group::new()
            .set("class", "row")
            .set("data-key", row.key.to_string())
            .set("data-group", row.id.0.to_string())
            .set("transform", format!("translate(0,{})", row.y))
            .add(band)
            .add(bar_rect(&row.season_one));

        if let Some(second) = &row.season_two {
            group = group.add(bar_rect(second));
        }

        let label = Text::new(row.label.text.as_str())
            .set("x", row.label.x)
            .set("dy", row.label.dy)
            .set("font-size", row.label.font_size)
            .set("fill", config.text_color.as_str())
            .set("text-anchor", "end")
            .set("font-family", config.font_family.as_str());
        group.add(label)
    }

    fn render_grid(&self, chart: &ChartState) -> Group {
        let grid = chart.grid();
        let mut group = Group::new()
            .set("class", "grid")
            .set("transform", format!("translate(0,{})", grid.offset()));
        for line in grid.lines() {
            group = group.add(
                Line::new()
                    .set("x1", line.x)
                    .set("y1", line.y1)
                    .set("x2", line.x)
                    .set("y2", line.y2)
                    .set("stroke", chart.config().grid_color.as_str())
                    .set("stroke-width", 1),
            );
        }
        group
    }
}

fn bar_rect(bar: &Bar) -> Rectangle {
    Rectangle::new()
        .set("class", "bar")
        .set("x", bar.x)
        .set("width", bar.width)
        .set("height", bar.height)
        .set("fill", bar.fill.as_str())
}

impl ChartRenderer for SvgExporter {
    type Output = String;

    fn render(&self, chart: &ChartState) -> Result<String, RenderError> {
        let frame = chart.frame();

        let mut body = Group::new()
            .set("class", "chart-body")
            .set(
                "transform",
                format!("translate({},{})", frame.body_x, frame.body_y),
            )
            .set("height", chart.timeline().body_height());
        for row in chart.timeline().groups() {
            body = body.add(self.render_row(chart, row));
        }
        body = body.add(self.render_grid(chart));

        let document = Document::new()
            .set("class", "chart")
            .set("width", frame.width)
            .set("height", frame.height)
            .set("viewBox", (0, 0, frame.width, frame.height))
            .set("xmlns", "http://www.w3.org/2000/svg")
            .add(self.render_axis(chart))
            .add(body);

        let mut output = Vec::new();
        svg::write(&mut output, &document)
            .map_err(|e| RenderError::Format(format!("Failed to write SVG: {}", e)))?;

        String::from_utf8(output).map_err(|e| RenderError::Format(format!("Invalid UTF-8: {}", e)))
    }
}
