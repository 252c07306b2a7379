//! Vertical gridlines

use crate::scale::LinearScale;

/// Number of ticks across the domain
pub const TICK_COUNT: usize = 12;

/// One unlabeled vertical tick in body coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gridline {
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
}

/// Ticks at `scale(max * i / 12)` for `i` in `1..=12`, each running from
/// `bottom` up by `height`.
pub fn gridlines(scale: &LinearScale, bottom: f64, height: f64) -> Vec<Gridline> {
    let step = scale.domain_max() / TICK_COUNT as f64;
    (1..=TICK_COUNT)
        .map(|i| Gridline {
            x: scale.apply(step * i as f64),
            y1: bottom,
            y2: bottom - height,
        })
        .collect()
}

/// The grid's layer in the chart.
///
/// [`GridLayer::replace`] clears the previous lines before drawing, so the
/// layer always holds exactly one generation of gridlines.
#[derive(Clone, Debug, Default)]
pub struct GridLayer {
    lines: Vec<Gridline>,
    /// Vertical offset of the layer, the bottom of the last row
    offset: f64,
}

impl GridLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, scale: &LinearScale, row_bottom: f64, chart_height: f64) {
        self.lines.clear();
        self.offset = row_bottom;
        self.lines.extend(gridlines(scale, 0.0, chart_height));
    }

    pub fn lines(&self) -> &[Gridline] {
        &self.lines
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}
