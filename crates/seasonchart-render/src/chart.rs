//! Chart state and the update cycle
//!
//! [`ChartState`] owns everything that survives between updates: the frame,
//! the current scale, the retained timeline and the grid layer. [`Chart`] adds
//! the two data sources and re-runs the whole pipeline whenever either one
//! changes:
//!
//! merge → normalize → order → rescale → reconcile → gridlines
//!
//! Updates take `&mut self` and run to completion, so two reconciliations can
//! never interleave.

use seasonchart_core::{merge, normalize_records, order, FormState, NormalizedRecord, RawRecord};

use crate::config::ChartConfig;
use crate::frame::ChartFrame;
use crate::grid::GridLayer;
use crate::scale::{rescale, LinearScale};
use crate::timeline::{ReconcileReport, Timeline};

/// Mutable rendering state of one chart
#[derive(Clone, Debug)]
pub struct ChartState {
    config: ChartConfig,
    frame: ChartFrame,
    scale: LinearScale,
    timeline: Timeline,
    grid: GridLayer,
    records: Vec<NormalizedRecord>,
}

impl ChartState {
    pub fn new(config: ChartConfig) -> Self {
        let frame = ChartFrame::new(&config);
        let scale = LinearScale::new(0.0, config.content_width());
        Self {
            config,
            frame,
            scale,
            timeline: Timeline::new(),
            grid: GridLayer::new(),
            records: Vec::new(),
        }
    }

    /// Re-derive the ordered record set from `raw` and bring the visual tree
    /// in line with it.
    pub fn update(&mut self, raw: &[RawRecord]) -> ReconcileReport {
        let records = order(normalize_records(raw));
        self.scale = rescale(&records, self.config.content_width());
        let report = self.timeline.reconcile(&records, &self.scale, &self.config);
        self.grid.replace(
            &self.scale,
            self.timeline.body_height(),
            self.config.content_height(),
        );
        self.records = records;
        report
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    pub fn scale(&self) -> &LinearScale {
        &self.scale
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn grid(&self) -> &GridLayer {
        &self.grid
    }

    /// The ordered record set from the last update
    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

/// A chart fed by a static dataset and an editable form
#[derive(Clone, Debug, Default)]
pub struct Chart {
    dataset: Vec<RawRecord>,
    form: FormState,
    state: ChartState,
}

impl Chart {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            dataset: Vec::new(),
            form: FormState::new(),
            state: ChartState::new(config),
        }
    }

    /// Replace the static dataset and redraw.
    pub fn load(&mut self, dataset: Vec<RawRecord>) -> ReconcileReport {
        self.dataset = dataset;
        self.refresh()
    }

    /// Apply one form edit and redraw.
    pub fn on_field_changed(&mut self, id: &str, value: &str) -> ReconcileReport {
        self.form.set(id, value);
        self.refresh()
    }

    /// Rebuild from both sources.
    pub fn refresh(&mut self) -> ReconcileReport {
        let merged = merge(&self.dataset, &self.form.overrides());
        self.state.update(&merged)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }
}
