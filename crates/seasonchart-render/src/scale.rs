//! Horizontal scale from half-month units to pixels

use std::cmp::Ordering;

use seasonchart_core::NormalizedRecord;

/// Linear map from `[0, domain_max]` to `[0, range_max]`.
///
/// A domain that is not strictly positive collapses every value to offset 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain_max: f64,
    range_max: f64,
}

impl LinearScale {
    pub fn new(domain_max: f64, range_max: f64) -> Self {
        Self {
            domain_max,
            range_max,
        }
    }

    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    pub fn range_max(&self) -> f64 {
        self.range_max
    }

    pub fn is_collapsed(&self) -> bool {
        self.domain_max.partial_cmp(&0.0) != Some(Ordering::Greater)
    }

    /// Pixel offset for a half-month value (or a half-month length).
    pub fn apply(&self, value: f64) -> f64 {
        if self.is_collapsed() {
            return 0.0;
        }
        value / self.domain_max * self.range_max
    }
}

/// Largest season-one end across the set; 0 for an empty set.
pub fn max_end_first(records: &[NormalizedRecord]) -> f64 {
    records
        .iter()
        .map(|r| r.end_first)
        .fold(None, |max: Option<f64>, v| Some(max.map_or(v, |m| m.max(v))))
        .unwrap_or(0.0)
}

/// Rebuild the scale for the current record set.
pub fn rescale(records: &[NormalizedRecord], width: f64) -> LinearScale {
    let domain_max = max_end_first(records);
    tracing::debug!(domain_max, width, "rescaled timeline");
    LinearScale::new(domain_max, width)
}
