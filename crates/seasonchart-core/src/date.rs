//! Half-month date normalization
//!
//! Calendar dates are snapped onto a grid of half months so early, mid and
//! late dates line up with the axis:
//!
//! | Day        | Result      |
//! |------------|-------------|
//! | `>= 20`    | `month`     |
//! | `11..=19`  | `month - ½` |
//! | `<= 10`    | `month - 1` |

use crate::{RawDate, RawSeason};

/// Map a calendar `(month, day)` to a half-month scalar.
///
/// Month is not bounds checked. A day that compares false against every
/// threshold (`NaN`) falls back to `0.0` with a warning instead of failing.
pub fn normalize(month: f64, day: f64) -> f64 {
    if day >= 20.0 {
        month
    } else if day > 10.0 {
        month - 0.5
    } else if day <= 10.0 {
        month - 1.0
    } else {
        tracing::warn!(month, day, "could not place date on half-month grid, using 0");
        0.0
    }
}

/// Normalize one endpoint. Absent or non-numeric month reads as 0, absent day
/// reads as 0; a non-numeric day is passed through and hits the fallback.
pub fn normalize_date(date: &RawDate) -> f64 {
    let month = date.month.filter(|m| !m.is_nan()).unwrap_or(0.0);
    let day = date.day.unwrap_or(0.0);
    normalize(month, day)
}

/// Normalize a season to `(start, end)`; an absent season is `(0, 0)`.
pub fn normalize_season(season: &RawSeason) -> (f64, f64) {
    if season.is_absent() {
        return (0.0, 0.0);
    }
    (normalize_date(&season.start), normalize_date(&season.end))
}
