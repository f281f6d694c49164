use serde::{Deserialize, Serialize};

use crate::core::constraints::PlotConstraints;
use crate::core::series::SharedSeries;
use crate::core::{Axis, RectRegion};

/// Candidate extremes for one frame, before framing policies are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl RawBounds {
    #[must_use]
    pub fn axis(self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Domain => (self.min_x, self.max_x),
            Axis::Range => (self.min_y, self.max_y),
        }
    }
}

/// Running min/max that ignores non-finite values.
#[derive(Debug, Clone, Copy)]
struct Extent {
    min: f64,
    max: f64,
}

impl Extent {
    const EMPTY: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    fn include(&mut self, value: f64) {
        if value.is_finite() {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
    }

    fn min(self) -> Option<f64> {
        self.min.is_finite().then_some(self.min)
    }

    fn max(self) -> Option<f64> {
        self.max.is_finite().then_some(self.max)
    }
}

/// Computes the raw candidate bounds for a frame.
///
/// Per edge: an explicit constraint override wins; otherwise the finite
/// extremes of every registered sample are used; when nothing contributes
/// the default bounds edge is used. The series are only scanned when at
/// least one edge needs it.
#[must_use]
pub fn aggregate(
    constraints: &PlotConstraints,
    series: &[SharedSeries],
    default_bounds: RectRegion,
) -> RawBounds {
    let (user_min_x, user_max_x) = constraints.domain.overrides();
    let (user_min_y, user_max_y) = constraints.range.overrides();

    let needs_scan = user_min_x.is_none()
        || user_max_x.is_none()
        || user_min_y.is_none()
        || user_max_y.is_none();

    let (x_extent, y_extent) = if needs_scan {
        scan(series)
    } else {
        (Extent::EMPTY, Extent::EMPTY)
    };

    RawBounds {
        min_x: user_min_x
            .or_else(|| x_extent.min())
            .unwrap_or(default_bounds.min_x),
        max_x: user_max_x
            .or_else(|| x_extent.max())
            .unwrap_or(default_bounds.max_x),
        min_y: user_min_y
            .or_else(|| y_extent.min())
            .unwrap_or(default_bounds.min_y),
        max_y: user_max_y
            .or_else(|| y_extent.max())
            .unwrap_or(default_bounds.max_y),
    }
}

fn scan(series: &[SharedSeries]) -> (Extent, Extent) {
    let mut x_extent = Extent::EMPTY;
    let mut y_extent = Extent::EMPTY;

    for s in series {
        for index in 0..s.len() {
            // Each axis skips its own non-finite values independently.
            x_extent.include(s.x(index));
            let (low, high) = s.y_span(index);
            y_extent.include(low);
            y_extent.include(high);
        }
    }

    (x_extent, y_extent)
}
