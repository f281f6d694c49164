use serde::{Deserialize, Serialize};

use crate::core::scale::PlotMapping;
use crate::core::series::XySeries;
use crate::core::DataPoint;

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects adjacent samples into line segments.
///
/// A gap (non-finite sample) breaks the line: no segment touches it.
#[must_use]
pub fn project_line_segments(series: &dyn XySeries, mapping: PlotMapping) -> Vec<LineSegment> {
    let mut segments = Vec::with_capacity(series.len().saturating_sub(1));
    let mut last: Option<(f64, f64)> = None;

    for index in 0..series.len() {
        let current = mapping.point_to_pixel(DataPoint::new(series.x(index), series.y(index)));
        if let (Some(from), Some(to)) = (last, current) {
            segments.push(LineSegment {
                x1: from.0,
                y1: from.1,
                x2: to.0,
                y2: to.1,
            });
        }
        last = current;
    }

    segments
}

/// Projects every finite sample to a pixel position.
#[must_use]
pub fn project_points(series: &dyn XySeries, mapping: PlotMapping) -> Vec<(f64, f64)> {
    (0..series.len())
        .filter_map(|index| {
            mapping.point_to_pixel(DataPoint::new(series.x(index), series.y(index)))
        })
        .collect()
}
