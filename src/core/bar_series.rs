use serde::{Deserialize, Serialize};

use crate::core::scale::PlotMapping;
use crate::core::series::XySeries;
use crate::core::DataPoint;
use crate::error::{PlotError, PlotResult};

/// Vertical bar in pixel coordinates, spanning from the baseline to the sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub center_x: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Projects each finite sample into a bar anchored on `baseline` (normally the
/// range origin). Bars below the baseline hang downward.
pub fn project_bars(
    series: &dyn XySeries,
    mapping: PlotMapping,
    baseline: f64,
    bar_width_px: f64,
) -> PlotResult<Vec<BarGeometry>> {
    if !bar_width_px.is_finite() || bar_width_px <= 0.0 {
        return Err(PlotError::InvalidData(
            "bar width must be finite and > 0".to_owned(),
        ));
    }
    if !baseline.is_finite() {
        return Err(PlotError::InvalidData(
            "bar baseline must be finite".to_owned(),
        ));
    }

    let half = bar_width_px * 0.5;
    let baseline_y = mapping.y_to_pixel(baseline);
    let mut projected = Vec::with_capacity(series.len());
    for index in 0..series.len() {
        let Some((center_x, value_y)) =
            mapping.point_to_pixel(DataPoint::new(series.x(index), series.y(index)))
        else {
            continue;
        };

        projected.push(BarGeometry {
            center_x,
            left: center_x - half,
            right: center_x + half,
            top: value_y.min(baseline_y),
            bottom: value_y.max(baseline_y),
        });
    }

    Ok(projected)
}
