//! Per-frame axis framing.
//!
//! Resolution order for one frame:
//! 1. the last calculated bounds become the previous bounds,
//! 2. raw candidates are aggregated from constraints and series,
//! 3. each axis is framed by its model (EDGE or ORIGIN),
//! 4. derived origins are taken from the user origin or the resolved minimum.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::bounds::{RawBounds, aggregate};
use crate::core::constraints::{AxisConstraints, BoundaryMode, FramingModel, PlotConstraints};
use crate::core::series::SharedSeries;
use crate::core::{Axis, RectRegion};
use crate::error::{PlotError, PlotResult};

/// Bounds resolved for one render frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatedBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub domain_origin: f64,
    pub range_origin: f64,
}

impl CalculatedBounds {
    /// Bounds used before the first computation: the default rectangle with
    /// origins at its minimums.
    #[must_use]
    pub fn from_default(default_bounds: RectRegion) -> Self {
        Self {
            min_x: default_bounds.min_x,
            max_x: default_bounds.max_x,
            min_y: default_bounds.min_y,
            max_y: default_bounds.max_y,
            domain_origin: default_bounds.min_x,
            range_origin: default_bounds.min_y,
        }
    }

    #[must_use]
    pub fn axis(self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Domain => (self.min_x, self.max_x),
            Axis::Range => (self.min_y, self.max_y),
        }
    }

    #[must_use]
    pub fn origin(self, axis: Axis) -> f64 {
        match axis {
            Axis::Domain => self.domain_origin,
            Axis::Range => self.range_origin,
        }
    }
}

/// Applies framing models to raw candidates.
///
/// `previous` is the prior frame's result and drives GROW/SHRINK. When
/// `has_series` is false the range axis keeps its aggregated EDGE values
/// without hysteresis or clamps.
pub fn frame_bounds(
    constraints: &PlotConstraints,
    raw: RawBounds,
    previous: Option<&CalculatedBounds>,
    has_series: bool,
) -> PlotResult<CalculatedBounds> {
    let (min_x, max_x) = frame_axis(
        Axis::Domain,
        &constraints.domain,
        raw.axis(Axis::Domain),
        previous.map(|bounds| bounds.axis(Axis::Domain)),
        true,
    )?;
    let (min_y, max_y) = frame_axis(
        Axis::Range,
        &constraints.range,
        raw.axis(Axis::Range),
        previous.map(|bounds| bounds.axis(Axis::Range)),
        has_series,
    )?;

    Ok(CalculatedBounds {
        min_x,
        max_x,
        min_y,
        max_y,
        domain_origin: constraints.domain.origin.unwrap_or(min_x),
        range_origin: constraints.range.origin.unwrap_or(min_y),
    })
}

fn frame_axis(
    axis: Axis,
    constraints: &AxisConstraints,
    raw: (f64, f64),
    previous: Option<(f64, f64)>,
    apply_edge_modes: bool,
) -> PlotResult<(f64, f64)> {
    match constraints.model {
        FramingModel::Edge => {
            if !apply_edge_modes {
                return Ok(raw);
            }
            let upper = resolve_upper(
                constraints.upper.mode(),
                previous.map(|(_, max)| max),
                raw.1,
            );
            let lower = resolve_lower(
                constraints.lower.mode(),
                previous.map(|(min, _)| min),
                raw.0,
            );
            Ok((
                constraints.lower_clamp.apply(lower),
                constraints.upper_clamp.apply(upper),
            ))
        }
        FramingModel::Origin => frame_origin(axis, constraints, raw, previous),
    }
}

/// Upper edge under EDGE framing. Ties keep the previous value.
#[must_use]
pub fn resolve_upper(mode: BoundaryMode, previous: Option<f64>, candidate: f64) -> f64 {
    match (mode, previous) {
        (BoundaryMode::Grow, Some(previous)) if !(candidate > previous) => previous,
        (BoundaryMode::Shrink, Some(previous)) if !(candidate < previous) => previous,
        _ => candidate,
    }
}

/// Lower edge under EDGE framing. Ties keep the previous value.
#[must_use]
pub fn resolve_lower(mode: BoundaryMode, previous: Option<f64>, candidate: f64) -> f64 {
    match (mode, previous) {
        (BoundaryMode::Grow, Some(previous)) if !(candidate < previous) => previous,
        (BoundaryMode::Shrink, Some(previous)) if !(candidate > previous) => previous,
        _ => candidate,
    }
}

fn frame_origin(
    axis: Axis,
    constraints: &AxisConstraints,
    raw: (f64, f64),
    previous: Option<(f64, f64)>,
) -> PlotResult<(f64, f64)> {
    let origin = constraints.origin.ok_or(PlotError::MissingOrigin { axis })?;
    let mode = constraints.origin_framing.mode;

    // The range axis only centers automatically.
    if axis == Axis::Range && mode != BoundaryMode::Auto {
        return Err(PlotError::UnsupportedFraming {
            axis,
            model: FramingModel::Origin,
            mode,
        });
    }

    if mode == BoundaryMode::Fixed {
        let extent = constraints
            .origin_framing
            .extent
            .ok_or(PlotError::MissingOriginExtent { axis })?;
        return Ok((origin - extent, origin + extent));
    }

    let delta = (raw.1 - origin).abs().max((raw.0 - origin).abs());
    let lower = origin - delta;
    let upper = origin + delta;

    Ok(match mode {
        BoundaryMode::Grow => (
            resolve_lower(BoundaryMode::Grow, previous.map(|(min, _)| min), lower),
            resolve_upper(BoundaryMode::Grow, previous.map(|(_, max)| max), upper),
        ),
        BoundaryMode::Shrink => (
            resolve_lower(BoundaryMode::Shrink, previous.map(|(min, _)| min), lower),
            resolve_upper(BoundaryMode::Shrink, previous.map(|(_, max)| max), upper),
        ),
        BoundaryMode::Auto | BoundaryMode::Fixed => (lower, upper),
    })
}

/// Frame-to-frame bounds state: the current result and the one before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundsState {
    calculated: Option<CalculatedBounds>,
    previous: Option<CalculatedBounds>,
}

impl BoundsState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one full bounds computation.
    ///
    /// The state is only committed when framing succeeds; on error both the
    /// calculated and the previous bounds are left as they were.
    pub fn recompute(
        &mut self,
        constraints: &PlotConstraints,
        series: &[SharedSeries],
        default_bounds: RectRegion,
    ) -> PlotResult<CalculatedBounds> {
        let previous = self.calculated;
        let raw = aggregate(constraints, series, default_bounds);
        let next = frame_bounds(constraints, raw, previous.as_ref(), !series.is_empty())?;

        trace!(
            min_x = next.min_x,
            max_x = next.max_x,
            min_y = next.min_y,
            max_y = next.max_y,
            series = series.len(),
            "calculated bounds"
        );

        self.previous = previous;
        self.calculated = Some(next);
        Ok(next)
    }

    #[must_use]
    pub fn calculated(&self) -> Option<CalculatedBounds> {
        self.calculated
    }

    #[must_use]
    pub fn previous(&self) -> Option<CalculatedBounds> {
        self.previous
    }

    /// Current bounds, or the default rectangle when nothing was computed yet.
    #[must_use]
    pub fn resolved(&self, default_bounds: RectRegion) -> CalculatedBounds {
        self.calculated
            .unwrap_or_else(|| CalculatedBounds::from_default(default_bounds))
    }

    /// Forgets all history so the next frame starts without hysteresis.
    pub fn reset(&mut self) {
        self.calculated = None;
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_keeps_previous_on_tie() {
        assert_eq!(resolve_upper(BoundaryMode::Grow, Some(10.0), 10.0), 10.0);
        assert_eq!(resolve_upper(BoundaryMode::Grow, Some(10.0), 5.0), 10.0);
        assert_eq!(resolve_upper(BoundaryMode::Grow, Some(10.0), 11.0), 11.0);
        assert_eq!(resolve_upper(BoundaryMode::Grow, None, 5.0), 5.0);
        assert_eq!(resolve_lower(BoundaryMode::Grow, Some(0.0), 1.0), 0.0);
        assert_eq!(resolve_lower(BoundaryMode::Grow, Some(0.0), -1.0), -1.0);
    }

    #[test]
    fn shrink_only_moves_inward() {
        assert_eq!(resolve_upper(BoundaryMode::Shrink, Some(10.0), 12.0), 10.0);
        assert_eq!(resolve_upper(BoundaryMode::Shrink, Some(10.0), 8.0), 8.0);
        assert_eq!(resolve_lower(BoundaryMode::Shrink, Some(0.0), -3.0), 0.0);
        assert_eq!(resolve_lower(BoundaryMode::Shrink, Some(0.0), 2.0), 2.0);
    }

    #[test]
    fn auto_and_fixed_take_the_candidate() {
        for mode in [BoundaryMode::Auto, BoundaryMode::Fixed] {
            assert_eq!(resolve_upper(mode, Some(10.0), 3.0), 3.0);
            assert_eq!(resolve_lower(mode, Some(0.0), 3.0), 3.0);
        }
    }

    #[test]
    fn failed_recompute_keeps_state() {
        let mut state = BoundsState::new();
        let mut constraints = PlotConstraints::default();
        let series = vec![crate::core::SimpleXySeries::from_y_values(&[1.0, 2.0]).into_shared()];
        let first = state
            .recompute(&constraints, &series, RectRegion::default())
            .expect("first frame");

        constraints.range.model = FramingModel::Origin;
        let err = state.recompute(&constraints, &series, RectRegion::default());
        assert!(matches!(err, Err(PlotError::MissingOrigin { axis: Axis::Range })));
        assert_eq!(state.calculated(), Some(first));
        assert_eq!(state.previous(), None);
    }
}
