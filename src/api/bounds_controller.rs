use tracing::debug;

use crate::core::{
    Axis, BoundaryMode, CalculatedBounds, EdgeClamp, FramingModel, PlotConstraints, RectRegion,
    StepMode, StepModel,
};
use crate::error::{PlotError, PlotResult};

use super::{FrameSnapshot, PlotHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClampSide {
    Min,
    Max,
}

impl PlotHandle {
    /// Sets both domain edges with one mode and switches the domain to edge framing.
    pub fn set_domain_boundaries(
        &self,
        lower: f64,
        upper: f64,
        mode: BoundaryMode,
    ) -> PlotResult<()> {
        self.set_boundaries(Axis::Domain, lower, mode, upper, mode)
    }

    pub fn set_domain_boundaries_per_edge(
        &self,
        lower: f64,
        lower_mode: BoundaryMode,
        upper: f64,
        upper_mode: BoundaryMode,
    ) -> PlotResult<()> {
        self.set_boundaries(Axis::Domain, lower, lower_mode, upper, upper_mode)
    }

    pub fn set_domain_lower_boundary(&self, value: f64, mode: BoundaryMode) -> PlotResult<()> {
        self.set_edge(Axis::Domain, Edge::Lower, value, mode)
    }

    pub fn set_domain_upper_boundary(&self, value: f64, mode: BoundaryMode) -> PlotResult<()> {
        self.set_edge(Axis::Domain, Edge::Upper, value, mode)
    }

    /// Sets both range edges with one mode and switches the range to edge framing.
    pub fn set_range_boundaries(
        &self,
        lower: f64,
        upper: f64,
        mode: BoundaryMode,
    ) -> PlotResult<()> {
        self.set_boundaries(Axis::Range, lower, mode, upper, mode)
    }

    pub fn set_range_boundaries_per_edge(
        &self,
        lower: f64,
        lower_mode: BoundaryMode,
        upper: f64,
        upper_mode: BoundaryMode,
    ) -> PlotResult<()> {
        self.set_boundaries(Axis::Range, lower, lower_mode, upper, upper_mode)
    }

    pub fn set_range_lower_boundary(&self, value: f64, mode: BoundaryMode) -> PlotResult<()> {
        self.set_edge(Axis::Range, Edge::Lower, value, mode)
    }

    pub fn set_range_upper_boundary(&self, value: f64, mode: BoundaryMode) -> PlotResult<()> {
        self.set_edge(Axis::Range, Edge::Upper, value, mode)
    }

    /// Centers the domain on `origin`.
    ///
    /// `Fixed` requires an extent; the other modes derive it from the data
    /// every frame.
    pub fn center_on_domain_origin(
        &self,
        origin: f64,
        extent: Option<f64>,
        mode: BoundaryMode,
    ) -> PlotResult<()> {
        self.center_on_origin(Axis::Domain, origin, extent, mode)
    }

    /// Centers the range on `origin`. Only `Auto` is supported.
    pub fn center_on_range_origin(
        &self,
        origin: f64,
        extent: Option<f64>,
        mode: BoundaryMode,
    ) -> PlotResult<()> {
        if mode != BoundaryMode::Auto {
            return Err(PlotError::UnsupportedFraming {
                axis: Axis::Range,
                model: FramingModel::Origin,
                mode,
            });
        }
        self.center_on_origin(Axis::Range, origin, extent, mode)
    }

    /// Sets the reported domain origin without changing the framing model.
    pub fn set_user_domain_origin(&self, origin: f64) -> PlotResult<()> {
        self.set_user_origin(Axis::Domain, origin)
    }

    pub fn set_user_range_origin(&self, origin: f64) -> PlotResult<()> {
        self.set_user_origin(Axis::Range, origin)
    }

    pub fn set_domain_left_min(&self, value: Option<f64>) -> PlotResult<()> {
        self.set_clamp(Axis::Domain, Edge::Lower, ClampSide::Min, value)
    }

    pub fn set_domain_left_max(&self, value: Option<f64>) -> PlotResult<()> {
        self.set_clamp(Axis::Domain, Edge::Lower, ClampSide::Max, value)
    }

    pub fn set_domain_right_min(&self, value: Option<f64>) -> PlotResult<()> {
        self.set_clamp(Axis::Domain, Edge::Upper, ClampSide::Min, value)
    }

    pub fn set_domain_right_max(&self, value: Option<f64>) -> PlotResult<()> {
        self.set_clamp(Axis::Domain, Edge::Upper, ClampSide::Max, value)
    }

    pub fn set_range_bottom_min(&self, value: Option<f64>) -> PlotResult<()> {
        self.set_clamp(Axis::Range, Edge::Lower, ClampSide::Min, value)
    }

    pub fn set_range_bottom_max(&self, value: Option<f64>) -> PlotResult<()> {
        self.set_clamp(Axis::Range, Edge::Lower, ClampSide::Max, value)
    }

    pub fn set_range_top_min(&self, value: Option<f64>) -> PlotResult<()> {
        self.set_clamp(Axis::Range, Edge::Upper, ClampSide::Min, value)
    }

    pub fn set_range_top_max(&self, value: Option<f64>) -> PlotResult<()> {
        self.set_clamp(Axis::Range, Edge::Upper, ClampSide::Max, value)
    }

    pub fn set_domain_step(&self, mode: StepMode, value: f64) -> PlotResult<()> {
        let step = StepModel::new(mode, value)?;
        self.lock().domain_step = step;
        debug!(?mode, value, "set domain step");
        Ok(())
    }

    pub fn set_range_step(&self, mode: StepMode, value: f64) -> PlotResult<()> {
        let step = StepModel::new(mode, value)?;
        self.lock().range_step = step;
        debug!(?mode, value, "set range step");
        Ok(())
    }

    #[must_use]
    pub fn domain_step(&self) -> StepModel {
        self.lock().domain_step
    }

    #[must_use]
    pub fn range_step(&self) -> StepModel {
        self.lock().range_step
    }

    /// Bounds used for every edge the series cannot resolve.
    pub fn set_default_bounds(&self, bounds: RectRegion) -> PlotResult<()> {
        let bounds = RectRegion::new(bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y)?;
        self.lock().default_bounds = bounds;
        debug!(
            min_x = bounds.min_x,
            max_x = bounds.max_x,
            min_y = bounds.min_y,
            max_y = bounds.max_y,
            "set default bounds"
        );
        Ok(())
    }

    #[must_use]
    pub fn default_bounds(&self) -> RectRegion {
        self.lock().default_bounds
    }

    #[must_use]
    pub fn constraints(&self) -> PlotConstraints {
        self.lock().constraints
    }

    /// Replaces every framing constraint at once.
    pub fn set_constraints(&self, constraints: PlotConstraints) {
        self.lock().constraints = constraints;
        debug!("replace plot constraints");
    }

    /// Current bounds, or the default bounds before the first computation.
    #[must_use]
    pub fn calculated_bounds(&self) -> CalculatedBounds {
        let state = self.lock();
        state.bounds.resolved(state.default_bounds)
    }

    #[must_use]
    pub fn calculated_min_x(&self) -> f64 {
        self.calculated_bounds().min_x
    }

    #[must_use]
    pub fn calculated_max_x(&self) -> f64 {
        self.calculated_bounds().max_x
    }

    #[must_use]
    pub fn calculated_min_y(&self) -> f64 {
        self.calculated_bounds().min_y
    }

    #[must_use]
    pub fn calculated_max_y(&self) -> f64 {
        self.calculated_bounds().max_y
    }

    #[must_use]
    pub fn domain_origin(&self) -> f64 {
        self.calculated_bounds().domain_origin
    }

    #[must_use]
    pub fn range_origin(&self) -> f64 {
        self.calculated_bounds().range_origin
    }

    /// Bounds that were current before the last successful computation.
    #[must_use]
    pub fn previous_bounds(&self) -> Option<CalculatedBounds> {
        self.lock().bounds.previous()
    }

    /// Forgets bounds history so the next frame ignores Grow/Shrink.
    pub fn reset_bounds_history(&self) {
        self.lock().bounds.reset();
        debug!("reset bounds history");
    }

    /// Runs one bounds computation. On error the previous bounds are kept.
    pub fn calculate_min_max(&self) -> PlotResult<CalculatedBounds> {
        self.lock().recompute()
    }

    /// Computes bounds and captures everything a render pass needs under one lock.
    pub fn frame_snapshot(&self) -> PlotResult<FrameSnapshot> {
        let mut state = self.lock();
        let bounds = state.recompute()?;
        Ok(FrameSnapshot {
            bounds,
            domain_step: state.domain_step,
            range_step: state.range_step,
            entries: state.registry.iter().cloned().collect(),
            markers: state.markers.clone(),
        })
    }

    fn set_boundaries(
        &self,
        axis: Axis,
        lower: f64,
        lower_mode: BoundaryMode,
        upper: f64,
        upper_mode: BoundaryMode,
    ) -> PlotResult<()> {
        check_fixed_value(axis, Edge::Lower, lower, lower_mode)?;
        check_fixed_value(axis, Edge::Upper, upper, upper_mode)?;
        {
            let mut state = self.lock();
            let constraints = state.constraints.axis_mut(axis);
            constraints.set_lower(lower, lower_mode);
            constraints.set_upper(upper, upper_mode);
        }
        debug!(
            %axis,
            lower,
            ?lower_mode,
            upper,
            ?upper_mode,
            "set boundaries"
        );
        Ok(())
    }

    fn set_edge(&self, axis: Axis, edge: Edge, value: f64, mode: BoundaryMode) -> PlotResult<()> {
        check_fixed_value(axis, edge, value, mode)?;
        {
            let mut state = self.lock();
            let constraints = state.constraints.axis_mut(axis);
            match edge {
                Edge::Lower => constraints.set_lower(value, mode),
                Edge::Upper => constraints.set_upper(value, mode),
            }
        }
        debug!(%axis, ?edge, value, ?mode, "set boundary");
        Ok(())
    }

    fn center_on_origin(
        &self,
        axis: Axis,
        origin: f64,
        extent: Option<f64>,
        mode: BoundaryMode,
    ) -> PlotResult<()> {
        if !origin.is_finite() {
            return Err(PlotError::MissingOrigin { axis });
        }
        match extent {
            None if mode == BoundaryMode::Fixed => {
                return Err(PlotError::MissingOriginExtent { axis });
            }
            Some(extent) if !extent.is_finite() || extent < 0.0 => {
                return Err(PlotError::InvalidData(format!(
                    "{axis} origin extent must be finite and >= 0"
                )));
            }
            _ => {}
        }

        self.lock()
            .constraints
            .axis_mut(axis)
            .center_on_origin(origin, extent, mode);
        debug!(%axis, origin, ?extent, ?mode, "center on origin");
        Ok(())
    }

    fn set_user_origin(&self, axis: Axis, origin: f64) -> PlotResult<()> {
        if !origin.is_finite() {
            return Err(PlotError::InvalidData(format!(
                "{axis} origin must be finite"
            )));
        }
        self.lock().constraints.axis_mut(axis).origin = Some(origin);
        debug!(%axis, origin, "set user origin");
        Ok(())
    }

    fn set_clamp(
        &self,
        axis: Axis,
        edge: Edge,
        side: ClampSide,
        value: Option<f64>,
    ) -> PlotResult<()> {
        if value.is_some_and(|value| !value.is_finite()) {
            return Err(PlotError::InvalidData(format!(
                "{axis} {edge:?} {side:?} clamp must be finite"
            )));
        }
        {
            let mut state = self.lock();
            let constraints = state.constraints.axis_mut(axis);
            let clamp: &mut EdgeClamp = match edge {
                Edge::Lower => &mut constraints.lower_clamp,
                Edge::Upper => &mut constraints.upper_clamp,
            };
            match side {
                ClampSide::Min => clamp.min = value,
                ClampSide::Max => clamp.max = value,
            }
        }
        debug!(%axis, ?edge, ?side, ?value, "set boundary clamp");
        Ok(())
    }
}

/// Only a `Fixed` edge keeps its value, so only that value must be finite.
fn check_fixed_value(axis: Axis, edge: Edge, value: f64, mode: BoundaryMode) -> PlotResult<()> {
    if mode == BoundaryMode::Fixed && !value.is_finite() {
        return Err(PlotError::InvalidData(format!(
            "{axis} {edge:?} fixed boundary must be finite"
        )));
    }
    Ok(())
}
