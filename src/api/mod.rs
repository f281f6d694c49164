mod bounds_controller;
mod config;
mod label_format;
mod listener;
mod markers;
mod render_frame_builder;
mod series_controller;

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use tracing::debug;

use crate::core::{
    Axis, BoundsState, CalculatedBounds, DataPoint, PlotArea, PlotConstraints, PlotMapping,
    RectRegion, SeriesEntry, SeriesRegistry, StepModel, TickIter, Viewport, ticks,
};
use crate::error::PlotResult;
use crate::render::{Formatter, Renderer, RendererTable, SeriesRenderer, default_renderers};

pub use config::{PlotConfig, PlotStyle};
pub use label_format::TickLabelPolicy;
pub use listener::PlotListener;
pub use markers::ValueMarker;

/// Mutable plot configuration and frame-to-frame bounds history.
///
/// Everything here is guarded by one mutex so a configuration change can
/// never interleave with a bounds computation.
#[derive(Debug)]
struct PlotState {
    constraints: PlotConstraints,
    bounds: BoundsState,
    default_bounds: RectRegion,
    domain_step: StepModel,
    range_step: StepModel,
    registry: SeriesRegistry<Formatter>,
    markers: Vec<ValueMarker>,
}

impl PlotState {
    fn from_config(config: &PlotConfig) -> Self {
        Self {
            constraints: config.constraints,
            bounds: BoundsState::new(),
            default_bounds: config.default_bounds,
            domain_step: config.domain_step,
            range_step: config.range_step,
            registry: SeriesRegistry::new(),
            markers: Vec::new(),
        }
    }

    fn recompute(&mut self) -> PlotResult<CalculatedBounds> {
        let series = self.registry.series_snapshot();
        self.bounds
            .recompute(&self.constraints, &series, self.default_bounds)
    }
}

/// Cloneable, thread-safe handle to a plot's configuration and bounds.
///
/// Every method takes the plot lock for its whole duration.
#[derive(Debug, Clone)]
pub struct PlotHandle {
    state: Arc<Mutex<PlotState>>,
}

impl PlotHandle {
    fn new(state: PlotState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PlotState> {
        self.state.lock()
    }
}

/// Immutable result of one bounds computation, safe to hand to another thread.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub bounds: CalculatedBounds,
    pub domain_step: StepModel,
    pub range_step: StepModel,
    pub entries: Vec<SeriesEntry<Formatter>>,
    pub markers: Vec<ValueMarker>,
}

impl FrameSnapshot {
    /// Domain tick positions, anchored on the domain origin.
    #[must_use]
    pub fn domain_ticks(&self) -> TickIter {
        self.axis_ticks(Axis::Domain)
    }

    /// Range tick positions, anchored on the range origin.
    #[must_use]
    pub fn range_ticks(&self) -> TickIter {
        self.axis_ticks(Axis::Range)
    }

    #[must_use]
    pub fn step(&self, axis: Axis) -> StepModel {
        match axis {
            Axis::Domain => self.domain_step,
            Axis::Range => self.range_step,
        }
    }

    #[must_use]
    pub fn axis_ticks(&self, axis: Axis) -> TickIter {
        let (min, max) = self.bounds.axis(axis);
        ticks(min, max, self.step(axis), self.bounds.origin(axis))
    }
}

/// Render orchestrator: owns the renderer, listeners and the series renderer
/// table, and drives one bounds computation per frame.
pub struct XyPlot<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    style: PlotStyle,
    handle: PlotHandle,
    renderers: RendererTable,
    listeners: Vec<Box<dyn PlotListener>>,
}

impl<R: Renderer> XyPlot<R> {
    pub fn new(renderer: R, config: PlotConfig) -> PlotResult<Self> {
        config.validate()?;

        Ok(Self {
            renderer,
            viewport: config.viewport,
            style: config.style,
            handle: PlotHandle::new(PlotState::from_config(&config)),
            renderers: default_renderers(),
            listeners: Vec::new(),
        })
    }

    /// Shared handle for configuration, series and bounds access.
    #[must_use]
    pub fn handle(&self) -> &PlotHandle {
        &self.handle
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> PlotResult<()> {
        self.viewport = viewport.validate()?;
        debug!(width = viewport.width, height = viewport.height, "set viewport");
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> PlotStyle {
        self.style
    }

    pub fn set_style(&mut self, style: PlotStyle) {
        self.style = style;
    }

    pub fn add_listener(&mut self, listener: Box<dyn PlotListener>) {
        self.listeners.push(listener);
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Installs a renderer for its kind, replacing any previous one.
    pub fn register_renderer(&mut self, renderer: Box<dyn SeriesRenderer>) {
        let kind = renderer.kind();
        debug!(?kind, "register series renderer");
        self.renderers.insert(kind, renderer);
    }

    /// Runs one bounds computation outside of a render pass.
    pub fn calculate_min_max(&self) -> PlotResult<CalculatedBounds> {
        self.handle.calculate_min_max()
    }

    /// Grid rectangle inside the viewport margins.
    pub fn plot_area(&self) -> PlotResult<PlotArea> {
        PlotArea::inset(
            self.viewport,
            self.style.margin_left_px,
            self.style.margin_top_px,
            self.style.margin_right_px,
            self.style.margin_bottom_px,
        )
    }

    /// Returns whether a pixel lies inside the grid.
    #[must_use]
    pub fn contains_pixel(&self, x: f64, y: f64) -> bool {
        self.plot_area().is_ok_and(|area| area.contains(x, y))
    }

    /// Data value under a pixel, using the current calculated bounds.
    #[must_use]
    pub fn value_at(&self, x: f64, y: f64) -> Option<DataPoint> {
        let area = self.plot_area().ok()?;
        let bounds = self.handle.calculated_bounds();
        PlotMapping::from_bounds(&bounds, area)
            .ok()?
            .pixel_to_value(x, y)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
