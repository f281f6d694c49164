//! xyplot: X/Y plotting with a stateful axis framing engine.
//!
//! Every draw pass computes plot bounds from the registered series and the
//! per-axis framing constraints (edge or origin framing, with fixed, auto,
//! grow and shrink boundary modes), then hands a backend-agnostic
//! [`render::RenderFrame`] to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{FrameSnapshot, PlotConfig, PlotHandle, PlotListener, XyPlot};
pub use error::{PlotError, PlotResult};
