mod formatter;
mod frame;
mod null_renderer;
mod primitives;
mod series_renderer;

pub use formatter::{BarFormatter, CandlestickFormatter, Formatter, LineAndPointFormatter};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};
pub use series_renderer::{
    BarRenderer, CandlestickRenderer, LineAndPointRenderer, RendererTable, SeriesRenderContext,
    SeriesRenderer, default_renderers,
};

use crate::error::PlotResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from bounds computation and series bookkeeping.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}
