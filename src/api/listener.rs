use crate::render::RenderFrame;

use super::PlotHandle;

/// Observer notified around every render pass.
///
/// `on_before_draw` runs before bounds are computed, so a listener that feeds
/// a series can publish new samples for the frame about to be drawn.
/// `on_after_draw` only runs for passes that reached the renderer.
pub trait PlotListener: Send {
    fn on_before_draw(&mut self, plot: &PlotHandle) {
        let _ = plot;
    }

    fn on_after_draw(&mut self, plot: &PlotHandle, frame: &RenderFrame) {
        let _ = (plot, frame);
    }
}
