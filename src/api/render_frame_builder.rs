use tracing::{trace, warn};

use crate::core::{Axis, PlotArea, PlotMapping, SeriesFormatter};
use crate::error::PlotResult;
use crate::render::{
    LinePrimitive, RectPrimitive, RenderFrame, Renderer, SeriesRenderContext, TextPrimitive,
};

use super::label_format::format_tick_label;
use super::{FrameSnapshot, XyPlot};

impl<R: Renderer> XyPlot<R> {
    /// Runs one full draw pass.
    ///
    /// Listeners see `on_before_draw` first. If bounds cannot be computed the
    /// pass stops there: nothing reaches the renderer and `on_after_draw` is
    /// skipped.
    pub fn render(&mut self) -> PlotResult<()> {
        for listener in &mut self.listeners {
            listener.on_before_draw(&self.handle);
        }

        let snapshot = match self.handle.frame_snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "aborting draw pass: bounds computation failed");
                return Err(err);
            }
        };

        let frame = self.build_render_frame(&snapshot)?;
        self.renderer.render(&frame)?;

        for listener in &mut self.listeners {
            listener.on_after_draw(&self.handle, &frame);
        }
        Ok(())
    }

    /// Materializes the frame for an already computed snapshot.
    pub fn build_render_frame(&self, snapshot: &FrameSnapshot) -> PlotResult<RenderFrame> {
        let area = self.plot_area()?;
        let mapping = PlotMapping::from_bounds(&snapshot.bounds, area)?;
        let mut frame = RenderFrame::new(self.viewport);

        if let Some(fill) = self.style.background_color {
            frame.push_rect(RectPrimitive::covering(area, fill));
        }

        self.append_grid(&mut frame, snapshot, mapping, area);
        self.append_origin_lines(&mut frame, snapshot, mapping, area);
        self.append_series(&mut frame, snapshot, mapping)?;
        self.append_markers(&mut frame, snapshot, mapping, area);

        trace!(
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "built render frame"
        );
        Ok(frame)
    }

    fn append_grid(
        &self,
        frame: &mut RenderFrame,
        snapshot: &FrameSnapshot,
        mapping: PlotMapping,
        area: PlotArea,
    ) {
        let style = self.style;
        for axis in [Axis::Domain, Axis::Range] {
            let show_grid = match axis {
                Axis::Domain => style.show_domain_grid,
                Axis::Range => style.show_range_grid,
            };
            if !show_grid && !style.show_tick_labels {
                continue;
            }

            let ticks: Vec<f64> = snapshot.axis_ticks(axis).collect();
            let step_abs = tick_spacing(&ticks, snapshot.step(axis).value());
            for value in ticks {
                let pixel = mapping.to_pixel(axis, value);
                if show_grid {
                    frame.push_line(LinePrimitive::across(
                        axis,
                        pixel,
                        area,
                        style.grid_line_width,
                        style.grid_color,
                    ));
                }
                if style.show_tick_labels {
                    frame.push_text(TextPrimitive::tick_label(
                        axis,
                        format_tick_label(value, step_abs, style.label_policy),
                        pixel,
                        area,
                        style.label_font_size_px,
                        style.label_color,
                    ));
                }
            }
        }
    }

    fn append_origin_lines(
        &self,
        frame: &mut RenderFrame,
        snapshot: &FrameSnapshot,
        mapping: PlotMapping,
        area: PlotArea,
    ) {
        let style = self.style;
        let bounds = snapshot.bounds;
        for (axis, enabled) in [
            (Axis::Domain, style.draw_domain_origin),
            (Axis::Range, style.draw_range_origin),
        ] {
            let origin = bounds.origin(axis);
            if enabled && within(bounds.axis(axis), origin) {
                frame.push_line(LinePrimitive::across(
                    axis,
                    mapping.to_pixel(axis, origin),
                    area,
                    style.origin_line_width,
                    style.origin_color,
                ));
            }
        }
    }

    fn append_series(
        &self,
        frame: &mut RenderFrame,
        snapshot: &FrameSnapshot,
        mapping: PlotMapping,
    ) -> PlotResult<()> {
        let context = SeriesRenderContext {
            mapping,
            bounds: snapshot.bounds,
        };

        for (kind, renderer) in &self.renderers {
            for entry in snapshot
                .entries
                .iter()
                .filter(|entry| entry.formatter.renderer_kind() == *kind)
            {
                renderer.render_series(entry.series.as_ref(), &entry.formatter, context, frame)?;
            }
        }

        for entry in &snapshot.entries {
            let kind = entry.formatter.renderer_kind();
            if !self.renderers.contains_key(&kind) {
                warn!(
                    ?kind,
                    title = entry.series.title().unwrap_or_default(),
                    "no renderer installed for series"
                );
            }
        }
        Ok(())
    }

    fn append_markers(
        &self,
        frame: &mut RenderFrame,
        snapshot: &FrameSnapshot,
        mapping: PlotMapping,
        area: PlotArea,
    ) {
        let bounds = snapshot.bounds;
        for marker in &snapshot.markers {
            if !within(bounds.axis(marker.axis), marker.value) {
                continue;
            }
            let pixel = mapping.to_pixel(marker.axis, marker.value);
            frame.push_line(LinePrimitive::across(
                marker.axis,
                pixel,
                area,
                marker.stroke_width,
                marker.color,
            ));

            if let Some(label) = marker.label.as_deref().filter(|label| !label.is_empty()) {
                frame.push_text(TextPrimitive::marker_label(
                    marker.axis,
                    label,
                    pixel,
                    area,
                    self.style.label_font_size_px,
                    marker.color,
                ));
            }
        }
    }
}

fn within((min, max): (f64, f64), value: f64) -> bool {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    value >= low && value <= high
}

/// Distance between adjacent ticks, used to pick label precision.
fn tick_spacing(ticks: &[f64], fallback: f64) -> f64 {
    match ticks {
        [first, second, ..] => (second - first).abs(),
        _ => fallback.abs(),
    }
}
