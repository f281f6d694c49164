use indexmap::IndexMap;

use crate::core::{
    CalculatedBounds, OhlcBar, PlotMapping, RendererKind, XySeries, project_bars,
    project_candles, project_line_segments, project_points,
};
use crate::error::{PlotError, PlotResult};
use crate::render::{
    BarFormatter, CandlestickFormatter, Formatter, LineAndPointFormatter, LinePrimitive,
    RectPrimitive, RenderFrame,
};

/// Per-frame inputs shared by every series renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRenderContext {
    pub mapping: PlotMapping,
    pub bounds: CalculatedBounds,
}

/// Draws one family of series into a frame.
pub trait SeriesRenderer: Send + Sync {
    fn kind(&self) -> RendererKind;

    fn render_series(
        &self,
        series: &dyn XySeries,
        formatter: &Formatter,
        context: SeriesRenderContext,
        frame: &mut RenderFrame,
    ) -> PlotResult<()>;
}

/// Renderers keyed by the kind their formatters declare, in draw order.
pub type RendererTable = IndexMap<RendererKind, Box<dyn SeriesRenderer>>;

/// Table holding the built-in renderers.
#[must_use]
pub fn default_renderers() -> RendererTable {
    let mut table: RendererTable = IndexMap::new();
    for renderer in [
        Box::new(BarRenderer) as Box<dyn SeriesRenderer>,
        Box::new(CandlestickRenderer),
        Box::new(LineAndPointRenderer),
    ] {
        table.insert(renderer.kind(), renderer);
    }
    table
}

fn formatter_mismatch(expected: RendererKind) -> PlotError {
    PlotError::InvalidData(format!("{expected:?} renderer received a foreign formatter"))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LineAndPointRenderer;

impl SeriesRenderer for LineAndPointRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::LineAndPoint
    }

    fn render_series(
        &self,
        series: &dyn XySeries,
        formatter: &Formatter,
        context: SeriesRenderContext,
        frame: &mut RenderFrame,
    ) -> PlotResult<()> {
        let Formatter::LineAndPoint(LineAndPointFormatter {
            line_color,
            point_color,
            line_width,
            point_size,
        }) = *formatter
        else {
            return Err(formatter_mismatch(self.kind()));
        };

        if let Some(color) = line_color {
            for segment in project_line_segments(series, context.mapping) {
                frame.push_line(LinePrimitive::new(
                    segment.x1, segment.y1, segment.x2, segment.y2, line_width, color,
                ));
            }
        }
        if let Some(color) = point_color {
            for (x, y) in project_points(series, context.mapping) {
                frame.push_rect(RectPrimitive::centered(x, y, point_size, color));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BarRenderer;

impl SeriesRenderer for BarRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Bar
    }

    fn render_series(
        &self,
        series: &dyn XySeries,
        formatter: &Formatter,
        context: SeriesRenderContext,
        frame: &mut RenderFrame,
    ) -> PlotResult<()> {
        let Formatter::Bar(BarFormatter { fill, bar_width_px }) = *formatter else {
            return Err(formatter_mismatch(self.kind()));
        };

        for bar in project_bars(
            series,
            context.mapping,
            context.bounds.range_origin,
            bar_width_px,
        )? {
            frame.push_rect(RectPrimitive::new(
                bar.left, bar.top, bar.right, bar.bottom, fill,
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CandlestickRenderer;

impl SeriesRenderer for CandlestickRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Candlestick
    }

    fn render_series(
        &self,
        series: &dyn XySeries,
        formatter: &Formatter,
        context: SeriesRenderContext,
        frame: &mut RenderFrame,
    ) -> PlotResult<()> {
        let Formatter::Candlestick(CandlestickFormatter {
            bullish,
            bearish,
            wick,
            wick_width,
            body_width_px,
        }) = *formatter
        else {
            return Err(formatter_mismatch(self.kind()));
        };

        let bars: Vec<OhlcBar> = (0..series.len())
            .filter_map(|index| series.ohlc(index))
            .collect();
        for candle in project_candles(&bars, context.mapping, body_width_px)? {
            frame.push_line(LinePrimitive::new(
                candle.center_x,
                candle.wick_top,
                candle.center_x,
                candle.wick_bottom,
                wick_width,
                wick,
            ));
            let fill = if candle.is_bullish { bullish } else { bearish };
            frame.push_rect(RectPrimitive::new(
                candle.body_left,
                candle.body_top,
                candle.body_right,
                candle.body_bottom,
                fill,
            ));
        }
        Ok(())
    }
}
