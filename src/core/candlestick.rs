use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::scale::PlotMapping;
use crate::core::series::{SharedSeries, XySeries};
use crate::core::types::{decimal_to_f64, unix_seconds};
use crate::error::{PlotError, PlotResult};

/// One OHLC sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    pub x: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OhlcBar {
    /// Builds a validated OHLC bar.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(x: f64, open: f64, high: f64, low: f64, close: f64) -> PlotResult<Self> {
        if !x.is_finite()
            || !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
        {
            return Err(PlotError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(PlotError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(PlotError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            x,
            open,
            high,
            low,
            close,
        })
    }

    /// Builds a bar from a timestamp (unix seconds on X) and decimal prices.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> PlotResult<Self> {
        Self::new(
            unix_seconds(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }
}

/// Series of OHLC bars. Exposes the close as `y` and `(low, high)` as the
/// vertical span, so bounds cover the wicks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OhlcSeries {
    title: Option<String>,
    bars: Vec<OhlcBar>,
}

impl OhlcSeries {
    #[must_use]
    pub fn new(bars: Vec<OhlcBar>) -> Self {
        Self { title: None, bars }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn bars(&self) -> &[OhlcBar] {
        &self.bars
    }

    #[must_use]
    pub fn into_shared(self) -> SharedSeries {
        Arc::new(self)
    }
}

impl XySeries for OhlcSeries {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn len(&self) -> usize {
        self.bars.len()
    }

    fn x(&self, index: usize) -> f64 {
        self.bars.get(index).map_or(f64::NAN, |bar| bar.x)
    }

    fn y(&self, index: usize) -> f64 {
        self.bars.get(index).map_or(f64::NAN, |bar| bar.close)
    }

    fn y_span(&self, index: usize) -> (f64, f64) {
        self.bars
            .get(index)
            .map_or((f64::NAN, f64::NAN), |bar| (bar.low, bar.high))
    }

    fn ohlc(&self, index: usize) -> Option<OhlcBar> {
        self.bars.get(index).copied()
    }
}

/// Projected candle geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub center_x: f64,
    pub body_left: f64,
    pub body_right: f64,
    pub body_top: f64,
    pub body_bottom: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub is_bullish: bool,
}

/// Projects OHLC candles into render geometry.
pub fn project_candles(
    bars: &[OhlcBar],
    mapping: PlotMapping,
    body_width_px: f64,
) -> PlotResult<Vec<CandleGeometry>> {
    if !body_width_px.is_finite() || body_width_px <= 0.0 {
        return Err(PlotError::InvalidData(
            "body width must be finite and > 0".to_owned(),
        ));
    }

    #[cfg(feature = "parallel-projection")]
    {
        Ok(bars
            .par_iter()
            .map(|bar| project_single_candle(*bar, mapping, body_width_px))
            .collect())
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        Ok(bars
            .iter()
            .map(|bar| project_single_candle(*bar, mapping, body_width_px))
            .collect())
    }
}

fn project_single_candle(
    bar: OhlcBar,
    mapping: PlotMapping,
    body_width_px: f64,
) -> CandleGeometry {
    let half = body_width_px / 2.0;
    let center_x = mapping.x_to_pixel(bar.x);
    let open_y = mapping.y_to_pixel(bar.open);
    let close_y = mapping.y_to_pixel(bar.close);

    CandleGeometry {
        center_x,
        body_left: center_x - half,
        body_right: center_x + half,
        body_top: open_y.min(close_y),
        body_bottom: open_y.max(close_y),
        wick_top: mapping.y_to_pixel(bar.high),
        wick_bottom: mapping.y_to_pixel(bar.low),
        is_bullish: bar.is_bullish(),
    }
}
