use serde::{Deserialize, Serialize};

use crate::core::{RendererKind, SeriesFormatter};
use crate::render::Color;

/// Style for line-and-point series. A `None` color disables that layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineAndPointFormatter {
    pub line_color: Option<Color>,
    pub point_color: Option<Color>,
    pub line_width: f64,
    pub point_size: f64,
}

impl LineAndPointFormatter {
    #[must_use]
    pub fn new(line_color: Option<Color>, point_color: Option<Color>) -> Self {
        Self {
            line_color,
            point_color,
            ..Self::default()
        }
    }
}

impl Default for LineAndPointFormatter {
    fn default() -> Self {
        Self {
            line_color: Some(Color::rgb(0.12, 0.47, 0.71)),
            point_color: Some(Color::rgb(0.12, 0.47, 0.71)),
            line_width: 1.5,
            point_size: 4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarFormatter {
    pub fill: Color,
    pub bar_width_px: f64,
}

impl Default for BarFormatter {
    fn default() -> Self {
        Self {
            fill: Color::rgb(0.20, 0.63, 0.17),
            bar_width_px: 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandlestickFormatter {
    pub bullish: Color,
    pub bearish: Color,
    pub wick: Color,
    pub wick_width: f64,
    pub body_width_px: f64,
}

impl Default for CandlestickFormatter {
    fn default() -> Self {
        Self {
            bullish: Color::rgb(0.15, 0.65, 0.60),
            bearish: Color::rgb(0.94, 0.33, 0.31),
            wick: Color::rgb(0.35, 0.35, 0.35),
            wick_width: 1.0,
            body_width_px: 6.0,
        }
    }
}

/// Formatter attached to a series in the registry. The variant selects the
/// renderer that draws the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Formatter {
    LineAndPoint(LineAndPointFormatter),
    Bar(BarFormatter),
    Candlestick(CandlestickFormatter),
}

impl SeriesFormatter for Formatter {
    fn renderer_kind(&self) -> RendererKind {
        match self {
            Self::LineAndPoint(_) => RendererKind::LineAndPoint,
            Self::Bar(_) => RendererKind::Bar,
            Self::Candlestick(_) => RendererKind::Candlestick,
        }
    }
}

impl From<LineAndPointFormatter> for Formatter {
    fn from(value: LineAndPointFormatter) -> Self {
        Self::LineAndPoint(value)
    }
}

impl From<BarFormatter> for Formatter {
    fn from(value: BarFormatter) -> Self {
        Self::Bar(value)
    }
}

impl From<CandlestickFormatter> for Formatter {
    fn from(value: CandlestickFormatter) -> Self {
        Self::Candlestick(value)
    }
}
