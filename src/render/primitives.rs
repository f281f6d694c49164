use serde::{Deserialize, Serialize};

use crate::core::{Axis, PlotArea};
use crate::error::{PlotError, PlotResult};

/// Pixel gap between a tick or marker line and its label.
const LABEL_GAP_PX: f64 = 4.0;

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> PlotResult<()> {
        let channels = [self.red, self.green, self.blue, self.alpha];
        if channels.iter().any(|value| !(0.0..=1.0).contains(value)) {
            return Err(PlotError::InvalidData(format!(
                "color channels must be in [0, 1], got {channels:?}"
            )));
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    /// Rule spanning the whole plot area at `pixel` along `axis`.
    ///
    /// A domain rule is vertical at `x = pixel`, a range rule horizontal at
    /// `y = pixel`. Grid lines, origin lines and value markers all use this.
    #[must_use]
    pub const fn across(
        axis: Axis,
        pixel: f64,
        area: PlotArea,
        stroke_width: f64,
        color: Color,
    ) -> Self {
        match axis {
            Axis::Domain => Self::new(pixel, area.top, pixel, area.bottom, stroke_width, color),
            Axis::Range => Self::new(area.left, pixel, area.right, pixel, stroke_width, color),
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        ensure_finite("line", &[self.x1, self.y1, self.x2, self.y2])?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "line stroke width must be finite and > 0, got {}",
                self.stroke_width
            )));
        }
        self.color.validate()
    }
}

/// Filled axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub fill: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64, fill: Color) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            fill,
        }
    }

    /// Background fill for the grid area.
    #[must_use]
    pub const fn covering(area: PlotArea, fill: Color) -> Self {
        Self::new(area.left, area.top, area.right, area.bottom, fill)
    }

    /// Square centered on a point, used for point markers.
    #[must_use]
    pub fn centered(x: f64, y: f64, size: f64, fill: Color) -> Self {
        let half = size / 2.0;
        Self::new(x - half, y - half, x + half, y + half, fill)
    }

    pub fn validate(self) -> PlotResult<()> {
        ensure_finite("rect", &[self.left, self.top, self.right, self.bottom])?;
        if self.left > self.right || self.top > self.bottom {
            return Err(PlotError::InvalidData(
                "rect edges must be ordered".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    /// Tick label outside the plot area: centered below it for the domain,
    /// right-aligned to its left for the range.
    #[must_use]
    pub fn tick_label(
        axis: Axis,
        text: impl Into<String>,
        pixel: f64,
        area: PlotArea,
        font_size_px: f64,
        color: Color,
    ) -> Self {
        match axis {
            Axis::Domain => Self::new(
                text,
                pixel,
                area.bottom + LABEL_GAP_PX + font_size_px,
                font_size_px,
                color,
                TextHAlign::Center,
            ),
            Axis::Range => Self::new(
                text,
                area.left - LABEL_GAP_PX,
                pixel + font_size_px / 3.0,
                font_size_px,
                color,
                TextHAlign::Right,
            ),
        }
    }

    /// Marker label inside the plot area, next to the marker rule.
    #[must_use]
    pub fn marker_label(
        axis: Axis,
        text: impl Into<String>,
        pixel: f64,
        area: PlotArea,
        font_size_px: f64,
        color: Color,
    ) -> Self {
        let (x, y) = match axis {
            Axis::Domain => (pixel + LABEL_GAP_PX, area.top + font_size_px),
            Axis::Range => (area.left + LABEL_GAP_PX, pixel - LABEL_GAP_PX),
        };
        Self::new(text, x, y, font_size_px, color, TextHAlign::Left)
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.text.is_empty() {
            return Err(PlotError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite("text", &[self.x, self.y])?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "font size must be finite and > 0, got {}",
                self.font_size_px
            )));
        }
        self.color.validate()
    }
}

fn ensure_finite(kind: &str, coordinates: &[f64]) -> PlotResult<()> {
    if coordinates.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(PlotError::InvalidData(format!(
            "{kind} coordinates must be finite, got {coordinates:?}"
        )))
    }
}
