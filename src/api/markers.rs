use serde::{Deserialize, Serialize};

use crate::core::Axis;
use crate::render::Color;

/// Reference line drawn across the grid at a fixed data value.
///
/// A domain marker is a vertical line at an X value; a range marker is a
/// horizontal line at a Y value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueMarker {
    pub axis: Axis,
    pub value: f64,
    pub label: Option<String>,
    pub color: Color,
    pub stroke_width: f64,
}

impl ValueMarker {
    #[must_use]
    pub fn new(axis: Axis, value: f64) -> Self {
        Self {
            axis,
            value,
            label: None,
            color: Color::rgb(0.85, 0.20, 0.20),
            stroke_width: 1.0,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
