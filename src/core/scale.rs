use serde::{Deserialize, Serialize};

use crate::core::framing::CalculatedBounds;
use crate::core::{Axis, DataPoint, Viewport};
use crate::error::{PlotError, PlotResult};

/// Half-width used to open up a zero-span axis for pixel mapping.
const DEGENERATE_HALF_SPAN: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> PlotResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(PlotError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Like [`LinearScale::new`] but widens a zero-span domain around its value.
    pub fn covering(domain_start: f64, domain_end: f64) -> PlotResult<Self> {
        if domain_start == domain_end {
            return Self::new(
                domain_start - DEGENERATE_HALF_SPAN,
                domain_end + DEGENERATE_HALF_SPAN,
            );
        }
        Self::new(domain_start, domain_end)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Position of `value` along the domain, `0.0` at the start and `1.0` at the end.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        (value - self.domain_start) / (self.domain_end - self.domain_start)
    }

    #[must_use]
    pub fn denormalize(self, ratio: f64) -> f64 {
        self.domain_start + ratio * (self.domain_end - self.domain_start)
    }
}

/// Pixel rectangle that holds the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    /// Insets the viewport by per-side margins.
    pub fn inset(
        viewport: Viewport,
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> PlotResult<Self> {
        let viewport = viewport.validate()?;
        let area = Self {
            left,
            top,
            right: f64::from(viewport.width) - right,
            bottom: f64::from(viewport.height) - bottom,
        };
        if !(area.width() > 0.0 && area.height() > 0.0) {
            return Err(PlotError::InvalidData(
                "plot margins leave no room for the grid".to_owned(),
            ));
        }
        Ok(area)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Affine data-to-pixel mapping for one frame. Y grows upward in data space
/// and downward in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMapping {
    x: LinearScale,
    y: LinearScale,
    area: PlotArea,
}

impl PlotMapping {
    pub fn from_bounds(bounds: &CalculatedBounds, area: PlotArea) -> PlotResult<Self> {
        Ok(Self {
            x: LinearScale::covering(bounds.min_x, bounds.max_x)?,
            y: LinearScale::covering(bounds.min_y, bounds.max_y)?,
            area,
        })
    }

    #[must_use]
    pub fn area(self) -> PlotArea {
        self.area
    }

    #[must_use]
    pub fn x_to_pixel(self, x: f64) -> f64 {
        self.area.left + self.x.normalize(x) * self.area.width()
    }

    #[must_use]
    pub fn y_to_pixel(self, y: f64) -> f64 {
        self.area.bottom - self.y.normalize(y) * self.area.height()
    }

    #[must_use]
    pub fn to_pixel(self, axis: Axis, value: f64) -> f64 {
        match axis {
            Axis::Domain => self.x_to_pixel(value),
            Axis::Range => self.y_to_pixel(value),
        }
    }

    /// Maps a sample to pixel space; `None` for gaps.
    #[must_use]
    pub fn point_to_pixel(self, point: DataPoint) -> Option<(f64, f64)> {
        point
            .is_finite()
            .then(|| (self.x_to_pixel(point.x), self.y_to_pixel(point.y)))
    }

    /// Inverse mapping; `None` outside the plot area.
    #[must_use]
    pub fn pixel_to_value(self, px: f64, py: f64) -> Option<DataPoint> {
        if !self.area.contains(px, py) {
            return None;
        }
        let x = self.x.denormalize((px - self.area.left) / self.area.width());
        let y = self.y.denormalize((self.area.bottom - py) / self.area.height());
        Some(DataPoint::new(x, y))
    }
}
