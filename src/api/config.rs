use serde::{Deserialize, Serialize};

use crate::core::{PlotConstraints, RectRegion, StepModel, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

use super::label_format::TickLabelPolicy;

/// Visual settings for grid, labels and origin lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    pub margin_left_px: f64,
    pub margin_top_px: f64,
    pub margin_right_px: f64,
    pub margin_bottom_px: f64,
    pub background_color: Option<Color>,
    pub grid_color: Color,
    pub grid_line_width: f64,
    pub show_domain_grid: bool,
    pub show_range_grid: bool,
    pub show_tick_labels: bool,
    pub label_color: Color,
    pub label_font_size_px: f64,
    pub label_policy: TickLabelPolicy,
    pub draw_domain_origin: bool,
    pub draw_range_origin: bool,
    pub origin_color: Color,
    pub origin_line_width: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            margin_left_px: 48.0,
            margin_top_px: 12.0,
            margin_right_px: 12.0,
            margin_bottom_px: 28.0,
            background_color: None,
            grid_color: Color::rgba(0.5, 0.5, 0.5, 0.35),
            grid_line_width: 1.0,
            show_domain_grid: true,
            show_range_grid: true,
            show_tick_labels: true,
            label_color: Color::rgb(0.2, 0.2, 0.2),
            label_font_size_px: 11.0,
            label_policy: TickLabelPolicy::Adaptive,
            draw_domain_origin: true,
            draw_range_origin: true,
            origin_color: Color::rgb(0.1, 0.1, 0.1),
            origin_line_width: 1.5,
        }
    }
}

impl PlotStyle {
    fn validate(&self) -> PlotResult<()> {
        for (name, value) in [
            ("margin_left_px", self.margin_left_px),
            ("margin_top_px", self.margin_top_px),
            ("margin_right_px", self.margin_right_px),
            ("margin_bottom_px", self.margin_bottom_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("grid_line_width", self.grid_line_width),
            ("label_font_size_px", self.label_font_size_px),
            ("origin_line_width", self.origin_line_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        self.grid_color.validate()?;
        self.label_color.validate()?;
        self.origin_color.validate()?;
        if let Some(color) = self.background_color {
            color.validate()?;
        }
        Ok(())
    }
}

/// Everything needed to construct an [`super::XyPlot`].
///
/// All fields have defaults, so a JSON document only needs the keys it
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub viewport: Viewport,
    pub default_bounds: RectRegion,
    pub domain_step: StepModel,
    pub range_step: StepModel,
    pub constraints: PlotConstraints,
    pub style: PlotStyle,
}

impl PlotConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_default_bounds(mut self, default_bounds: RectRegion) -> Self {
        self.default_bounds = default_bounds;
        self
    }

    #[must_use]
    pub fn with_domain_step(mut self, step: StepModel) -> Self {
        self.domain_step = step;
        self
    }

    #[must_use]
    pub fn with_range_step(mut self, step: StepModel) -> Self {
        self.range_step = step;
        self
    }

    #[must_use]
    pub fn with_constraints(mut self, constraints: PlotConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    pub fn from_json_str(json: &str) -> PlotResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> PlotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Re-checks invariants that deserialization cannot enforce.
    pub fn validate(&self) -> PlotResult<()> {
        self.viewport.validate()?;
        RectRegion::new(
            self.default_bounds.min_x,
            self.default_bounds.max_x,
            self.default_bounds.min_y,
            self.default_bounds.max_y,
        )?;
        StepModel::new(self.domain_step.mode(), self.domain_step.value())?;
        StepModel::new(self.range_step.mode(), self.range_step.value())?;
        self.style.validate()
    }
}
