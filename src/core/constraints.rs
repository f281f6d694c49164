use serde::{Deserialize, Serialize};

/// Strategy used to derive an axis's visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FramingModel {
    /// Each edge is resolved independently.
    #[default]
    Edge,
    /// Symmetric window centered on the axis origin.
    Origin,
}

/// Per-edge boundary policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoundaryMode {
    /// Use a user-supplied value.
    Fixed,
    /// Follow the data every frame.
    #[default]
    Auto,
    /// Only ever move outward relative to the previous frame.
    Grow,
    /// Only ever move inward relative to the previous frame.
    Shrink,
}

/// Resolution policy for one edge of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum EdgeConstraint {
    /// Never configured; behaves like `Auto`.
    #[default]
    Unset,
    Fixed(f64),
    Auto,
    Grow,
    Shrink,
}

impl EdgeConstraint {
    /// Builds an edge policy from a setter call. Only `Fixed` keeps the value.
    #[must_use]
    pub fn from_mode(value: f64, mode: BoundaryMode) -> Self {
        match mode {
            BoundaryMode::Fixed => Self::Fixed(value),
            BoundaryMode::Auto => Self::Auto,
            BoundaryMode::Grow => Self::Grow,
            BoundaryMode::Shrink => Self::Shrink,
        }
    }

    #[must_use]
    pub fn mode(self) -> BoundaryMode {
        match self {
            Self::Fixed(_) => BoundaryMode::Fixed,
            Self::Unset | Self::Auto => BoundaryMode::Auto,
            Self::Grow => BoundaryMode::Grow,
            Self::Shrink => BoundaryMode::Shrink,
        }
    }

    #[must_use]
    pub fn fixed_value(self) -> Option<f64> {
        match self {
            Self::Fixed(value) => Some(value),
            _ => None,
        }
    }
}

/// Secondary clip applied to a resolved edge after hysteresis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeClamp {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl EdgeClamp {
    /// Clips `value` into `[min, max]`; the max bound wins when both conflict.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        let mut value = value;
        if let Some(min) = self.min {
            if value <= min {
                value = min;
            }
        }
        if let Some(max) = self.max {
            if value >= max {
                value = max;
            }
        }
        value
    }
}

/// Settings of the last `center_on_*_origin` call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OriginFraming {
    pub mode: BoundaryMode,
    pub extent: Option<f64>,
}

/// Constraints for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConstraints {
    pub model: FramingModel,
    pub lower: EdgeConstraint,
    pub upper: EdgeConstraint,
    /// Domain "left" / range "bottom" clamp.
    pub lower_clamp: EdgeClamp,
    /// Domain "right" / range "top" clamp.
    pub upper_clamp: EdgeClamp,
    /// User origin; also the derived origin under EDGE framing when set.
    pub origin: Option<f64>,
    pub origin_framing: OriginFraming,
}

impl AxisConstraints {
    /// Explicit `(min, max)` values that replace the data scan for this axis.
    ///
    /// Under EDGE framing these are the fixed edges. Under ORIGIN framing only
    /// a fixed origin window (`origin ± extent`) overrides the scan.
    #[must_use]
    pub fn overrides(&self) -> (Option<f64>, Option<f64>) {
        match self.model {
            FramingModel::Edge => (self.lower.fixed_value(), self.upper.fixed_value()),
            FramingModel::Origin => match (
                self.origin_framing.mode,
                self.origin,
                self.origin_framing.extent,
            ) {
                (BoundaryMode::Fixed, Some(origin), Some(extent)) => {
                    (Some(origin - extent), Some(origin + extent))
                }
                _ => (None, None),
            },
        }
    }

    /// Applies an edge setter: the axis switches to EDGE framing.
    pub fn set_lower(&mut self, value: f64, mode: BoundaryMode) {
        self.lower = EdgeConstraint::from_mode(value, mode);
        self.model = FramingModel::Edge;
    }

    /// Applies an edge setter: the axis switches to EDGE framing.
    pub fn set_upper(&mut self, value: f64, mode: BoundaryMode) {
        self.upper = EdgeConstraint::from_mode(value, mode);
        self.model = FramingModel::Edge;
    }

    /// Switches to ORIGIN framing. Edge policies are reset so a later single
    /// edge setter never inherits a stale fixed edge.
    pub fn center_on_origin(&mut self, origin: f64, extent: Option<f64>, mode: BoundaryMode) {
        self.model = FramingModel::Origin;
        self.origin = Some(origin);
        self.origin_framing = OriginFraming { mode, extent };
        self.lower = EdgeConstraint::Unset;
        self.upper = EdgeConstraint::Unset;
    }
}

/// Domain and range constraints for a plot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConstraints {
    pub domain: AxisConstraints,
    pub range: AxisConstraints,
}

impl PlotConstraints {
    #[must_use]
    pub fn axis(&self, axis: crate::core::Axis) -> &AxisConstraints {
        match axis {
            crate::core::Axis::Domain => &self.domain,
            crate::core::Axis::Range => &self.range,
        }
    }

    pub fn axis_mut(&mut self, axis: crate::core::Axis) -> &mut AxisConstraints {
        match axis {
            crate::core::Axis::Domain => &mut self.domain,
            crate::core::Axis::Range => &mut self.range,
        }
    }
}
