use thiserror::Error;

use crate::core::{Axis, BoundaryMode, FramingModel};

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The framing model does not support the requested boundary mode.
    #[error("unsupported {axis} framing: {model:?} model with {mode:?} boundary mode")]
    UnsupportedFraming {
        axis: Axis,
        model: FramingModel,
        mode: BoundaryMode,
    },

    /// Origin framing was requested for an axis with no origin set.
    #[error("{axis} axis uses origin framing but no origin is set")]
    MissingOrigin { axis: Axis },

    #[error("{axis} axis uses fixed origin framing but no extent is set")]
    MissingOriginExtent { axis: Axis },

    #[error("invalid plot config: {0}")]
    Config(#[from] serde_json::Error),
}
