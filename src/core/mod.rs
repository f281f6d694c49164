pub mod bar_series;
pub mod bounds;
pub mod candlestick;
pub mod constraints;
pub mod framing;
pub mod line_series;
pub mod registry;
pub mod scale;
pub mod series;
pub mod step;
pub mod types;

pub use bar_series::{BarGeometry, project_bars};
pub use bounds::{RawBounds, aggregate};
pub use candlestick::{CandleGeometry, OhlcBar, OhlcSeries, project_candles};
pub use constraints::{
    AxisConstraints, BoundaryMode, EdgeClamp, EdgeConstraint, FramingModel, OriginFraming,
    PlotConstraints,
};
pub use framing::{BoundsState, CalculatedBounds, frame_bounds};
pub use line_series::{LineSegment, project_line_segments, project_points};
pub use registry::{RendererKind, SeriesEntry, SeriesFormatter, SeriesRegistry};
pub use scale::{LinearScale, PlotArea, PlotMapping};
pub use series::{SharedSeries, SimpleXySeries, XySeries, same_series};
pub use step::{MAX_TICKS, StepMode, StepModel, TickIter, ticks};
pub use types::{Axis, DataPoint, RectRegion, Viewport};
