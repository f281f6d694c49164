use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::core::candlestick::OhlcBar;

/// Read-only access to an ordered collection of X/Y samples.
///
/// Implementations are shared with the plot as `Arc<dyn XySeries>`; the plot
/// never copies or mutates them. `NaN` marks a gap and is skipped by bounds
/// scanning and projection.
pub trait XySeries: Send + Sync {
    fn title(&self) -> Option<&str> {
        None
    }

    fn len(&self) -> usize;

    fn x(&self, index: usize) -> f64;

    fn y(&self, index: usize) -> f64;

    /// Vertical extent covered by one sample. Defaults to the single `y` value;
    /// OHLC series report `(low, high)`.
    fn y_span(&self, index: usize) -> (f64, f64) {
        let y = self.y(index);
        (y, y)
    }

    /// Full OHLC sample, for series that carry one.
    fn ohlc(&self, index: usize) -> Option<OhlcBar> {
        let _ = index;
        None
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared series handle stored by the registry.
pub type SharedSeries = Arc<dyn XySeries>;

/// Returns whether two handles point at the same series instance.
#[must_use]
pub fn same_series(a: &SharedSeries, b: &SharedSeries) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Plain in-memory series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleXySeries {
    title: Option<String>,
    points: Vec<DataPoint>,
}

impl SimpleXySeries {
    #[must_use]
    pub fn from_points(points: Vec<DataPoint>) -> Self {
        Self {
            title: None,
            points,
        }
    }

    /// Pairs `xs[i]` with `ys[i]`; extra values on the longer side are dropped.
    #[must_use]
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Self {
        Self::from_points(
            xs.iter()
                .zip(ys)
                .map(|(&x, &y)| DataPoint::new(x, y))
                .collect(),
        )
    }

    /// Uses the sample index as the domain value.
    #[must_use]
    pub fn from_y_values(ys: &[f64]) -> Self {
        Self::from_points(
            ys.iter()
                .enumerate()
                .map(|(index, &y)| DataPoint::new(index as f64, y))
                .collect(),
        )
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn into_shared(self) -> SharedSeries {
        Arc::new(self)
    }
}

impl XySeries for SimpleXySeries {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn x(&self, index: usize) -> f64 {
        self.points.get(index).map_or(f64::NAN, |point| point.x)
    }

    fn y(&self, index: usize) -> f64 {
        self.points.get(index).map_or(f64::NAN, |point| point.y)
    }
}
