use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PlotError, PlotResult};

/// Upper bound on ticks produced for one axis in one frame.
pub const MAX_TICKS: usize = 4096;

/// How tick spacing is derived from the axis bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StepMode {
    /// Split the axis into `value` equal intervals.
    #[default]
    Subdivide,
    /// Place a tick every `value` data units.
    IncrementByVal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepModel {
    mode: StepMode,
    value: f64,
}

impl Default for StepModel {
    fn default() -> Self {
        Self {
            mode: StepMode::Subdivide,
            value: 10.0,
        }
    }
}

impl StepModel {
    pub fn new(mode: StepMode, value: f64) -> PlotResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(PlotError::InvalidData(
                "step value must be finite and > 0".to_owned(),
            ));
        }
        if mode == StepMode::Subdivide && value.fract() != 0.0 {
            return Err(PlotError::InvalidData(
                "subdivide step value must be a whole interval count".to_owned(),
            ));
        }
        Ok(Self { mode, value })
    }

    #[must_use]
    pub fn mode(self) -> StepMode {
        self.mode
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }
}

/// Lazy, finite tick sequence for one axis.
///
/// Values are computed as `start + index * step` so no error accumulates
/// across the sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct TickIter {
    start: f64,
    step: f64,
    index: usize,
    count: usize,
}

impl TickIter {
    fn empty() -> Self {
        Self {
            start: 0.0,
            step: 0.0,
            index: 0,
            count: 0,
        }
    }

    fn single(value: f64) -> Self {
        Self {
            start: value,
            step: 0.0,
            index: 0,
            count: 1,
        }
    }
}

impl Iterator for TickIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.count {
            return None;
        }
        let value = self.start + self.step * self.index as f64;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TickIter {}

/// Produces tick positions for `[min, max]`.
///
/// - `Subdivide` with `N` intervals yields the `N - 1` interior boundaries:
///   `ticks(0, 100, Subdivide 10)` is `10, 20, ..., 90`.
/// - `IncrementByVal` yields every multiple of the step measured from
///   `reference` (normally the axis origin) that lies inside `[min, max]`,
///   endpoints included.
/// - `min == max` yields a single tick at that value.
///
/// Reversed bounds are normalized; non-finite bounds, or a span too wide to
/// represent, yield no ticks. At most [`MAX_TICKS`] values are produced.
#[must_use]
pub fn ticks(min: f64, max: f64, model: StepModel, reference: f64) -> TickIter {
    if !min.is_finite() || !max.is_finite() {
        warn!(min, max, "skipping ticks for non-finite bounds");
        return TickIter::empty();
    }
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    if min == max {
        return TickIter::single(min);
    }

    let span = max - min;
    if !span.is_finite() {
        warn!(min, max, "skipping ticks for a span that overflows f64");
        return TickIter::empty();
    }

    match model.mode {
        StepMode::Subdivide => {
            let step = span / model.value;
            TickIter {
                start: min + step,
                step,
                index: 0,
                count: cap_count(model.value - 1.0),
            }
        }
        StepMode::IncrementByVal => {
            let step = model.value;
            // Anchor on the first multiple at or above `min` so a far-away
            // reference does not cost precision in the index arithmetic.
            let anchor = if reference.is_finite() {
                min + (reference - min).rem_euclid(step)
            } else {
                min
            };
            // Tolerance keeps endpoints that sit on a multiple despite rounding.
            let epsilon = step * 1e-9;
            let first_index = ((min - anchor - epsilon) / step).ceil();
            let last_index = ((max - anchor + epsilon) / step).floor();
            if last_index < first_index {
                return TickIter::empty();
            }
            TickIter {
                start: anchor + first_index * step,
                step,
                index: 0,
                count: cap_count(last_index - first_index + 1.0),
            }
        }
    }
}

/// Converts a tick count computed in floating point, capped at [`MAX_TICKS`].
fn cap_count(count: f64) -> usize {
    if count > MAX_TICKS as f64 {
        warn!(requested = count, max = MAX_TICKS, "truncating tick sequence");
        MAX_TICKS
    } else if count >= 1.0 {
        count as usize
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subdivide_yields_interior_boundaries() {
        let model = StepModel::new(StepMode::Subdivide, 10.0).expect("step");
        let values: Vec<f64> = ticks(0.0, 100.0, model, 0.0).collect();
        assert_eq!(
            values,
            vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0]
        );
    }

    #[test]
    fn degenerate_range_yields_single_tick() {
        let model = StepModel::new(StepMode::Subdivide, 4.0).expect("step");
        let values: Vec<f64> = ticks(7.0, 7.0, model, 0.0).collect();
        assert_eq!(values, vec![7.0]);

        let model = StepModel::new(StepMode::IncrementByVal, 0.5).expect("step");
        assert_eq!(ticks(3.0, 3.0, model, 0.0).len(), 1);
    }

    #[test]
    fn increment_is_anchored_on_reference() {
        let model = StepModel::new(StepMode::IncrementByVal, 20.0).expect("step");
        let values: Vec<f64> = ticks(40.0, 160.0, model, 0.0).collect();
        assert_eq!(values, vec![40.0, 60.0, 80.0, 100.0, 120.0, 140.0, 160.0]);

        let model = StepModel::new(StepMode::IncrementByVal, 5.0).expect("step");
        let values: Vec<f64> = ticks(-7.0, 12.0, model, 1.0).collect();
        assert_eq!(values, vec![-4.0, 1.0, 6.0, 11.0]);
    }

    #[test]
    fn invalid_step_values_are_rejected() {
        assert!(StepModel::new(StepMode::IncrementByVal, 0.0).is_err());
        assert!(StepModel::new(StepMode::IncrementByVal, f64::NAN).is_err());
        assert!(StepModel::new(StepMode::Subdivide, 2.5).is_err());
    }

    #[test]
    fn huge_sequences_are_capped() {
        let model = StepModel::new(StepMode::IncrementByVal, 1e-6).expect("step");
        assert_eq!(ticks(0.0, 1_000.0, model, 0.0).len(), MAX_TICKS);
    }

    #[test]
    fn counts_beyond_usize_are_capped() {
        let model = StepModel::new(StepMode::IncrementByVal, 1e-10).expect("step");
        let values: Vec<f64> = ticks(0.0, 1e20, model, 0.0).collect();
        assert_eq!(values.len(), MAX_TICKS);
        assert_eq!(values[0], 0.0);

        let model = StepModel::new(StepMode::Subdivide, 1e30).expect("step");
        assert_eq!(ticks(0.0, 1.0, model, 0.0).len(), MAX_TICKS);
    }

    #[test]
    fn overflowing_span_yields_no_ticks() {
        assert_eq!(ticks(-f64::MAX, f64::MAX, StepModel::default(), 0.0).len(), 0);
    }
}
