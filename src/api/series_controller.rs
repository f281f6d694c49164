use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Axis, RendererKind, SeriesFormatter, SharedSeries};
use crate::render::Formatter;

use super::{PlotHandle, ValueMarker};

impl PlotHandle {
    /// Registers a series with a formatter.
    ///
    /// Returns `false` when the series is already registered for the
    /// formatter's renderer kind.
    pub fn add_series(&self, series: SharedSeries, formatter: impl Into<Formatter>) -> bool {
        let formatter = formatter.into();
        let kind = formatter.renderer_kind();
        let title = series.title().unwrap_or_default().to_owned();
        let added = self.lock().registry.add(series, formatter);
        debug!(?kind, title = %title, added, "add series");
        added
    }

    /// Removes `series` from every renderer kind.
    pub fn remove_series(&self, series: &SharedSeries) -> usize {
        let removed = self.lock().registry.remove_all(series);
        debug!(removed, "remove series");
        removed
    }

    pub fn remove_series_for(&self, series: &SharedSeries, kind: RendererKind) -> bool {
        let removed = self.lock().registry.remove(series, kind).is_some();
        debug!(?kind, removed, "remove series for renderer");
        removed
    }

    pub fn clear_series(&self) {
        self.lock().registry.clear();
        debug!("clear series");
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.lock().registry.len()
    }

    #[must_use]
    pub fn formatter_for(&self, series: &SharedSeries, kind: RendererKind) -> Option<Formatter> {
        self.lock().registry.formatter_for(series, kind).copied()
    }

    #[must_use]
    pub fn renderer_kinds(&self) -> SmallVec<[RendererKind; 3]> {
        self.lock().registry.renderer_kinds()
    }

    /// Adds a marker. An identical marker is not added twice.
    pub fn add_marker(&self, marker: ValueMarker) -> bool {
        let mut state = self.lock();
        if state.markers.contains(&marker) {
            return false;
        }
        debug!(axis = %marker.axis, value = marker.value, "add marker");
        state.markers.push(marker);
        true
    }

    pub fn remove_marker(&self, marker: &ValueMarker) -> bool {
        let mut state = self.lock();
        let before = state.markers.len();
        state.markers.retain(|known| known != marker);
        before != state.markers.len()
    }

    /// Removes all markers on `axis`, or on both axes when `None`.
    pub fn remove_markers(&self, axis: Option<Axis>) -> usize {
        let mut state = self.lock();
        let before = state.markers.len();
        state
            .markers
            .retain(|marker| axis.is_some_and(|axis| marker.axis != axis));
        let removed = before - state.markers.len();
        debug!(?axis, removed, "remove markers");
        removed
    }

    #[must_use]
    pub fn markers(&self) -> Vec<ValueMarker> {
        self.lock().markers.clone()
    }
}
