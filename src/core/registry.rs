use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::series::{SharedSeries, same_series};

/// Renderer family a formatter draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RendererKind {
    LineAndPoint,
    Bar,
    Candlestick,
}

/// Capability implemented by every formatter stored in a [`SeriesRegistry`].
pub trait SeriesFormatter {
    fn renderer_kind(&self) -> RendererKind;
}

/// One registered `(series, formatter)` pair.
#[derive(Clone)]
pub struct SeriesEntry<F> {
    pub series: SharedSeries,
    pub formatter: F,
}

impl<F: std::fmt::Debug> std::fmt::Debug for SeriesEntry<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeriesEntry")
            .field("title", &self.series.title())
            .field("len", &self.series.len())
            .field("formatter", &self.formatter)
            .finish()
    }
}

/// Ordered collection of `(series, formatter)` pairs.
///
/// A series may be registered once per renderer kind. Registration order is
/// draw order.
#[derive(Debug, Clone)]
pub struct SeriesRegistry<F> {
    entries: Vec<SeriesEntry<F>>,
}

impl<F> Default for SeriesRegistry<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F: SeriesFormatter> SeriesRegistry<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pair. Returns `false` when the series is already registered with
    /// a formatter of the same renderer kind.
    pub fn add(&mut self, series: SharedSeries, formatter: F) -> bool {
        let kind = formatter.renderer_kind();
        if self.position(&series, kind).is_some() {
            return false;
        }
        self.entries.push(SeriesEntry { series, formatter });
        true
    }

    /// Removes the pair registered for `series` under `kind`.
    pub fn remove(&mut self, series: &SharedSeries, kind: RendererKind) -> Option<SeriesEntry<F>> {
        self.position(series, kind)
            .map(|index| self.entries.remove(index))
    }

    /// Removes `series` from every renderer kind and returns how many pairs were dropped.
    pub fn remove_all(&mut self, series: &SharedSeries) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|entry| !same_series(&entry.series, series));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesEntry<F>> {
        self.entries.iter()
    }

    /// Entries drawn by one renderer kind, in registration order.
    pub fn entries_for(&self, kind: RendererKind) -> impl Iterator<Item = &SeriesEntry<F>> {
        self.entries
            .iter()
            .filter(move |entry| entry.formatter.renderer_kind() == kind)
    }

    #[must_use]
    pub fn formatter_for(&self, series: &SharedSeries, kind: RendererKind) -> Option<&F> {
        self.position(series, kind)
            .map(|index| &self.entries[index].formatter)
    }

    /// Renderer kinds in first-registration order, without duplicates.
    #[must_use]
    pub fn renderer_kinds(&self) -> SmallVec<[RendererKind; 3]> {
        let mut kinds = SmallVec::new();
        for entry in &self.entries {
            let kind = entry.formatter.renderer_kind();
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }

    /// Distinct registered series in registration order.
    #[must_use]
    pub fn series_snapshot(&self) -> Vec<SharedSeries> {
        let mut out: Vec<SharedSeries> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !out.iter().any(|known| same_series(known, &entry.series)) {
                out.push(entry.series.clone());
            }
        }
        out
    }

    fn position(&self, series: &SharedSeries, kind: RendererKind) -> Option<usize> {
        self.entries.iter().position(|entry| {
            same_series(&entry.series, series) && entry.formatter.renderer_kind() == kind
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SimpleXySeries;

    #[derive(Debug, Clone, Copy)]
    struct KindOnly(RendererKind);

    impl SeriesFormatter for KindOnly {
        fn renderer_kind(&self) -> RendererKind {
            self.0
        }
    }

    fn series() -> SharedSeries {
        SimpleXySeries::from_y_values(&[1.0, 2.0]).into_shared()
    }

    #[test]
    fn duplicate_series_per_kind_is_rejected() {
        let mut registry = SeriesRegistry::new();
        let s1 = series();
        assert!(registry.add(s1.clone(), KindOnly(RendererKind::LineAndPoint)));
        assert!(!registry.add(s1.clone(), KindOnly(RendererKind::LineAndPoint)));
        assert_eq!(registry.len(), 1);

        assert!(registry.add(s1.clone(), KindOnly(RendererKind::Bar)));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.series_snapshot().len(), 1);
    }

    #[test]
    fn equal_content_distinct_instances_are_distinct_series() {
        let mut registry = SeriesRegistry::new();
        assert!(registry.add(series(), KindOnly(RendererKind::Bar)));
        assert!(registry.add(series(), KindOnly(RendererKind::Bar)));
        assert_eq!(registry.entries_for(RendererKind::Bar).count(), 2);
    }
}
