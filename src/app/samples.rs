//! Canned example queries.

use super::store::Store;

/// Sample queries offered as chips under the query box, in display order.
pub const SAMPLE_QUERIES: [&str; 5] = [
    "Spicy Thai noodles",
    "Healthy Italian salad",
    "Chocolate dessert under 300 cal",
    "Comfort food for cold weather",
    "High-protein breakfast",
];

/// Loads sample queries into the store's query.
///
/// Picking never submits and never touches mode or filters.
#[derive(Debug, Clone, Default)]
pub struct SamplePicker {
    last: Option<usize>,
}

impl SamplePicker {
    /// Replaces the query with the sample at `index`.
    ///
    /// Returns `false` and changes nothing when `index` is out of range.
    pub fn pick(&mut self, store: &mut Store, index: usize) -> bool {
        let Some(sample) = SAMPLE_QUERIES.get(index) else {
            tracing::debug!(index, "sample index out of range");
            return false;
        };
        store.set_query(*sample);
        self.last = Some(index);
        true
    }

    /// Picks the sample after the last one picked, wrapping.
    pub fn next_sample(&mut self, store: &mut Store) -> usize {
        let index = self.last.map_or(0, |i| (i + 1) % SAMPLE_QUERIES.len());
        self.pick(store, index);
        index
    }

    /// Index of the most recently picked sample.
    #[must_use]
    pub const fn last(&self) -> Option<usize> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::Mode;
    use crate::domain::FilterValue;

    #[test]
    fn pick_replaces_query_wholesale() {
        let mut store = Store::new();
        store.set_query("something typed");
        store.set_mode(Mode::Chat);
        store.set_filter(FilterValue::Cuisine("Thai".into()));

        let mut picker = SamplePicker::default();
        assert!(picker.pick(&mut store, 2));

        let state = store.state();
        assert_eq!(state.query, "Chocolate dessert under 300 cal");
        assert_eq!(state.mode, Mode::Chat);
        assert_eq!(state.filters.cuisine(), Some("Thai"));
        assert!(!state.loading);
    }

    #[test]
    fn out_of_range_pick_is_noop() {
        let mut store = Store::new();
        store.set_query("keep me");
        store.drain_changes();

        let mut picker = SamplePicker::default();
        assert!(!picker.pick(&mut store, SAMPLE_QUERIES.len()));
        assert_eq!(store.state().query, "keep me");
        assert!(store.drain_changes().is_empty());
        assert_eq!(picker.last(), None);
    }

    #[test]
    fn next_sample_cycles() {
        let mut store = Store::new();
        let mut picker = SamplePicker::default();

        assert_eq!(picker.next_sample(&mut store), 0);
        assert_eq!(store.state().query, "Spicy Thai noodles");

        picker.pick(&mut store, 4);
        assert_eq!(picker.next_sample(&mut store), 0);
        assert_eq!(picker.next_sample(&mut store), 1);
        assert_eq!(store.state().query, "Healthy Italian salad");
    }
}
