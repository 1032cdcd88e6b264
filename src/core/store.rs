//! # Counter Store
//!
//! The ordered collection of counters plus the currently selected index.
//!
//! ```text
//! CounterStore
//! ├── counters: Vec<Counter>   // left-to-right on screen
//! └── selected: usize          // focused counter, meaningful only when non-empty
//! ```
//!
//! Counters have no identity beyond their position. Out-of-range indices
//! are ignored rather than reported: removing a counter that does not exist,
//! or nudging a selection that went stale, does nothing.

use crate::core::error::InvalidArgument;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    pub value: i32,
}

impl Counter {
    pub fn new(value: i32) -> Self {
        Self { value }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterStore {
    counters: Vec<Counter>,
    selected: usize,
}

impl CounterStore {
    /// An empty store. Selection is inactive until a counter is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// The first-run store: a single counter at zero.
    pub fn with_default() -> Self {
        Self::from_values([0])
    }

    pub fn from_values(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            counters: values.into_iter().map(Counter::new).collect(),
            selected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    pub fn values(&self) -> Vec<i32> {
        self.counters.iter().map(|c| c.value).collect()
    }

    /// The raw selected index, which may be stale after a removal.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected index, only when it points at a counter.
    pub fn selected(&self) -> Option<usize> {
        (self.selected < self.counters.len()).then_some(self.selected)
    }

    pub fn reset_selection(&mut self) {
        self.selected = 0;
    }

    pub fn add_counter(&mut self) {
        self.counters.push(Counter::default());
    }

    /// Append `count` zero-valued counters.
    pub fn add_counters(&mut self, count: i32) -> Result<(), InvalidArgument> {
        if count <= 0 {
            return Err(InvalidArgument::NonPositiveCount(count));
        }
        for _ in 0..count {
            self.add_counter();
        }
        Ok(())
    }

    /// Remove the counter at `index`. Returns whether anything was removed.
    ///
    /// Does not touch the selection; callers decide where focus goes next.
    pub fn remove_counter(&mut self, index: usize) -> bool {
        if index < self.counters.len() {
            self.counters.remove(index);
            true
        } else {
            false
        }
    }

    pub fn select_next(&mut self) {
        let len = self.counters.len();
        if len != 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.counters.len();
        if len != 0 {
            self.selected = (self.selected % len + len - 1) % len;
        }
    }

    pub fn increment_selected(&mut self) {
        if let Some(counter) = self.counters.get_mut(self.selected) {
            counter.value = counter.value.saturating_add(1);
        }
    }

    pub fn decrement_selected(&mut self) {
        if let Some(counter) = self.counters.get_mut(self.selected) {
            counter.value = counter.value.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_at(values: &[i32], selected: usize) -> CounterStore {
        let mut store = CounterStore::from_values(values.iter().copied());
        for _ in 0..selected {
            store.select_next();
        }
        store
    }

    #[test]
    fn test_with_default_has_single_zero_counter() {
        let store = CounterStore::with_default();
        assert_eq!(store.values(), vec![0]);
        assert_eq!(store.selected(), Some(0));
    }

    #[test]
    fn test_add_counters_appends_zeros_in_order() {
        let mut store = CounterStore::from_values([4, 7]);
        store.add_counters(2).unwrap();
        assert_eq!(store.values(), vec![4, 7, 0, 0]);
    }

    #[test]
    fn test_add_counters_rejects_zero_and_negative() {
        let mut store = CounterStore::with_default();
        assert_eq!(
            store.add_counters(0),
            Err(InvalidArgument::NonPositiveCount(0))
        );
        assert_eq!(
            store.add_counters(-3),
            Err(InvalidArgument::NonPositiveCount(-3))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_counter_shifts_later_elements_down() {
        let mut store = CounterStore::from_values([10, 20, 30, 40]);
        assert!(store.remove_counter(1));
        assert_eq!(store.values(), vec![10, 30, 40]);
    }

    #[test]
    fn test_remove_counter_out_of_range_is_noop() {
        let mut store = CounterStore::from_values([1, 2]);
        assert!(!store.remove_counter(2));
        assert!(!store.remove_counter(usize::MAX));
        assert_eq!(store.values(), vec![1, 2]);
    }

    #[test]
    fn test_select_next_wraps_after_len_steps() {
        let mut store = store_at(&[0, 0, 0, 0], 2);
        for _ in 0..store.len() {
            store.select_next();
        }
        assert_eq!(store.selected(), Some(2));
    }

    #[test]
    fn test_select_previous_from_zero_goes_to_last() {
        let mut store = CounterStore::from_values([0, 0, 0]);
        store.select_previous();
        assert_eq!(store.selected(), Some(2));
        store.select_previous();
        assert_eq!(store.selected(), Some(1));
    }

    #[test]
    fn test_single_counter_selection_stays_put() {
        let mut store = CounterStore::with_default();
        store.select_next();
        store.select_previous();
        assert_eq!(store.selected(), Some(0));
    }

    #[test]
    fn test_empty_store_operations_are_noops() {
        let mut store = CounterStore::new();
        store.select_next();
        store.select_previous();
        store.increment_selected();
        store.decrement_selected();
        assert_eq!(store, CounterStore::new());
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn test_increment_and_decrement_selected() {
        let mut store = store_at(&[0, 0], 1);
        store.increment_selected();
        store.increment_selected();
        store.decrement_selected();
        assert_eq!(store.values(), vec![0, 1]);
    }

    #[test]
    fn test_values_may_go_negative() {
        let mut store = CounterStore::with_default();
        store.decrement_selected();
        store.decrement_selected();
        assert_eq!(store.values(), vec![-2]);
    }

    #[test]
    fn test_stale_selection_ignores_increment() {
        let mut store = store_at(&[1, 2, 3], 2);
        store.remove_counter(2);
        assert_eq!(store.selected_index(), 2);
        assert_eq!(store.selected(), None);

        store.increment_selected();
        store.decrement_selected();
        assert_eq!(store.values(), vec![1, 2]);
    }

    #[test]
    fn test_increment_saturates_at_bounds() {
        let mut store = CounterStore::from_values([i32::MAX, i32::MIN]);
        store.increment_selected();
        store.select_next();
        store.decrement_selected();
        assert_eq!(store.values(), vec![i32::MAX, i32::MIN]);
    }
}
