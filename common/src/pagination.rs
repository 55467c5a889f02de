//! Abstractions for incremental reveal pagination.

/// Number of items a [`Window`] reveals at once.
pub const STEP: usize = 10;

/// Reveal window over an already resident, ordered collection.
///
/// A [`Window`] grows monotonically in [`STEP`] increments (capped at the
/// collection's size) and is reset back to a single [`STEP`] whenever the
/// underlying collection is re-derived.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Window(usize);

impl Window {
    /// Creates a new [`Window`] revealing the initial [`STEP`] of items.
    #[must_use]
    pub fn new() -> Self {
        Self(STEP)
    }

    /// Creates a new [`Window`] revealing the provided number of items.
    ///
    /// The number is raised to [`STEP`] if it's below it.
    #[must_use]
    pub fn of(count: usize) -> Self {
        Self(count.max(STEP))
    }

    /// Returns the number of items this [`Window`] reveals.
    #[must_use]
    pub fn count(self) -> usize {
        self.0
    }

    /// Resets this [`Window`] back to the initial [`STEP`] of items.
    pub fn reset(&mut self) {
        self.0 = STEP;
    }

    /// Grows this [`Window`] by a [`STEP`], capped at the provided `total`
    /// number of items.
    pub fn grow(&mut self, total: usize) {
        self.0 = (self.0 + STEP).min(total.max(STEP));
    }

    /// Indicates whether the provided `total` number of items extends beyond
    /// this [`Window`].
    #[must_use]
    pub fn has_more(self, total: usize) -> bool {
        self.0 < total
    }

    /// Returns the revealed prefix of the provided `items`.
    #[must_use]
    pub fn take<'i, T>(self, items: &'i [T]) -> &'i [T] {
        &items[..self.0.min(items.len())]
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod spec {
    use super::{Window, STEP};

    #[test]
    fn starts_at_a_single_step() {
        assert_eq!(Window::new().count(), STEP);
        assert_eq!(Window::default().count(), STEP);
    }

    #[test]
    fn raises_explicit_count_to_a_step() {
        assert_eq!(Window::of(3).count(), STEP);
        assert_eq!(Window::of(25).count(), 25);
    }

    #[test]
    fn grows_by_step_capped_at_total() {
        let mut window = Window::new();

        window.grow(25);
        assert_eq!(window.count(), 20);

        window.grow(25);
        assert_eq!(window.count(), 25);

        window.grow(25);
        assert_eq!(window.count(), 25);
    }

    #[test]
    fn resets_back_to_a_single_step() {
        let mut window = Window::new();
        window.grow(40);
        window.grow(40);

        window.reset();

        assert_eq!(window.count(), STEP);
    }

    #[test]
    fn takes_revealed_prefix_only() {
        let items = (0..25).collect::<Vec<_>>();
        let mut window = Window::new();

        assert_eq!(window.take(&items).len(), 10);

        window.grow(items.len());
        assert_eq!(window.take(&items).len(), 20);

        let few = [1, 2, 3];
        assert_eq!(window.take(&few), &few);
    }

    #[test]
    fn reports_more_items_beyond_it() {
        let window = Window::new();

        assert!(window.has_more(25));
        assert!(!window.has_more(10));
        assert!(!window.has_more(3));
    }
}
