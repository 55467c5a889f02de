//! Interactive list [`Controller`].

use std::{
    future::Future,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::time;

use crate::domain::Product;

use super::{derive, query, Selection, SortOrder, State};

/// Timing configuration of a [`Controller`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Cosmetic delay before a load-more reveal settles.
    pub reveal_delay: Duration,

    /// Duration of the transient filter-transition state.
    pub transition: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(300),
            transition: Duration::from_millis(300),
        }
    }
}

/// Minimum fraction of the sentinel that must be visible to trigger a
/// reveal.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Maximum distance (in pixels) between the sentinel and the viewport edge
/// to trigger a reveal.
pub const VISIBILITY_MARGIN: u32 = 100;

/// Visibility report of the reveal sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    /// Fraction of the sentinel currently visible (`0.0..=1.0`).
    pub ratio: f64,

    /// Distance (in pixels) between the sentinel and the viewport edge.
    pub distance: u32,
}

impl Visibility {
    /// Indicates whether this [`Visibility`] crosses the reveal threshold.
    #[must_use]
    pub fn crosses_threshold(&self) -> bool {
        self.ratio >= VISIBILITY_THRESHOLD && self.distance <= VISIBILITY_MARGIN
    }
}

/// Capability of observing the reveal sentinel.
///
/// Abstracts the hosting viewport away, so the reveal loop is drivable by a
/// scripted implementation in tests.
pub trait Viewport {
    /// Waits for the next [`Visibility`] report of the sentinel element.
    ///
    /// [`None`] means the viewport is gone and no more reports will come.
    fn observe(&mut self) -> impl Future<Output = Option<Visibility>>;
}

/// Controller owning the list view [`State`] of one page visit.
///
/// Clones share the same state, so a clone may be handed to a scheduled
/// task while the original keeps serving the page.
#[derive(Clone, Debug)]
pub struct Controller {
    /// Shared state of this [`Controller`].
    inner: Arc<Mutex<Inner>>,

    /// Timing [`Config`] of this [`Controller`].
    config: Config,
}

/// Inner state of a [`Controller`].
#[derive(Debug)]
struct Inner {
    /// The whole fetched product collection, in upstream order.
    products: Vec<Product>,

    /// Current view [`State`].
    state: State,

    /// Indicator whether a load-more reveal is in flight.
    is_loading: bool,

    /// Indicator whether a filter transition is in flight.
    is_filter_loading: bool,

    /// Epoch of filter transitions: a scheduled clearing applies only while
    /// its epoch is still the current one, so a stale timer can never clear
    /// a newer transition.
    transition_epoch: u64,
}

impl Controller {
    /// Creates a new [`Controller`] over the provided `products` with the
    /// provided [`Config`].
    #[must_use]
    pub fn new(products: Vec<Product>, config: Config) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                products,
                state: State::default(),
                is_loading: false,
                is_filter_loading: false,
                transition_epoch: 0,
            })),
            config,
        }
    }

    /// Restores the provided [`State`] as-is, without any transition.
    ///
    /// Intended for reconstructing a previous visit's state out of its URL
    /// query.
    pub fn restore(&self, state: State) {
        self.lock().state = state;
    }

    /// Selects the provided category [`Selection`], resetting the reveal
    /// window and starting a filter transition.
    pub fn select_category(&self, category: Selection) {
        self.transition(|state| state.category = category);
    }

    /// Selects the provided [`SortOrder`], resetting the reveal window and
    /// starting a filter transition.
    pub fn select_sort(&self, sort: SortOrder) {
        self.transition(|state| state.sort = sort);
    }

    /// Resets the filters and the reveal window back to the defaults.
    ///
    /// The encoded URL query of the resulting [`State`] is empty.
    pub fn clear_filters(&self) {
        let mut inner = self.lock();
        inner.state = State::default();
        inner.is_filter_loading = false;
        inner.transition_epoch += 1;
    }

    /// Reveals the next portion of the derived list after the configured
    /// cosmetic delay.
    ///
    /// No-op returning `false` when a reveal is already in flight or
    /// everything is revealed already.
    pub async fn load_more(&self) -> bool {
        {
            let mut inner = self.lock();
            let total = inner.derived_len();
            if inner.is_loading || !inner.state.shown.has_more(total) {
                return false;
            }
            inner.is_loading = true;
        }

        time::sleep(self.config.reveal_delay).await;

        let mut inner = self.lock();
        // Re-derived at settle time: a filter change may have happened
        // during the delay.
        let total = inner.derived_len();
        inner.state.shown.grow(total);
        inner.is_loading = false;
        true
    }

    /// Drives the reveal loop over the provided [`Viewport`] until it's
    /// gone.
    ///
    /// Every sentinel crossing beyond the visibility threshold triggers
    /// [`Controller::load_more()`], provided no reveal is in flight and more
    /// items remain.
    pub async fn drive<V: Viewport>(&self, viewport: &mut V) {
        while let Some(visibility) = viewport.observe().await {
            if !visibility.crosses_threshold() {
                continue;
            }
            if self.is_loading() || !self.has_more() {
                continue;
            }
            _ = self.load_more().await;
        }
    }

    /// Returns a snapshot of the current [`State`].
    #[must_use]
    pub fn state(&self) -> State {
        self.lock().state.clone()
    }

    /// Returns the current [`State`] encoded as a URL query string.
    #[must_use]
    pub fn query(&self) -> String {
        query::encode(&self.lock().state)
    }

    /// Returns the currently visible slice of the derived list.
    #[must_use]
    pub fn visible(&self) -> Vec<Product> {
        let inner = self.lock();
        let derived =
            derive(&inner.products, &inner.state.category, inner.state.sort);
        inner
            .state
            .shown
            .take(&derived)
            .iter()
            .map(|p| (*p).clone())
            .collect()
    }

    /// Returns the total size of the derived list.
    #[must_use]
    pub fn total(&self) -> usize {
        self.lock().derived_len()
    }

    /// Indicates whether the derived list extends beyond the reveal window.
    #[must_use]
    pub fn has_more(&self) -> bool {
        let inner = self.lock();
        let total = inner.derived_len();
        inner.state.shown.has_more(total)
    }

    /// Indicates whether a load-more reveal is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    /// Indicates whether a filter transition is in flight.
    #[must_use]
    pub fn is_filter_loading(&self) -> bool {
        self.lock().is_filter_loading
    }

    /// Applies the provided filter change and starts a transition clearing
    /// itself after the configured duration, unless a newer change
    /// supersedes it first.
    fn transition(&self, apply: impl FnOnce(&mut State)) {
        let epoch = {
            let mut inner = self.lock();
            apply(&mut inner.state);
            inner.state.shown.reset();
            inner.is_filter_loading = true;
            inner.transition_epoch += 1;
            inner.transition_epoch
        };

        let this = self.clone();
        drop(tokio::spawn(async move {
            time::sleep(this.config.transition).await;
            let mut inner = this.lock();
            if inner.transition_epoch == epoch {
                inner.is_filter_loading = false;
            }
        }));
    }

    /// Locks the [`Inner`] state, ignoring lock poisoning.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Inner {
    /// Returns the size of the currently derived list.
    fn derived_len(&self) -> usize {
        derive(&self.products, &self.state.category, self.state.sort).len()
    }
}

#[cfg(test)]
mod spec {
    use std::collections::VecDeque;

    use tokio::{task, time};

    use crate::testing;

    use super::{
        Config, Controller, Selection, SortOrder, State, Viewport, Visibility,
    };

    fn controller(products: usize) -> Controller {
        Controller::new(testing::products(products), Config::default())
    }

    /// Scripted [`Viewport`] replaying prepared [`Visibility`] reports.
    struct Script(VecDeque<Visibility>);

    impl Viewport for Script {
        async fn observe(&mut self) -> Option<Visibility> {
            self.0.pop_front()
        }
    }

    fn crossing() -> Visibility {
        Visibility {
            ratio: 0.5,
            distance: 0,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn reveals_in_steps_until_exhausted() {
        let controller = controller(25);
        assert_eq!(controller.visible().len(), 10);
        assert!(controller.has_more());

        assert!(controller.load_more().await);
        assert_eq!(controller.visible().len(), 20);

        assert!(controller.load_more().await);
        assert_eq!(controller.visible().len(), 25);
        assert!(!controller.has_more());

        assert!(!controller.load_more().await);
        assert_eq!(controller.visible().len(), 25);
    }

    #[tokio::test(start_paused = true)]
    async fn visible_never_exceeds_derived_total() {
        let controller = controller(13);

        assert_eq!(controller.visible().len(), 10);

        assert!(controller.load_more().await);
        assert_eq!(controller.visible().len(), 13);

        controller.select_category(Selection::Only(
            "furniture".parse().unwrap(),
        ));
        assert_eq!(controller.visible().len(), 0);
        assert!(!controller.has_more());
    }

    #[tokio::test(start_paused = true)]
    async fn filter_change_resets_reveal_window() {
        let controller = controller(25);
        assert!(controller.load_more().await);
        assert_eq!(controller.visible().len(), 20);

        controller.select_sort(SortOrder::PriceAscending);

        assert_eq!(controller.state().shown.count(), 10);
        assert_eq!(controller.visible().len(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_filters_restores_default_state() {
        let controller = controller(25);
        controller.select_category(Selection::Only("beauty".parse().unwrap()));
        controller.select_sort(SortOrder::PriceDescending);

        controller.clear_filters();

        assert_eq!(controller.state(), State::default());
        assert_eq!(controller.query(), "");
        assert!(!controller.is_filter_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn encodes_current_state_as_query() {
        let controller = controller(25);

        controller.select_category(Selection::Only("beauty".parse().unwrap()));
        controller.select_sort(SortOrder::PriceAscending);

        assert_eq!(controller.query(), "category=beauty&sort=asc");
    }

    #[tokio::test(start_paused = true)]
    async fn stale_transition_timer_cannot_clear_newer_one() {
        let controller = controller(25);

        controller.select_category(Selection::Only("beauty".parse().unwrap()));
        assert!(controller.is_filter_loading());

        time::advance(std::time::Duration::from_millis(100)).await;
        controller.select_sort(SortOrder::PriceAscending);

        // 350ms after the first change: its timer has fired, but must not
        // have cleared the second transition.
        time::advance(std::time::Duration::from_millis(250)).await;
        task::yield_now().await;
        assert!(controller.is_filter_loading());

        // 400ms: the second transition's own timer clears it.
        time::advance(std::time::Duration::from_millis(60)).await;
        task::yield_now().await;
        assert!(!controller.is_filter_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn viewport_crossings_drive_reveals() {
        let controller = controller(30);
        let mut viewport =
            Script(VecDeque::from([crossing(), crossing(), crossing()]));

        controller.drive(&mut viewport).await;

        assert_eq!(controller.visible().len(), 30);
        assert!(!controller.has_more());
    }

    #[tokio::test(start_paused = true)]
    async fn insufficient_visibility_does_not_reveal() {
        let controller = controller(30);
        let mut viewport = Script(VecDeque::from([
            Visibility {
                ratio: 0.05,
                distance: 0,
            },
            Visibility {
                ratio: 0.5,
                distance: 500,
            },
        ]));

        controller.drive(&mut viewport).await;

        assert_eq!(controller.visible().len(), 10);
    }
}
