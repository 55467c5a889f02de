//! Time-based revalidation of [`Catalog`] responses.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use common::{operations::{By, Select}, unit, DateTimeOf};
use tracerr::Traced;

use crate::{
    domain::{product, Category, Product},
    infra::{catalog, Catalog},
    read::product::list,
};

/// [`DateTime`] when a cached value was fetched from the upstream.
///
/// [`DateTime`]: common::DateTime
type FetchDateTime = DateTimeOf<unit::Fetch>;

/// [`Revalidate`] configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Freshness window of product data (lists and single products).
    pub products: Duration,

    /// Freshness window of category data.
    pub categories: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            products: Duration::from_secs(60 * 60),
            categories: Duration::from_secs(60 * 60 * 24),
        }
    }
}

/// [`Catalog`] wrapper serving cached responses while they're fresh.
///
/// Freshness is a pure time-based policy carried in the [`Config`]: the
/// wrapped [`Catalog`] is consulted only once per freshness window for any
/// given selection. Concurrent misses of the same selection may fetch twice;
/// the last write wins.
#[derive(Clone, Debug)]
pub struct Revalidate<C> {
    /// Wrapped [`Catalog`].
    inner: C,

    /// [`Config`] of this [`Revalidate`] wrapper.
    config: Config,

    /// Cached responses, shared by all clones.
    cache: Arc<Cache>,
}

/// Cached [`Catalog`] responses.
#[derive(Debug, Default)]
struct Cache {
    /// [`list::Batch`]es keyed by their [`list::Selector`].
    batches: Mutex<HashMap<list::Selector, Stamped<list::Batch>>>,

    /// Single [`Product`]s keyed by their [`product::Id`].
    products: Mutex<HashMap<product::Id, Stamped<Product>>>,

    /// The single list of all [`Category`]s.
    categories: Mutex<Option<Stamped<Vec<Category>>>>,
}

impl<C> Revalidate<C> {
    /// Creates a new [`Revalidate`] wrapper around the provided [`Catalog`]
    /// with the provided [`Config`].
    #[must_use]
    pub fn new(inner: C, config: Config) -> Self {
        Self {
            inner,
            config,
            cache: Arc::new(Cache::default()),
        }
    }

    /// Locks the provided cache section, ignoring lock poisoning.
    fn section<T>(section: &Mutex<T>) -> MutexGuard<'_, T> {
        section.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Value stamped with the time it was fetched at.
#[derive(Clone, Debug)]
struct Stamped<T> {
    /// The stamped value itself.
    value: T,

    /// [`FetchDateTime`] when the value was fetched.
    fetched_at: FetchDateTime,
}

impl<T> Stamped<T> {
    /// Stamps the provided `value` with the current time.
    fn now(value: T) -> Self {
        Self {
            value,
            fetched_at: FetchDateTime::now(),
        }
    }

    /// Indicates whether this [`Stamped`] value is still within the provided
    /// freshness `window`.
    fn is_fresh(&self, window: Duration) -> bool {
        self.fetched_at + window > FetchDateTime::now()
    }
}

impl<C> Catalog<Select<By<list::Batch, list::Selector>>> for Revalidate<C>
where
    C: Catalog<
        Select<By<list::Batch, list::Selector>>,
        Ok = list::Batch,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = list::Batch;
    type Err = Traced<catalog::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<list::Batch, list::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let selector = by.into_inner();

        if let Some(hit) = Self::section(&self.cache.batches)
            .get(&selector)
            .filter(|s| s.is_fresh(self.config.products))
        {
            return Ok(hit.value.clone());
        }

        let batch = self
            .inner
            .execute(Select(By::new(selector.clone())))
            .await
            .map_err(tracerr::wrap!())?;
        _ = Self::section(&self.cache.batches)
            .insert(selector, Stamped::now(batch.clone()));
        Ok(batch)
    }
}

impl<C> Catalog<Select<By<Product, product::Id>>> for Revalidate<C>
where
    C: Catalog<
        Select<By<Product, product::Id>>,
        Ok = Product,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = Product;
    type Err = Traced<catalog::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Product, product::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        if let Some(hit) = Self::section(&self.cache.products)
            .get(&id)
            .filter(|s| s.is_fresh(self.config.products))
        {
            return Ok(hit.value.clone());
        }

        let product = self
            .inner
            .execute(Select(By::new(id)))
            .await
            .map_err(tracerr::wrap!())?;
        _ = Self::section(&self.cache.products)
            .insert(id, Stamped::now(product.clone()));
        Ok(product)
    }
}

impl<C> Catalog<Select<By<Vec<Category>, ()>>> for Revalidate<C>
where
    C: Catalog<
        Select<By<Vec<Category>, ()>>,
        Ok = Vec<Category>,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = Vec<Category>;
    type Err = Traced<catalog::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Category>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        if let Some(hit) = Self::section(&self.cache.categories)
            .as_ref()
            .filter(|s| s.is_fresh(self.config.categories))
        {
            return Ok(hit.value.clone());
        }

        let categories = self
            .inner
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!())?;
        *Self::section(&self.cache.categories) =
            Some(Stamped::now(categories.clone()));
        Ok(categories)
    }
}

/// Capability of dropping cached entries past their freshness window.
pub trait Sweep {
    /// Drops all the stale entries, returning the number of dropped ones.
    fn sweep(&self) -> usize;
}

impl<C> Sweep for Revalidate<C> {
    fn sweep(&self) -> usize {
        let mut dropped = 0;

        {
            let mut batches = Self::section(&self.cache.batches);
            let before = batches.len();
            batches.retain(|_, s| s.is_fresh(self.config.products));
            dropped += before - batches.len();
        }
        {
            let mut products = Self::section(&self.cache.products);
            let before = products.len();
            products.retain(|_, s| s.is_fresh(self.config.products));
            dropped += before - products.len();
        }
        {
            let mut categories = Self::section(&self.cache.categories);
            if categories
                .as_ref()
                .is_some_and(|s| !s.is_fresh(self.config.categories))
            {
                *categories = None;
                dropped += 1;
            }
        }

        dropped
    }
}

#[cfg(test)]
mod spec {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use common::operations::{By, Select};
    use tracerr::Traced;

    use crate::{
        domain::{Category, Product},
        infra::{catalog, Catalog},
        read::product::list,
        testing,
    };

    use super::{Config, Revalidate, Sweep};

    /// Stub [`Catalog`] counting the requests reaching it.
    #[derive(Debug, Default)]
    struct Counting {
        batches: AtomicUsize,
        products: AtomicUsize,
        categories: AtomicUsize,
    }

    impl Catalog<Select<By<list::Batch, list::Selector>>> for Counting {
        type Ok = list::Batch;
        type Err = Traced<catalog::Error>;

        async fn execute(
            &self,
            _: Select<By<list::Batch, list::Selector>>,
        ) -> Result<Self::Ok, Self::Err> {
            _ = self.batches.fetch_add(1, Ordering::SeqCst);
            Ok(list::Batch {
                products: testing::products(3),
                total: 3,
                skip: 0,
                limit: 100,
            })
        }
    }

    impl Catalog<Select<By<Product, crate::domain::product::Id>>> for Counting {
        type Ok = Product;
        type Err = Traced<catalog::Error>;

        async fn execute(
            &self,
            _: Select<By<Product, crate::domain::product::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            _ = self.products.fetch_add(1, Ordering::SeqCst);
            Ok(testing::product(1, "beauty", "9.99"))
        }
    }

    impl Catalog<Select<By<Vec<Category>, ()>>> for Counting {
        type Ok = Vec<Category>;
        type Err = Traced<catalog::Error>;

        async fn execute(
            &self,
            _: Select<By<Vec<Category>, ()>>,
        ) -> Result<Self::Ok, Self::Err> {
            _ = self.categories.fetch_add(1, Ordering::SeqCst);
            Ok(vec![testing::category("beauty", "Beauty")])
        }
    }

    fn fresh() -> Config {
        Config::default()
    }

    fn expired() -> Config {
        Config {
            products: Duration::ZERO,
            categories: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn serves_fresh_hits_without_refetching() {
        let cache = Revalidate::new(Counting::default(), fresh());

        for _ in 0..3 {
            let batch = cache
                .execute(Select(By::new(list::Selector::default())))
                .await
                .unwrap();
            assert_eq!(batch.total, 3);
        }

        assert_eq!(cache.inner.batches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn refetches_past_freshness_window() {
        let cache = Revalidate::new(Counting::default(), expired());

        for _ in 0..2 {
            _ = cache
                .execute(Select(By::new(list::Selector::default())))
                .await
                .unwrap();
        }

        assert_eq!(cache.inner.batches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn caches_each_kind_separately() {
        let cache = Revalidate::new(Counting::default(), fresh());

        for _ in 0..2 {
            _ = cache
                .execute(Select(By::<Product, _>::new(
                    crate::domain::product::Id::from(1),
                )))
                .await
                .unwrap();
            _ = cache
                .execute(Select(By::<Vec<Category>, _>::new(())))
                .await
                .unwrap();
        }

        assert_eq!(cache.inner.products.load(Ordering::SeqCst), 1);
        assert_eq!(cache.inner.categories.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn sweeps_stale_entries_only() {
        let stale = Revalidate::new(Counting::default(), expired());
        _ = stale
            .execute(Select(By::new(list::Selector::default())))
            .await
            .unwrap();
        _ = stale
            .execute(Select(By::<Vec<Category>, _>::new(())))
            .await
            .unwrap();
        assert_eq!(stale.sweep(), 2);
        assert_eq!(stale.sweep(), 0);

        let kept = Revalidate::new(Counting::default(), fresh());
        _ = kept
            .execute(Select(By::new(list::Selector::default())))
            .await
            .unwrap();
        assert_eq!(kept.sweep(), 0);
    }
}
