//! [`Query`] definition.

pub mod categories;
pub mod product;
pub mod products;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    infra::{catalog, Catalog},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from a [`Catalog`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct CatalogQuery<T>(T);

impl<W, B> CatalogQuery<By<W, B>> {
    /// Creates a new [`CatalogQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<C, W, B> Query<CatalogQuery<By<W, B>>> for Service<C>
where
    C: Catalog<Select<By<W, B>>, Ok = W, Err = Traced<catalog::Error>>,
{
    type Ok = W;
    type Err = Traced<catalog::Error>;

    async fn execute(
        &self,
        CatalogQuery(by): CatalogQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.catalog()
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!())
    }
}
