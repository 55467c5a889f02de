//! [`Catalog`] operations of the [`Upstream`] client.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{product, Category, Product},
    infra::{catalog, Catalog, Upstream},
    read::product::list,
};

use super::Subject;

impl Catalog<Select<By<list::Batch, list::Selector>>> for Upstream {
    type Ok = list::Batch;
    type Err = Traced<catalog::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<list::Batch, list::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let selector = by.into_inner();
        self.get_json(self.config().batch_url(&selector), Subject::Products)
            .await
    }
}

impl Catalog<Select<By<Product, product::Id>>> for Upstream {
    type Ok = Product;
    type Err = Traced<catalog::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Product, product::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.get_json(self.config().product_url(id), Subject::Product)
            .await
    }
}

impl Catalog<Select<By<Vec<Category>, ()>>> for Upstream {
    type Ok = Vec<Category>;
    type Err = Traced<catalog::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Vec<Category>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.get_json(self.config().categories_url(), Subject::Categories)
            .await
    }
}
