//! [`Catalog`] implementation backed by the upstream REST API.

mod impls;

use derive_more::{Display, Error as StdError};
use serde::de::DeserializeOwned;
use tracerr::Traced;

#[cfg(doc)]
use crate::infra::Catalog;
use crate::{domain::product, infra::catalog, read::product::list};

/// Upstream REST API [`Catalog`] client.
///
/// Issues a single `GET` request per operation: no retry, no backoff, no
/// request timeout (a hung upstream blocks the caller).
#[derive(Clone, Debug)]
pub struct Upstream {
    /// Underlying HTTP client.
    http: reqwest::Client,

    /// [`Config`] of this [`Upstream`] client.
    config: Config,
}

impl Upstream {
    /// Creates a new [`Upstream`] client with the provided [`Config`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Returns [`Config`] of this [`Upstream`] client.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Performs a single `GET` request to the provided `url`, decoding the
    /// JSON response.
    ///
    /// Any failure (transport, non-2xx status, undecodable body) collapses
    /// into [`Error::FetchFailed`] for the provided [`Subject`]: the upstream
    /// exposes no richer failure signal worth distinguishing.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        subject: Subject,
    ) -> Result<T, Traced<catalog::Error>> {
        let failed =
            move || tracerr::new!(catalog::Error::Upstream(Error::FetchFailed(subject)));

        let response = self.http.get(&url).send().await.map_err(|_| failed())?;
        if !response.status().is_success() {
            return Err(failed());
        }
        response.json().await.map_err(|_| failed())
    }
}

/// [`Upstream`] client configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Base URL of the upstream REST API.
    pub base_url: String,
}

impl Config {
    /// Returns the URL selecting a [`list::Batch`] by the provided
    /// [`list::Selector`].
    #[must_use]
    pub fn batch_url(&self, selector: &list::Selector) -> String {
        let Self { base_url } = self;
        let list::Slice { limit, skip } = selector.slice;
        match &selector.category {
            Some(slug) => format!(
                "{base_url}/products/category/{slug}?limit={limit}&skip={skip}",
            ),
            None => format!("{base_url}/products?limit={limit}&skip={skip}"),
        }
    }

    /// Returns the URL selecting a single product by its [`product::Id`].
    #[must_use]
    pub fn product_url(&self, id: product::Id) -> String {
        format!("{}/products/{id}", self.base_url)
    }

    /// Returns the URL selecting all the known categories.
    #[must_use]
    pub fn categories_url(&self) -> String {
        format!("{}/products/categories", self.base_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://dummyjson.com".to_owned(),
        }
    }
}

/// [`Upstream`] error.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// Failed to fetch the [`Subject`] from the upstream.
    #[display("Failed to fetch {_0}")]
    FetchFailed(#[error(not(source))] Subject),
}

/// Subject of a failed upstream fetch.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Subject {
    /// List of products.
    #[display("products")]
    Products,

    /// Single product.
    #[display("product")]
    Product,

    /// List of categories.
    #[display("categories")]
    Categories,
}

#[cfg(test)]
mod spec {
    use crate::read::product::list;

    use super::{Config, Error, Subject};

    #[test]
    fn builds_batch_url() {
        let config = Config::default();

        assert_eq!(
            config.batch_url(&list::Selector::default()),
            "https://dummyjson.com/products?limit=100&skip=0",
        );
        assert_eq!(
            config.batch_url(&list::Selector {
                category: Some("beauty".parse().unwrap()),
                slice: list::Slice { limit: 30, skip: 10 },
            }),
            "https://dummyjson.com/products/category/beauty?limit=30&skip=10",
        );
    }

    #[test]
    fn builds_product_and_categories_urls() {
        let config = Config {
            base_url: "http://localhost:3000".to_owned(),
        };

        assert_eq!(
            config.product_url(7.into()),
            "http://localhost:3000/products/7",
        );
        assert_eq!(
            config.categories_url(),
            "http://localhost:3000/products/categories",
        );
    }

    #[test]
    fn error_names_subject_only() {
        assert_eq!(
            Error::FetchFailed(Subject::Products).to_string(),
            "Failed to fetch products",
        );
        assert_eq!(
            Error::FetchFailed(Subject::Categories).to_string(),
            "Failed to fetch categories",
        );
    }
}
