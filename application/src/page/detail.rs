//! Product detail page handler.

use axum::{
    extract::{Path, Query},
    response::Html,
    Extension,
};
use serde::Deserialize;
use service::{query, Query as _};
use tracing as log;

use crate::{view, PageError, Service};

/// URL query parameters of the product detail page.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Params {
    /// Index of the carousel image to show.
    pub image: Option<String>,
}

/// `GET /products/{id}` handler rendering the product detail page.
///
/// A failed fetch of the product is rendered as "not found" rather than a
/// generic error: the upstream exposes no signal distinguishing a missing
/// product from a transient failure.
///
/// # Errors
///
/// Errors with [`PageError::NotFound`] if the product doesn't resolve.
pub async fn render(
    Extension(service): Extension<Service>,
    Path(id): Path<u64>,
    Query(params): Query<Params>,
) -> Result<Html<String>, PageError> {
    let product = service
        .execute(query::product::ById::by(id.into()))
        .await
        .map_err(|e| {
            log::warn!("failed to fetch product `{id}`: {e}");
            PageError::NotFound
        })?;

    let image = params
        .image
        .as_deref()
        .and_then(|i| i.parse().ok())
        .unwrap_or(0);

    Ok(Html(view::detail::render(&product, image)))
}
