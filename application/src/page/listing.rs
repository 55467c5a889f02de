//! Product listing page handler.

use axum::{
    extract::Query,
    response::Html,
    Extension,
};
use common::{pagination, Window};
use futures::future;
use service::{list, query, read, Query as _};

use crate::{view, PageError, Service};

/// `GET /products` handler rendering the product listing page.
///
/// Fetches the whole product collection and the known categories in
/// parallel, reconstructs the list view state out of the URL query and
/// renders the visible slice. An upstream failure here is fatal to the
/// render.
///
/// # Errors
///
/// Errors if the upstream catalog fails.
pub async fn render(
    Extension(service): Extension<Service>,
    Query(params): Query<list::Params>,
) -> Result<Html<String>, PageError> {
    let (batch, categories) = future::try_join(
        service.execute(query::products::List::by(
            read::product::list::Selector::default(),
        )),
        service.execute(query::categories::List::by(())),
    )
    .await
    .map_err(PageError::Upstream)?;

    let state = params.decode(&categories);
    let fetched = batch.products.len();

    let controller =
        list::Controller::new(batch.products, service.config().list);
    if state.shown.count() > pagination::STEP {
        // A load-more navigation: restore the previously revealed window and
        // reveal one more step after the cosmetic delay.
        let mut previous = state;
        previous.shown =
            Window::of(previous.shown.count() - pagination::STEP);
        controller.restore(previous);
        _ = controller.load_more().await;
    } else {
        controller.restore(state);
    }

    let visible = controller.visible();
    Ok(Html(view::listing::render(&view::listing::Listing {
        categories: &categories,
        state: &controller.state(),
        visible: &visible,
        total: controller.total(),
        fetched,
        has_more: controller.has_more(),
    })))
}
