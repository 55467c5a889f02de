//! [`PageError`]-related definitions.

use axum::response::{Html, IntoResponse, Response};
use derive_more::{Display, Error as StdError};
use service::infra::catalog;
use tracerr::Traced;
use tracing as log;

use crate::view;

/// Error of rendering a page.
#[derive(Debug, Display, StdError)]
pub enum PageError {
    /// Requested entity does not resolve.
    ///
    /// Deliberately also covers a failed fetch of a single entity: the
    /// upstream exposes no signal distinguishing "does not exist" from a
    /// transient failure.
    #[display("Page not found")]
    NotFound,

    /// Upstream catalog failed, which is fatal to the page render.
    #[display("Upstream catalog unavailable: {_0}")]
    Upstream(Traced<catalog::Error>),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound => (
                http::StatusCode::NOT_FOUND,
                "Product Not Found",
                "The product you're looking for doesn't exist or is no \
                 longer available.",
            ),
            Self::Upstream(e) => {
                log::error!("failed to render page: {e}");
                (
                    http::StatusCode::BAD_GATEWAY,
                    "Something went wrong",
                    "We couldn't load the catalog right now. Please try \
                     again later.",
                )
            }
        };

        (status, Html(view::error(title, message))).into_response()
    }
}
