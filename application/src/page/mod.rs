//! HTML page handlers.

pub mod detail;
pub mod listing;

use axum::response::{Html, IntoResponse};

use crate::view;

/// `GET /` handler rendering the home page.
#[expect(
    clippy::unused_async,
    reason = "`async` is required to match signature"
)]
pub async fn home() -> Html<String> {
    Html(view::home::render())
}

/// `GET /assets/app.css` handler serving the embedded stylesheet.
#[expect(
    clippy::unused_async,
    reason = "`async` is required to match signature"
)]
pub async fn stylesheet() -> impl IntoResponse {
    (
        [(http::header::CONTENT_TYPE, "text/css; charset=utf-8")],
        view::STYLESHEET,
    )
}
