//! HTML markup builders.
//!
//! Pure input-to-markup mappings: every function renders a [`String`] of
//! HTML out of its arguments and nothing else.

pub mod card;
pub mod carousel;
pub mod detail;
pub mod home;
pub mod listing;

use std::fmt::Write as _;

use common::Stock;

/// Embedded stylesheet served at `/assets/app.css`.
pub const STYLESHEET: &str = include_str!("style.css");

/// Escapes the provided `text` for interpolation into HTML markup (both
/// element content and attribute values).
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders the document shell around the provided `main` markup.
#[expect(clippy::missing_panics_doc, reason = "writing to `String`")]
#[must_use]
pub fn layout(title: &str, main: &str) -> String {
    let mut html = String::with_capacity(main.len() + 1024);
    write!(
        html,
        "<!doctype html>\
         <html lang=\"en\">\
         <head>\
         <meta charset=\"utf-8\">\
         <meta name=\"viewport\" \
               content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title>\
         <link rel=\"stylesheet\" href=\"/assets/app.css\">\
         </head>\
         <body id=\"top\">\
         <header class=\"site-header\">\
         <nav>\
         <a class=\"brand\" href=\"/\">ProductStore</a>\
         <a href=\"/products\">Products</a>\
         </nav>\
         </header>\
         <main>{main}</main>\
         <a class=\"scroll-top\" href=\"#top\" aria-label=\"Back to top\">\
         &uarr;\
         </a>\
         </body>\
         </html>",
        title = escape(title),
    )
    .expect("infallible");
    html
}

/// Renders a generic error page with the provided `title` and `message`.
#[must_use]
pub fn error(title: &str, message: &str) -> String {
    layout(
        title,
        &format!(
            "<section class=\"error-state\">\
             <h1>{title}</h1>\
             <p>{message}</p>\
             <a class=\"button\" href=\"/products\">Browse Products</a>\
             </section>",
            title = escape(title),
            message = escape(message),
        ),
    )
}

/// Renders the availability badge of the provided [`Stock`].
///
/// The single render site of the stock banding: both the product card and
/// the detail page go through here.
#[must_use]
pub fn availability_badge(stock: Stock) -> String {
    let availability = stock.availability();
    format!(
        "<span class=\"badge badge-{tone}\">{label}</span>",
        tone = availability.tone(),
        label = escape(&availability.to_string()),
    )
}

#[cfg(test)]
mod spec {
    use common::Stock;

    use super::{availability_badge, escape, layout};

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;",
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn badge_follows_stock_banding() {
        assert_eq!(
            availability_badge(Stock::from(0)),
            "<span class=\"badge badge-danger\">Out of Stock</span>",
        );
        assert_eq!(
            availability_badge(Stock::from(5)),
            "<span class=\"badge badge-warning\">Low Stock (5 left)</span>",
        );
        assert_eq!(
            availability_badge(Stock::from(50)),
            "<span class=\"badge badge-success\">In Stock</span>",
        );
    }

    #[test]
    fn layout_wraps_main_markup() {
        let html = layout("Products", "<p>hello</p>");

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Products</title>"));
        assert!(html.contains("<main><p>hello</p></main>"));
        assert!(html.contains("/assets/app.css"));
    }
}
