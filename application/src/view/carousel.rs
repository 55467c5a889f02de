//! Image carousel markup.

use std::fmt::Write as _;

use service::domain::{product::ImageUrl, Product};

use super::escape;

/// Renders the image carousel of the provided [`Product`], showing the image
/// at the `requested` index.
///
/// The shown index is clamped to `[0, images.len() - 1]` and the
/// previous/next links never wrap around. A product without gallery images
/// falls back to its thumbnail.
#[expect(clippy::missing_panics_doc, reason = "writing to `String`")]
#[must_use]
pub fn render(product: &Product, requested: usize) -> String {
    let fallback = [product.thumbnail.clone()];
    let images: &[ImageUrl] = if product.images.is_empty() {
        &fallback
    } else {
        &product.images
    };

    let last = images.len() - 1;
    let shown = requested.min(last);
    let title = escape(product.title.as_ref());

    let mut html = String::with_capacity(1024);
    write!(
        html,
        "<div class=\"carousel\">\
         <div class=\"carousel-main\">\
         <img src=\"{src}\" alt=\"{title}\">\
         </div>",
        src = escape(images[shown].as_ref()),
    )
    .expect("infallible");

    if images.len() > 1 {
        let prev = if shown == 0 {
            "<span class=\"carousel-nav disabled\">&larr;</span>".to_owned()
        } else {
            format!(
                "<a class=\"carousel-nav\" \
                 href=\"/products/{id}?image={prev}\">&larr;</a>",
                id = product.id,
                prev = shown - 1,
            )
        };
        let next = if shown == last {
            "<span class=\"carousel-nav disabled\">&rarr;</span>".to_owned()
        } else {
            format!(
                "<a class=\"carousel-nav\" \
                 href=\"/products/{id}?image={next}\">&rarr;</a>",
                id = product.id,
                next = shown + 1,
            )
        };

        write!(html, "<div class=\"carousel-controls\">{prev}{next}</div>")
            .expect("infallible");

        html.push_str("<div class=\"carousel-thumbs\">");
        for (i, image) in images.iter().enumerate() {
            let current = if i == shown { " current" } else { "" };
            write!(
                html,
                "<a class=\"carousel-thumb{current}\" \
                 href=\"/products/{id}?image={i}\">\
                 <img src=\"{src}\" alt=\"{title} image {n}\">\
                 </a>",
                id = product.id,
                src = escape(image.as_ref()),
                n = i + 1,
            )
            .expect("infallible");
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}
