//! Product detail page markup.

use std::fmt::Write as _;

use common::rating;
use service::domain::Product;

use super::{availability_badge, carousel, escape, layout};

/// Renders the detail page of the provided [`Product`], with its carousel
/// showing the image at the `image` index.
#[expect(clippy::missing_panics_doc, reason = "writing to `String`")]
#[must_use]
pub fn render(product: &Product, image: usize) -> String {
    let title = escape(product.title.as_ref());

    let mut info = String::with_capacity(2048);
    write!(
        info,
        "<span class=\"category-pill\">{category}</span>\
         <h1>{title}</h1>\
         <div class=\"detail-rating\">{stars}\
         <span class=\"rating-value\">{rating}</span>{brand}</div>",
        category = escape(product.category.as_ref()),
        stars = stars(product),
        rating = product.rating,
        brand = product.brand.as_ref().map_or_else(String::new, |brand| {
            format!(
                "<span class=\"detail-brand\">Brand: {}</span>",
                escape(brand.as_ref()),
            )
        }),
    )
    .expect("infallible");

    write!(
        info,
        "<div class=\"detail-pricing\">\
         <span class=\"detail-price\">${price}</span>{was}</div>",
        price = product.price,
        was = product
            .price
            .before_discount(product.discount)
            .map_or_else(String::new, |was| {
                format!(
                    "<span class=\"was-price\">${was}</span>\
                     <span class=\"save-note\">Save {save}%</span>",
                    save = product.discount.round(),
                )
            }),
    )
    .expect("infallible");

    write!(
        info,
        "<div class=\"detail-availability\">{badge}</div>\
         <section class=\"detail-description\">\
         <h2>Description</h2>\
         <p>{description}</p>\
         </section>",
        badge = availability_badge(product.stock),
        description = escape(product.description.as_ref()),
    )
    .expect("infallible");

    let main = format!(
        "<nav class=\"breadcrumb\">\
         <a href=\"/\">Home</a> / <a href=\"/products\">Products</a> / \
         <span>{title}</span>\
         </nav>\
         <article class=\"detail\">\
         <div class=\"detail-media\">{carousel}</div>\
         <div class=\"detail-info\">{info}</div>\
         </article>",
        carousel = carousel::render(product, image),
    );

    layout(product.title.as_ref(), &main)
}

/// Renders the five-star strip of the provided [`Product`]'s rating.
fn stars(product: &Product) -> String {
    let earned = product.rating.stars();
    (0..rating::MAX_STARS)
        .map(|i| {
            if i < earned {
                "<span class=\"star filled\">&#9733;</span>"
            } else {
                "<span class=\"star\">&#9734;</span>"
            }
        })
        .collect()
}
