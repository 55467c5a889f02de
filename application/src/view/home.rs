//! Home page markup.

use super::layout;

/// Renders the home page.
#[must_use]
pub fn render() -> String {
    layout(
        "Home - Product Store",
        "<section class=\"hero\">\
         <h1>Welcome to <span class=\"accent\">ProductStore</span></h1>\
         <p>Discover amazing products at unbeatable prices. Browse through \
         our curated collection and find exactly what you're looking \
         for.</p>\
         <a class=\"button\" href=\"/products\">Browse Products</a>\
         </section>\
         <section class=\"features\">\
         <div class=\"feature\">\
         <h3>Wide Selection</h3>\
         <p>Browse through hundreds of products across multiple \
         categories</p>\
         </div>\
         <div class=\"feature\">\
         <h3>Best Prices</h3>\
         <p>Competitive prices with regular discounts and special \
         offers</p>\
         </div>\
         <div class=\"feature\">\
         <h3>Fast Loading</h3>\
         <p>Optimized for speed with instant page loads and smooth \
         navigation</p>\
         </div>\
         </section>\
         <section class=\"cta\">\
         <h2>Ready to Start Shopping?</h2>\
         <p>Explore our collection and find your perfect product today</p>\
         <a class=\"button inverted\" href=\"/products\">\
         View All Products\
         </a>\
         </section>",
    )
}

#[cfg(test)]
mod spec {
    use super::render;

    #[test]
    fn links_to_the_listing() {
        let html = render();

        assert!(html.contains("href=\"/products\""));
        assert!(html.contains("Welcome to"));
    }
}
