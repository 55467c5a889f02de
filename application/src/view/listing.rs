//! Product listing page markup.

use std::fmt::Write as _;

use common::Window;
use service::{
    domain::{Category, Product},
    list::{self, Selection, SortOrder, State},
};

use super::{card, escape, layout};

/// Input of the listing page render.
#[derive(Debug)]
pub struct Listing<'a> {
    /// All the known categories, for the filter controls.
    pub categories: &'a [Category],

    /// Current list view [`State`].
    pub state: &'a State,

    /// Currently visible slice of the derived list.
    pub visible: &'a [Product],

    /// Total size of the derived list.
    pub total: usize,

    /// Size of the whole fetched collection, before filtering.
    pub fetched: usize,

    /// Indicator whether the derived list extends beyond the visible slice.
    pub has_more: bool,
}

/// Renders the product listing page.
#[expect(clippy::missing_panics_doc, reason = "writing to `String`")]
#[must_use]
pub fn render(listing: &Listing<'_>) -> String {
    let mut main = String::with_capacity(8192);

    write!(
        main,
        "<section class=\"listing-header\">\
         <h1>Discover Amazing Products</h1>\
         <p>Browse through our curated collection of {fetched} products</p>\
         </section>\
         {filters}\
         <p class=\"results-count\">\
         Showing {shown} of {total} products\
         </p>",
        fetched = listing.fetched,
        filters = filters(listing),
        shown = listing.visible.len(),
        total = listing.total,
    )
    .expect("infallible");

    if listing.total == 0 {
        main.push_str(
            "<section class=\"empty-state\">\
             <h2>No products found</h2>\
             <p>Try adjusting your filters</p>\
             </section>",
        );
    } else {
        main.push_str("<div class=\"grid\">");
        for product in listing.visible {
            main.push_str(&card::render(product));
        }
        main.push_str("</div>");

        write!(
            main,
            "<div class=\"sentinel\" id=\"list-sentinel\" \
             data-visibility-threshold=\"0.1\" \
             data-visibility-margin=\"100\"></div>\
             <template id=\"card-skeleton\">{skeleton}</template>",
            skeleton = card::skeleton(),
        )
        .expect("infallible");

        if listing.has_more {
            write!(
                main,
                "<div class=\"load-more\">\
                 <a class=\"button\" href=\"{href}\" rel=\"nofollow\">\
                 Load More Products\
                 </a>\
                 </div>",
                href = href(&State {
                    shown: Window::of(
                        listing.state.shown.count() + common::pagination::STEP,
                    ),
                    ..listing.state.clone()
                }),
            )
            .expect("infallible");
        } else {
            main.push_str(
                "<p class=\"end-of-results\">You've reached the end</p>",
            );
        }
    }

    layout("Products - Browse Our Collection", &main)
}

/// Renders the filter controls of the listing page.
fn filters(listing: &Listing<'_>) -> String {
    let state = listing.state;
    let mut html = String::with_capacity(2048);

    html.push_str("<section class=\"filters\"><div class=\"filter-group\">");
    html.push_str("<span class=\"filter-label\">Category</span>");
    push_option(
        &mut html,
        "All Categories",
        &State {
            category: Selection::All,
            sort: state.sort,
            shown: Window::new(),
        },
        state.category == Selection::All,
    );
    for category in listing.categories {
        push_option(
            &mut html,
            category.name.as_ref(),
            &State {
                category: Selection::Only(category.slug.clone()),
                sort: state.sort,
                shown: Window::new(),
            },
            state.category == Selection::Only(category.slug.clone()),
        );
    }
    html.push_str("</div><div class=\"filter-group\">");
    html.push_str("<span class=\"filter-label\">Sort by Price</span>");
    for (label, sort) in [
        ("Default", SortOrder::Unsorted),
        ("Price: Low to High", SortOrder::PriceAscending),
        ("Price: High to Low", SortOrder::PriceDescending),
    ] {
        push_option(
            &mut html,
            label,
            &State {
                category: state.category.clone(),
                sort,
                shown: Window::new(),
            },
            state.sort == sort,
        );
    }
    html.push_str("</div>");

    if *state != State::default() {
        html.push_str(
            "<a class=\"clear-filters\" href=\"/products\">Clear filters</a>",
        );
    }
    html.push_str("</section>");

    html
}

/// Pushes a single filter option link into `html`.
fn push_option(html: &mut String, label: &str, target: &State, active: bool) {
    let class = if active {
        "filter-option active"
    } else {
        "filter-option"
    };
    write!(
        html,
        "<a class=\"{class}\" href=\"{href}\">{label}</a>",
        href = href(target),
        label = escape(label),
    )
    .expect("infallible");
}

/// Returns the listing page URL encoding the provided [`State`].
fn href(state: &State) -> String {
    let query = list::query::encode(state);
    if query.is_empty() {
        "/products".to_owned()
    } else {
        format!("/products?{}", escape(&query))
    }
}
