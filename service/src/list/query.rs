//! URL query (de)serialization of the list view [`State`].

use std::fmt::Write as _;

use common::{pagination, Window};
use serde::Deserialize;

use crate::domain::Category;

use super::{Selection, SortOrder, State};

/// URL query parameters of the product listing page.
///
/// Kept as raw strings so that unrecognized values decode to the defaults
/// instead of failing the whole request.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Params {
    /// Slug of the selected category.
    pub category: Option<String>,

    /// Requested sort order (`asc` or `desc`).
    pub sort: Option<String>,

    /// Number of items revealed so far.
    pub count: Option<String>,
}

impl Params {
    /// Decodes these [`Params`] into a [`State`], validating the category
    /// against the known `categories`.
    ///
    /// Absent or unrecognized values fall back to the defaults.
    #[must_use]
    pub fn decode(&self, categories: &[Category]) -> State {
        let category = self
            .category
            .as_deref()
            .and_then(|slug| {
                categories.iter().find(|c| AsRef::<str>::as_ref(&c.slug) == slug)
            })
            .map_or(Selection::All, |c| Selection::Only(c.slug.clone()));
        let sort = self
            .sort
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let shown = self
            .count
            .as_deref()
            .and_then(|count| count.parse().ok())
            .map_or_else(Window::new, Window::of);

        State {
            category,
            sort,
            shown,
        }
    }
}

/// Encodes the provided [`State`] as a URL query string.
///
/// Parameters equal to their defaults are omitted entirely, so the default
/// [`State`] encodes to an empty string. The inverse of [`Params::decode()`].
#[expect(clippy::missing_panics_doc, reason = "writing to `String`")]
#[must_use]
pub fn encode(state: &State) -> String {
    let mut query = String::new();
    let mut push = |query: &mut String, key: &str, value: &str| {
        if !query.is_empty() {
            query.push('&');
        }
        write!(query, "{key}={value}").expect("infallible");
    };

    if let Selection::Only(slug) = &state.category {
        push(&mut query, "category", slug.as_ref());
    }
    match state.sort {
        SortOrder::Unsorted => {}
        sort @ (SortOrder::PriceAscending | SortOrder::PriceDescending) => {
            push(&mut query, "sort", &sort.to_string());
        }
    }
    if state.shown.count() > pagination::STEP {
        push(&mut query, "count", &state.shown.count().to_string());
    }

    query
}

#[cfg(test)]
mod spec {
    use common::Window;

    use crate::testing;

    use super::{encode, Params, Selection, SortOrder, State};

    fn categories() -> Vec<crate::domain::Category> {
        vec![
            testing::category("beauty", "Beauty"),
            testing::category("electronics", "Electronics"),
        ]
    }

    #[test]
    fn default_state_encodes_to_empty_query() {
        assert_eq!(encode(&State::default()), "");
    }

    #[test]
    fn encodes_non_default_parameters_only() {
        let state = State {
            category: Selection::Only("electronics".parse().unwrap()),
            sort: SortOrder::PriceDescending,
            shown: Window::new(),
        };

        assert_eq!(encode(&state), "category=electronics&sort=desc");

        let sorted_only = State {
            sort: SortOrder::PriceAscending,
            ..State::default()
        };
        assert_eq!(encode(&sorted_only), "sort=asc");

        let grown = State {
            shown: Window::of(30),
            ..State::default()
        };
        assert_eq!(encode(&grown), "count=30");
    }

    #[test]
    fn round_trips_through_params() {
        let state = State {
            category: Selection::Only("electronics".parse().unwrap()),
            sort: SortOrder::PriceDescending,
            shown: Window::of(20),
        };

        let params = Params {
            category: Some("electronics".to_owned()),
            sort: Some("desc".to_owned()),
            count: Some("20".to_owned()),
        };

        assert_eq!(params.decode(&categories()), state);
        assert_eq!(encode(&state), "category=electronics&sort=desc&count=20");

        assert_eq!(Params::default().decode(&categories()), State::default());
    }

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        let params = Params {
            category: Some("not-a-category".to_owned()),
            sort: Some("sideways".to_owned()),
            count: Some("three".to_owned()),
        };

        let state = params.decode(&categories());

        assert_eq!(state.category, Selection::All);
        assert_eq!(state.sort, SortOrder::Unsorted);
        assert_eq!(state.shown, Window::new());
    }
}
