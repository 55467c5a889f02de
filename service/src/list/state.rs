//! List view [`State`] and its derivation.

use common::Window;
use strum::{Display, EnumString};

use crate::domain::{category, Product};

/// View state of the product list for one page visit.
///
/// Reconstructed from the URL query on load and re-encoded on every change.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    /// Category [`Selection`] narrowing the list.
    pub category: Selection,

    /// [`SortOrder`] applied to the narrowed list.
    pub sort: SortOrder,

    /// Reveal [`Window`] over the derived list.
    pub shown: Window,
}

/// Category selection of a [`State`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Selection {
    /// All the products, without filtering.
    #[default]
    All,

    /// Only the products of a single category.
    Only(category::Slug),
}

impl Selection {
    /// Indicates whether the provided [`Product`] matches this [`Selection`].
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(slug) => product.category == *slug,
        }
    }
}

/// Order of products in the list.
#[derive(
    Clone, Copy, Debug, Default, Display, EnumString, Eq, Hash, PartialEq,
)]
pub enum SortOrder {
    /// Original upstream fetch order.
    #[default]
    #[strum(serialize = "none")]
    Unsorted,

    /// Cheapest products first.
    #[strum(serialize = "asc")]
    PriceAscending,

    /// Most expensive products first.
    #[strum(serialize = "desc")]
    PriceDescending,
}

/// Derives the list of `products` visible under the provided [`Selection`]
/// and [`SortOrder`].
///
/// Pure: recomputed whole whenever any input changes, never patched
/// incrementally. Sorting is stable, so equally priced products keep their
/// fetch order.
#[must_use]
pub fn derive<'p>(
    products: &'p [Product],
    category: &Selection,
    sort: SortOrder,
) -> Vec<&'p Product> {
    let mut derived = products
        .iter()
        .filter(|p| category.matches(p))
        .collect::<Vec<_>>();

    match sort {
        SortOrder::Unsorted => {}
        SortOrder::PriceAscending => derived.sort_by_key(|p| p.price),
        SortOrder::PriceDescending => {
            derived.sort_by(|a, b| b.price.cmp(&a.price));
        }
    }

    derived
}

#[cfg(test)]
mod spec {
    use crate::testing;

    use super::{derive, Selection, SortOrder};

    #[test]
    fn derivation_is_pure() {
        let products = testing::products(25);
        let category = Selection::All;

        let first = derive(&products, &category, SortOrder::PriceAscending);
        let second = derive(&products, &category, SortOrder::PriceAscending);

        assert_eq!(first, second);
    }

    #[test]
    fn filters_by_category() {
        let products = vec![
            testing::product(1, "beauty", "10"),
            testing::product(2, "groceries", "5"),
            testing::product(3, "beauty", "7"),
        ];

        let only = Selection::Only("beauty".parse().unwrap());
        let derived = derive(&products, &only, SortOrder::Unsorted);

        assert_eq!(
            derived.iter().map(|p| u64::from(p.id)).collect::<Vec<_>>(),
            [1, 3],
        );

        let none = Selection::Only("furniture".parse().unwrap());
        assert!(derive(&products, &none, SortOrder::Unsorted).is_empty());
    }

    #[test]
    fn sort_directions_reverse_each_other_without_ties() {
        let products = vec![
            testing::product(1, "beauty", "30"),
            testing::product(2, "beauty", "10"),
            testing::product(3, "beauty", "20"),
        ];

        let mut ascending =
            derive(&products, &Selection::All, SortOrder::PriceAscending);
        let descending =
            derive(&products, &Selection::All, SortOrder::PriceDescending);

        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn sorting_keeps_fetch_order_of_ties() {
        let products = vec![
            testing::product(1, "beauty", "10"),
            testing::product(2, "beauty", "5"),
            testing::product(3, "beauty", "10"),
            testing::product(4, "beauty", "5"),
        ];

        let derived =
            derive(&products, &Selection::All, SortOrder::PriceAscending);

        assert_eq!(
            derived.iter().map(|p| u64::from(p.id)).collect::<Vec<_>>(),
            [2, 4, 1, 3],
        );
    }

    #[test]
    fn unsorted_keeps_fetch_order() {
        let products = vec![
            testing::product(1, "beauty", "30"),
            testing::product(2, "beauty", "10"),
        ];

        let derived = derive(&products, &Selection::All, SortOrder::Unsorted);

        assert_eq!(
            derived.iter().map(|p| u64::from(p.id)).collect::<Vec<_>>(),
            [1, 2],
        );
    }
}
