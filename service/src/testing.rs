//! Helpers for constructing domain values in tests.

use common::{Percent, Stock};

use crate::domain::{product, Category, Product};

/// Creates a [`Product`] with the provided `id`, `category` and `price`.
pub(crate) fn product(id: u64, category: &str, price: &str) -> Product {
    Product {
        id: product::Id::from(id),
        title: product::Title::new(format!("Product {id}")).unwrap(),
        description: product::Description::new(format!(
            "Description of product {id}",
        ))
        .unwrap(),
        category: category.parse().unwrap(),
        price: price.parse().unwrap(),
        discount: Percent::ZERO,
        rating: "4.5".parse().unwrap(),
        stock: Stock::from(20),
        brand: None,
        thumbnail: product::ImageUrl::new(format!(
            "https://cdn.example.com/{id}/thumbnail.webp",
        ))
        .unwrap(),
        images: vec![
            product::ImageUrl::new(format!(
                "https://cdn.example.com/{id}/1.webp",
            ))
            .unwrap(),
            product::ImageUrl::new(format!(
                "https://cdn.example.com/{id}/2.webp",
            ))
            .unwrap(),
        ],
    }
}

/// Creates `count` [`Product`]s with sequential IDs and prices.
pub(crate) fn products(count: usize) -> Vec<Product> {
    (1..=count as u64)
        .map(|id| product(id, "beauty", &id.to_string()))
        .collect()
}

/// Creates a [`Category`] with the provided `slug` and `name`.
pub(crate) fn category(slug: &str, name: &str) -> Category {
    Category {
        slug: slug.parse().unwrap(),
        name: name.parse().unwrap(),
    }
}
