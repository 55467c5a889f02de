//! Product card markup.

use service::domain::Product;

use super::{availability_badge, escape};

/// Renders a product card linking to the product's detail page.
#[must_use]
pub fn render(product: &Product) -> String {
    let discount = if product.discount.is_zero() {
        String::new()
    } else {
        format!(
            "<div class=\"card-discount\">{}% off</div>",
            product.discount,
        )
    };

    format!(
        "<a class=\"card\" href=\"/products/{id}\">\
         <div class=\"card-media\">\
         <img src=\"{thumbnail}\" alt=\"{title}\" loading=\"lazy\">\
         {badge}\
         </div>\
         <div class=\"card-body\">\
         <h3>{title}</h3>\
         <p class=\"card-description\">{description}</p>\
         <div class=\"card-pricing\">\
         <span class=\"card-price\">${price}</span>\
         {discount}\
         <span class=\"card-rating\">&#9733; {rating}</span>\
         </div>\
         <div class=\"card-category\">{category}</div>\
         </div>\
         </a>",
        id = product.id,
        thumbnail = escape(product.thumbnail.as_ref()),
        title = escape(product.title.as_ref()),
        badge = availability_badge(product.stock),
        description = escape(product.description.as_ref()),
        price = product.price,
        rating = product.rating,
        category = escape(product.category.as_ref()),
    )
}

/// Renders a static skeleton placeholder shaped like a product card.
#[must_use]
pub fn skeleton() -> String {
    "<div class=\"card card-skeleton\">\
     <div class=\"card-media shimmer\"></div>\
     <div class=\"card-body\">\
     <div class=\"skeleton-line shimmer\"></div>\
     <div class=\"skeleton-line shimmer short\"></div>\
     <div class=\"skeleton-line shimmer price\"></div>\
     </div>\
     </div>"
        .to_owned()
}

#[cfg(test)]
mod spec {
    use common::Stock;

    use super::{render, skeleton};

    fn product(stock: u32, discount: &str) -> service::domain::Product {
        use service::domain::product::{Description, ImageUrl, Title};

        service::domain::Product {
            id: 7.into(),
            title: Title::new("Sample Product").unwrap(),
            description: Description::new("A sample product.").unwrap(),
            category: "beauty".parse().unwrap(),
            price: "9.99".parse().unwrap(),
            discount: discount.parse().unwrap(),
            rating: "4.5".parse().unwrap(),
            stock: Stock::from(stock),
            brand: None,
            thumbnail: ImageUrl::new("https://cdn.example.com/7.webp")
                .unwrap(),
            images: vec![],
        }
    }

    #[test]
    fn links_to_detail_page() {
        let html = render(&product(20, "0"));

        assert!(html.contains("href=\"/products/7\""));
        assert!(html.contains("$9.99"));
        assert!(html.contains("In Stock"));
    }

    #[test]
    fn shows_discount_note_only_when_discounted() {
        assert!(render(&product(20, "15.5")).contains("15.5% off"));
        assert!(!render(&product(20, "0")).contains("% off"));
    }

    #[test]
    fn badge_matches_stock_banding() {
        assert!(render(&product(0, "0")).contains("Out of Stock"));
        assert!(render(&product(5, "0")).contains("Low Stock (5 left)"));
    }

    #[test]
    fn skeleton_is_static() {
        assert_eq!(skeleton(), skeleton());
        assert!(skeleton().contains("card-skeleton"));
    }
}
