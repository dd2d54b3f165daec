//! Product catalog store
//!
//! An append-only, order-preserving list of products. Ids are derived from
//! the wall clock in milliseconds and bumped forward on collision, so two
//! products created within the same millisecond still get distinct ids.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::types::{NewProduct, Product};

/// Image used when a seller leaves the image URL blank
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400";

/// Seller id stamped on every product created in this session
pub const DEMO_SELLER_ID: &str = "currentUser";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// An empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The three demo products every session starts with
    pub fn seeded() -> Self {
        Self {
            products: seed_products(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Append a product to the end of the catalog.
    ///
    /// No de-duplication happens on name; only the id is guaranteed unique.
    pub fn append(&mut self, product: NewProduct, now: DateTime<Utc>) -> &Product {
        let id = self.next_id(now);
        info!(product_id = %id, name = %product.name, price = product.price, "Product added to catalog");

        self.products.push(Product {
            id,
            name: product.name,
            price: product.price,
            image: product.image,
            description: product.description,
            seller_id: DEMO_SELLER_ID.to_string(),
        });
        &self.products[self.products.len() - 1]
    }

    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        // Later appends never go backwards even if the wall clock does
        if let Some(max) = self
            .products
            .iter()
            .filter_map(|p| p.id.parse::<i64>().ok())
            .max()
        {
            if candidate <= max {
                candidate = max + 1;
            }
        }
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Смартфон Premium X".to_string(),
            price: 45990.0,
            image: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=400".to_string(),
            description: "Флагманский смартфон с передовыми технологиями".to_string(),
            seller_id: "seller1".to_string(),
        },
        Product {
            id: "2".to_string(),
            name: "Беспроводные наушники Pro".to_string(),
            price: 12990.0,
            image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400".to_string(),
            description: "Премиальное звучание и шумоподавление".to_string(),
            seller_id: "seller1".to_string(),
        },
        Product {
            id: "3".to_string(),
            name: "Умные часы Sport".to_string(),
            price: 18990.0,
            image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400".to_string(),
            description: "Мониторинг здоровья и активности 24/7".to_string(),
            seller_id: "seller2".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn lamp() -> NewProduct {
        NewProduct {
            name: "Lamp".to_string(),
            price: 999.0,
            image: DEFAULT_IMAGE_URL.to_string(),
            description: "desc".to_string(),
        }
    }

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_seeded_catalog_has_three_products() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 3);

        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(catalog.products()[2].seller_id, "seller2");
    }

    #[test]
    fn test_append_uses_timestamp_id_and_sentinel_seller() {
        let mut catalog = Catalog::seeded();
        let product = catalog.append(lamp(), at(1_700_000_000_123)).clone();

        assert_eq!(product.id, "1700000000123");
        assert_eq!(product.seller_id, DEMO_SELLER_ID);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.products()[3], product);
    }

    #[test]
    fn test_same_millisecond_appends_get_distinct_ids() {
        let mut catalog = Catalog::new();
        let now = at(1_700_000_000_000);

        let first = catalog.append(lamp(), now).id.clone();
        let second = catalog.append(lamp(), now).id.clone();

        assert_ne!(first, second);
        assert_eq!(second, "1700000000001");
    }

    #[test]
    fn test_clock_going_backwards_still_yields_fresh_ids() {
        let mut catalog = Catalog::new();
        catalog.append(lamp(), at(2_000));
        let id = catalog.append(lamp(), at(1_000)).id.clone();

        assert_eq!(id, "2001");
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let mut catalog = Catalog::new();
        catalog.append(lamp(), at(1));
        catalog.append(lamp(), at(2));

        assert_eq!(catalog.len(), 2);
        assert!(catalog.products().iter().all(|p| p.name == "Lamp"));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.get("2").map(|p| p.name.as_str()), Some("Беспроводные наушники Pro"));
        assert!(catalog.get("42").is_none());
    }
}
