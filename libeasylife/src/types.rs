//! Core types for EasyLife

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry.
///
/// Products are only created through [`crate::catalog::Catalog::append`] and
/// are never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub description: String,
    pub seller_id: String,
}

/// Product fields supplied by a seller; id and seller are assigned on append.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub image: String,
    pub description: String,
}

/// Role of a registered account.
///
/// An unregistered session has no role at all, see [`crate::session::Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Buyer,
    Seller,
}

impl AccountRole {
    /// Badge text shown on the profile page
    pub fn label(&self) -> &'static str {
        match self {
            AccountRole::Buyer => "Покупатель",
            AccountRole::Seller => "Продавец",
        }
    }

    /// The other choice in the registration form
    pub fn toggled(self) -> Self {
        match self {
            AccountRole::Buyer => AccountRole::Seller,
            AccountRole::Seller => AccountRole::Buyer,
        }
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountRole::Buyer => write!(f, "buyer"),
            AccountRole::Seller => write!(f, "seller"),
        }
    }
}

/// Page identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Catalog,
    Orders,
    Profile,
    CreateProduct,
}

impl Page {
    /// Every page in navigation bar order
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Catalog,
        Page::Orders,
        Page::CreateProduct,
        Page::Profile,
    ];

    /// Navigation bar label
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Главная",
            Page::Catalog => "Каталог",
            Page::Orders => "Мои заказы",
            Page::Profile => "Личный кабинет",
            Page::CreateProduct => "Создать товар",
        }
    }

    /// Stable identifier used in logs
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Catalog => "catalog",
            Page::Orders => "orders",
            Page::Profile => "profile",
            Page::CreateProduct => "create-product",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// A point in time as seen by the event loop.
///
/// The monotonic instant drives navigation deadlines; the wall-clock part
/// seeds product ids. Carrying both in one value keeps every state
/// transition a function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moment {
    pub instant: Instant,
    pub wall: DateTime<Utc>,
}

impl Moment {
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
            wall: Utc::now(),
        }
    }

    /// The same moment shifted forward by `delta` on both clocks
    pub fn after(&self, delta: Duration) -> Self {
        let wall_delta = chrono::Duration::from_std(delta).unwrap_or(chrono::Duration::zero());
        Self {
            instant: self.instant + delta,
            wall: self.wall + wall_delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_with_camel_case_fields() {
        let product = Product {
            id: "1".to_string(),
            name: "Лампа".to_string(),
            price: 999.0,
            image: "https://example.com/lamp.jpg".to_string(),
            description: "desc".to_string(),
            seller_id: "currentUser".to_string(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["sellerId"], "currentUser");
        assert_eq!(json["price"], 999.0);
    }

    #[test]
    fn test_role_toggle() {
        assert_eq!(AccountRole::Buyer.toggled(), AccountRole::Seller);
        assert_eq!(AccountRole::Seller.toggled(), AccountRole::Buyer);
    }

    #[test]
    fn test_page_slugs() {
        assert_eq!(Page::CreateProduct.to_string(), "create-product");
        assert_eq!(Page::Home.slug(), "home");
    }

    #[test]
    fn test_moment_after_advances_both_clocks() {
        let start = Moment::now();
        let later = start.after(Duration::from_millis(300));

        assert_eq!(later.instant - start.instant, Duration::from_millis(300));
        assert_eq!((later.wall - start.wall).num_milliseconds(), 300);
    }
}
