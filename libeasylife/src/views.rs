//! Read-only view models derived from marketplace state

use crate::money::format_price;
use crate::types::{AccountRole, Product};

/// One catalog card
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    /// Price with grouping and currency, e.g. `45 990 ₽`
    pub price_label: String,
    /// Buyers see a purchase button; it has no effect yet
    pub can_purchase: bool,
}

/// Build catalog cards in store order, one per product
pub fn render_catalog(products: &[Product], role: Option<AccountRole>) -> Vec<CatalogEntry> {
    let can_purchase = role == Some(AccountRole::Buyer);
    products
        .iter()
        .map(|product| CatalogEntry {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            price_label: format_price(product.price),
            can_purchase,
        })
        .collect()
}

/// Contents of the orders page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdersView {
    /// Nothing has ever been ordered
    Empty,
}

impl OrdersView {
    pub fn message(&self) -> &'static str {
        match self {
            OrdersView::Empty => "У вас пока нет заказов",
        }
    }
}

/// Orders are never created, so the page is always empty
pub fn render_orders() -> OrdersView {
    OrdersView::Empty
}
