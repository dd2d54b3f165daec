//! EasyLife - a marketplace demo with QR-tagged products
//!
//! This library holds the marketplace state and the rules for changing it:
//! the product catalog, buyer/seller registration, page navigation with its
//! transition delay, and product listing. Front ends render from it and
//! feed user intents back through [`Marketplace`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
pub mod marketplace;
pub mod money;
pub mod navigation;
pub mod session;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use error::{EasyLifeError, Result};
pub use marketplace::Marketplace;
pub use types::{AccountRole, Moment, NewProduct, Page, Product};
