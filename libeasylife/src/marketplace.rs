//! Marketplace controller
//!
//! `Marketplace` owns the catalog, the session and the navigator, and is
//! the only place they change. Front ends hold one value of it and call its
//! action methods; everything else reads through the accessors.
//!
//! # Example
//!
//! ```
//! use libeasylife::{Marketplace, Config, Moment, Page};
//! use libeasylife::listing::ProductDraft;
//! use libeasylife::session::RegistrationRequest;
//!
//! # fn example() -> libeasylife::Result<()> {
//! let mut market = Marketplace::from_config(&Config::default());
//! let now = Moment::now();
//!
//! market.register(RegistrationRequest::seller("Ann", "EasyLife"))?;
//!
//! let mut draft = ProductDraft::new();
//! draft.name = "Lamp".to_string();
//! draft.price = "999".to_string();
//! draft.confirm_scan();
//! market.create_product(&draft, &now)?;
//!
//! market.tick(&now.after(market.navigator().delay()));
//! assert_eq!(market.current_page(), Page::Catalog);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::{Config, MarketplaceConfig};
use crate::error::Result;
use crate::listing::ProductDraft;
use crate::navigation::{self, Navigator};
use crate::session::{RegistrationRequest, Session};
use crate::types::{AccountRole, Moment, Page, Product};
use crate::views::{self, CatalogEntry, OrdersView};

#[derive(Debug, Clone, PartialEq)]
pub struct Marketplace {
    catalog: Catalog,
    session: Session,
    navigator: Navigator,
    seller_passcode: String,
    default_image_url: String,
}

impl Default for Marketplace {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Marketplace {
    pub fn from_config(config: &Config) -> Self {
        let catalog = if config.marketplace.seed_catalog {
            Catalog::seeded()
        } else {
            Catalog::new()
        };

        Self::from_parts(
            catalog,
            Session::new(),
            Navigator::new(config.navigation.transition()),
            &config.marketplace,
        )
    }

    /// Assemble a marketplace from existing state.
    ///
    /// The parts are taken as given; no guard is re-checked against the
    /// session.
    pub fn from_parts(
        catalog: Catalog,
        session: Session,
        navigator: Navigator,
        config: &MarketplaceConfig,
    ) -> Self {
        Self {
            catalog,
            session,
            navigator,
            seller_passcode: config.seller_passcode.clone(),
            default_image_url: config.default_image_url.clone(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn role(&self) -> Option<AccountRole> {
        self.session.role()
    }

    pub fn current_page(&self) -> Page {
        self.navigator.current()
    }

    pub fn is_transitioning(&self) -> bool {
        self.navigator.is_transitioning()
    }

    pub fn default_image_url(&self) -> &str {
        &self.default_image_url
    }

    /// Navigation bar items for the current role
    pub fn visible_pages(&self) -> Vec<Page> {
        navigation::visible_pages(self.session.role())
    }

    /// Request a page switch, checked against the current role
    pub fn navigate(&mut self, target: Page, now: &Moment) -> Result<()> {
        self.navigator
            .request(target, self.session.role(), now.instant)?;
        Ok(())
    }

    /// Advance time; completes a due page transition
    pub fn tick(&mut self, now: &Moment) -> Option<Page> {
        self.navigator.poll(now.instant)
    }

    /// Register the session; see [`Session::register`]
    pub fn register(&mut self, request: RegistrationRequest) -> Result<()> {
        self.session.register(request, &self.seller_passcode)?;
        Ok(())
    }

    /// Create a product from a seller's draft and head to the catalog.
    ///
    /// Any failure leaves catalog, session and navigation unchanged.
    pub fn create_product(&mut self, draft: &ProductDraft, now: &Moment) -> Result<&Product> {
        if !self.session.is_seller() {
            warn!(role = ?self.session.role(), "Listing rejected: not a seller");
            return Err(crate::error::ListingError::NotSeller.into());
        }
        let product = draft
            .to_new_product(&self.default_image_url)
            .inspect_err(|e| warn!(error = %e, "Listing rejected"))?;

        // Catalog is reachable for every role, so this cannot fail
        self.navigator
            .request(Page::Catalog, self.session.role(), now.instant)?;

        let product = self.catalog.append(product, now.wall);
        info!(product_id = %product.id, "Listing published");
        Ok(product)
    }

    /// Purchase is not implemented; the request is only recorded in the log
    pub fn purchase(&self, product_id: &str) {
        debug!(product_id, buyer = %self.session.name(), "Purchase requested");
    }

    /// Catalog cards for the current role
    pub fn catalog_entries(&self) -> Vec<CatalogEntry> {
        views::render_catalog(self.catalog.products(), self.session.role())
    }

    pub fn orders(&self) -> OrdersView {
        views::render_orders()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EasyLifeError, ListingError, RegistrationError};
    use std::time::Duration;

    fn seller_market() -> Marketplace {
        let mut market = Marketplace::default();
        market
            .register(RegistrationRequest::seller("Ann", "EasyLife"))
            .unwrap();
        market
    }

    fn lamp_draft() -> ProductDraft {
        ProductDraft {
            name: "Lamp".to_string(),
            price: "999".to_string(),
            description: "desc".to_string(),
            image: String::new(),
            qr_scanned: true,
        }
    }

    #[test]
    fn test_initial_state() {
        let market = Marketplace::default();
        assert_eq!(market.current_page(), Page::Home);
        assert_eq!(market.catalog().len(), 3);
        assert_eq!(market.role(), None);
        assert!(!market.is_transitioning());
    }

    #[test]
    fn test_from_parts_keeps_state() {
        let mut session = Session::new();
        session
            .register(RegistrationRequest::buyer("Bob"), "EasyLife")
            .unwrap();
        let mut navigator = Navigator::new(Duration::ZERO);
        navigator
            .request(Page::Orders, session.role(), std::time::Instant::now())
            .unwrap();

        let market = Marketplace::from_parts(
            Catalog::new(),
            session,
            navigator,
            &Config::default().marketplace,
        );
        assert_eq!(market.current_page(), Page::Orders);
        assert_eq!(market.role(), Some(AccountRole::Buyer));
        assert!(market.catalog().is_empty());
    }

    #[test]
    fn test_unseeded_catalog() {
        let mut config = Config::default();
        config.marketplace.seed_catalog = false;
        assert!(Marketplace::from_config(&config).catalog().is_empty());
    }

    #[test]
    fn test_create_product_scenario() {
        let mut market = seller_market();
        let now = Moment::now();
        let seed_ids: Vec<String> = market.catalog().products().iter().map(|p| p.id.clone()).collect();

        market.create_product(&lamp_draft(), &now).unwrap();

        let products = market.catalog().products();
        assert_eq!(products.len(), 4);
        assert_eq!(products[3].name, "Lamp");
        assert_eq!(products[3].price, 999.0);
        assert_eq!(products[3].image, crate::catalog::DEFAULT_IMAGE_URL);
        assert_eq!(products[3].seller_id, crate::catalog::DEMO_SELLER_ID);
        assert!(!seed_ids.contains(&products[3].id));

        assert_eq!(market.tick(&now.after(Duration::from_millis(300))), Some(Page::Catalog));
        assert_eq!(market.current_page(), Page::Catalog);
    }

    #[test]
    fn test_create_product_without_scan_is_noop() {
        let mut market = seller_market();
        let before = market.clone();
        let mut draft = lamp_draft();
        draft.qr_scanned = false;

        let result = market.create_product(&draft, &Moment::now());

        assert!(matches!(result, Err(EasyLifeError::Listing(ListingError::QrNotScanned))));
        assert_eq!(market, before);
    }

    #[test]
    fn test_create_product_requires_seller() {
        let mut market = Marketplace::default();
        let result = market.create_product(&lamp_draft(), &Moment::now());
        assert!(matches!(result, Err(EasyLifeError::Listing(ListingError::NotSeller))));
        assert_eq!(market.catalog().len(), 3);
    }

    #[test]
    fn test_invalid_price_is_rejected() {
        let mut market = seller_market();
        let mut draft = lamp_draft();
        draft.price = "abc".to_string();

        let result = market.create_product(&draft, &Moment::now());
        assert!(matches!(result, Err(EasyLifeError::Listing(ListingError::InvalidPrice(_)))));
        assert!(!market.is_transitioning());
    }

    #[test]
    fn test_wrong_seller_code_scenario() {
        let mut market = Marketplace::default();
        let now = Moment::now();
        market.navigate(Page::Profile, &now).unwrap();
        market.tick(&now.after(Duration::from_millis(300)));
        let before = market.clone();

        let result = market.register(RegistrationRequest::seller("Ann", "wrong"));

        assert!(matches!(
            result,
            Err(EasyLifeError::Registration(RegistrationError::InvalidSellerCode))
        ));
        assert_eq!(market, before);
        assert_eq!(market.current_page(), Page::Profile);
    }

    #[test]
    fn test_configured_passcode() {
        let mut config = Config::default();
        config.marketplace.seller_passcode = "Secret42".to_string();
        let mut market = Marketplace::from_config(&config);

        assert!(market.register(RegistrationRequest::seller("Ann", "EasyLife")).is_err());
        assert!(market.register(RegistrationRequest::seller("Ann", "Secret42")).is_ok());
    }

    #[test]
    fn test_navigate_guard_uses_session_role() {
        let mut market = Marketplace::default();
        let now = Moment::now();
        assert!(market.navigate(Page::CreateProduct, &now).is_err());

        market.register(RegistrationRequest::buyer("Bob")).unwrap();
        assert!(market.navigate(Page::CreateProduct, &now).is_err());
        assert_eq!(market.visible_pages().len(), 4);
    }

    #[test]
    fn test_seller_can_open_create_product() {
        let mut market = seller_market();
        let now = Moment::now();
        market.navigate(Page::CreateProduct, &now).unwrap();
        market.tick(&now.after(Duration::from_millis(300)));
        assert_eq!(market.current_page(), Page::CreateProduct);
    }

    #[test]
    fn test_catalog_entries_follow_role() {
        let mut market = Marketplace::default();
        assert!(market.catalog_entries().iter().all(|e| !e.can_purchase));

        market.register(RegistrationRequest::buyer("Bob")).unwrap();
        assert!(market.catalog_entries().iter().all(|e| e.can_purchase));
    }

    #[test]
    fn test_purchase_changes_nothing() {
        let mut market = Marketplace::default();
        market.register(RegistrationRequest::buyer("Bob")).unwrap();
        let before = market.clone();

        market.purchase("1");

        assert_eq!(market, before);
        assert_eq!(market.orders(), OrdersView::Empty);
    }
}
