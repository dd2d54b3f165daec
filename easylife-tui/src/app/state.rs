//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).
//! The marketplace itself lives in [`Marketplace`]; this module adds what
//! only the terminal needs: form contents, focus, overlays and the clock.

use libeasylife::listing::ProductDraft;
use libeasylife::session::RegistrationRequest;
use libeasylife::{AccountRole, Config, Marketplace, Moment, Page};

/// Root application state
///
/// This is the single source of truth for the entire application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Catalog, session and navigation
    pub market: Marketplace,

    /// Last time observed by the event loop
    pub now: Moment,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Registration form on the profile page
    pub registration: RegistrationForm,

    /// Create-product form
    pub listing: ListingForm,

    /// Catalog cursor
    pub catalog: CatalogState,

    /// Status bar state
    pub status: StatusBarState,

    /// Blocking notification; everything else waits until it is dismissed
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Fields of the registration form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Name,
    Role,
    Passcode,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub role: AccountRole,
    pub passcode: String,
    pub focus: RegistrationField,
}

/// Fields of the create-product form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    Name,
    Price,
    Description,
    Image,
    Scan,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingForm {
    pub draft: ProductDraft,
    pub focus: ListingField,
    /// The simulated scanner dialog is open
    pub scan_dialog_open: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    /// Index of the highlighted product
    pub cursor: usize,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: AccountRole::Buyer,
            passcode: String::new(),
            focus: RegistrationField::Name,
        }
    }
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            draft: ProductDraft::new(),
            focus: ListingField::Name,
            scan_dialog_open: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        // Detect environment for sensible defaults
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("EASYLIFE_TUI_NO_COLOR").is_err();

        // Terminals set up without colour get ASCII markers too
        let unicode_enabled = colors_enabled;

        let tick_rate_ms = std::env::var("EASYLIFE_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(50);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create application state from loaded configuration
    pub fn with_config(config: &Config) -> Self {
        Self {
            should_quit: false,
            market: Marketplace::from_config(config),
            now: Moment::now(),
            help_visible: false,
            registration: RegistrationForm::default(),
            listing: ListingForm::default(),
            catalog: CatalogState::default(),
            status: StatusBarState::default(),
            error: None,
            config: UiConfig::default(),
        }
    }

    /// Page currently shown
    pub fn page(&self) -> Page {
        self.market.current_page()
    }

    /// An overlay is capturing input
    pub fn has_overlay(&self) -> bool {
        self.error.is_some() || self.help_visible || self.listing.scan_dialog_open
    }

    /// Whether the focused control on the current page takes free text.
    ///
    /// Plain letters are typed rather than treated as shortcuts while true.
    pub fn is_editing_text(&self) -> bool {
        match self.page() {
            Page::Profile if !self.market.session().is_registered() => matches!(
                self.registration.focus,
                RegistrationField::Name | RegistrationField::Passcode
            ),
            Page::CreateProduct if self.market.session().is_seller() => matches!(
                self.listing.focus,
                ListingField::Name
                    | ListingField::Price
                    | ListingField::Description
                    | ListingField::Image
            ),
            _ => false,
        }
    }

    /// The description editor should receive key input
    pub fn description_focused(&self) -> bool {
        self.page() == Page::CreateProduct
            && self.market.session().is_seller()
            && self.listing.focus == ListingField::Description
            && !self.has_overlay()
    }
}

impl RegistrationForm {
    /// Focusable fields; the passcode is only asked of sellers
    pub fn fields(&self) -> Vec<RegistrationField> {
        let mut fields = vec![RegistrationField::Name, RegistrationField::Role];
        if self.role == AccountRole::Seller {
            fields.push(RegistrationField::Passcode);
        }
        fields.push(RegistrationField::Submit);
        fields
    }

    /// The submit button is enabled once a name is entered
    pub fn can_submit(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn focus_next(&mut self) {
        self.focus = cycle(&self.fields(), self.focus, 1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = cycle(&self.fields(), self.focus, -1);
    }

    pub fn to_request(&self) -> RegistrationRequest {
        match self.role {
            AccountRole::Buyer => RegistrationRequest::buyer(self.name.clone()),
            AccountRole::Seller => {
                RegistrationRequest::seller(self.name.clone(), self.passcode.clone())
            }
        }
    }

    /// Text buffer behind the focused field, if it takes text
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            RegistrationField::Name => Some(&mut self.name),
            RegistrationField::Passcode => Some(&mut self.passcode),
            RegistrationField::Role | RegistrationField::Submit => None,
        }
    }
}

impl ListingForm {
    const FIELDS: [ListingField; 6] = [
        ListingField::Name,
        ListingField::Price,
        ListingField::Description,
        ListingField::Image,
        ListingField::Scan,
        ListingField::Submit,
    ];

    pub fn focus_next(&mut self) {
        self.focus = cycle(&Self::FIELDS, self.focus, 1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = cycle(&Self::FIELDS, self.focus, -1);
    }

    /// Single-line text buffer behind the focused field.
    ///
    /// The description is multi-line and edited by its own widget.
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            ListingField::Name => Some(&mut self.draft.name),
            ListingField::Price => Some(&mut self.draft.price),
            ListingField::Image => Some(&mut self.draft.image),
            ListingField::Description | ListingField::Scan | ListingField::Submit => None,
        }
    }
}

fn cycle<T: Copy + PartialEq>(items: &[T], current: T, step: isize) -> T {
    let len = items.len() as isize;
    let index = items.iter().position(|item| *item == current).unwrap_or(0) as isize;
    items[(index + step).rem_euclid(len) as usize]
}
