//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::KeyEvent;
use libeasylife::{AccountRole, Moment, Page};

/// Actions that trigger state transitions
///
/// Actions describe what should happen; the reducer (see `reducer.rs`)
/// applies them to state.
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Clock advanced; completes due page transitions
    Tick(Moment),

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Request a page switch
    NavigateTo(Page),

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Registration ===
    /// Character typed into the focused registration field
    RegistrationInput(char),

    /// Delete the last character of the focused registration field
    RegistrationBackspace,

    RegistrationFocusNext,

    RegistrationFocusPrev,

    /// Buyer/seller choice changed
    RegistrationRoleSelected(AccountRole),

    /// Submit the registration form
    RegistrationSubmitted,

    // === Create product ===
    /// Character typed into the focused single-line listing field
    ListingInput(char),

    /// Delete the last character of the focused listing field
    ListingBackspace,

    ListingFocusNext,

    ListingFocusPrev,

    /// Description editor content changed
    ListingDescriptionChanged(String),

    /// Open the simulated QR scanner
    ListingScanDialogOpened,

    /// Confirm the simulated scan
    ListingScanConfirmed,

    /// Close the scanner without confirming
    ListingScanDialogClosed,

    /// Submit the create-product form
    ListingSubmitted,

    // === Catalog ===
    CatalogCursorDown,

    CatalogCursorUp,

    /// Buy the highlighted product (not implemented, no state change)
    PurchaseRequested,

    // === Error Handling ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}
