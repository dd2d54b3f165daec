//! Reducer function for state transitions
//!
//! `(State, Action) -> State`. The reducer performs no terminal or file
//! I/O; marketplace operations it calls only emit tracing events. Time
//! enters through `Action::Tick`, so the same inputs always give the same
//! state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libeasylife::{AccountRole, Page};

use super::actions::Action;
use super::state::{AppState, ListingField, ListingForm, RegistrationField, RegistrationForm, StatusBarState};

/// Function-key bindings for navigation
const PAGE_KEYS: [(u8, Page); 5] = [
    (2, Page::Home),
    (3, Page::Catalog),
    (4, Page::Orders),
    (5, Page::CreateProduct),
    (6, Page::Profile),
];

/// Apply an action to the state and return the new state
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),

        Action::Tick(now) => {
            let mut state = AppState { now, ..state };
            if let Some(page) = state.market.tick(&now) {
                if page == Page::Catalog {
                    let len = state.market.catalog().len();
                    state.catalog.cursor = state.catalog.cursor.min(len.saturating_sub(1));
                }
            }
            state
        }

        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::NavigateTo(page) => {
            let mut state = state;
            let now = state.now;
            match state.market.navigate(page, &now) {
                Ok(()) => state,
                Err(e) => reduce(state, Action::SetStatus(e.to_string())),
            }
        }

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Registration ===
        Action::RegistrationInput(c) => {
            let mut state = state;
            if let Some(text) = state.registration.focused_text_mut() {
                text.push(c);
            }
            state
        }

        Action::RegistrationBackspace => {
            let mut state = state;
            if let Some(text) = state.registration.focused_text_mut() {
                text.pop();
            }
            state
        }

        Action::RegistrationFocusNext => {
            let mut state = state;
            state.registration.focus_next();
            state
        }

        Action::RegistrationFocusPrev => {
            let mut state = state;
            state.registration.focus_prev();
            state
        }

        Action::RegistrationRoleSelected(role) => AppState {
            registration: RegistrationForm {
                role,
                ..state.registration
            },
            ..state
        },

        Action::RegistrationSubmitted => submit_registration(state),

        // === Create product ===
        Action::ListingInput(c) => {
            let mut state = state;
            if let Some(text) = state.listing.focused_text_mut() {
                text.push(c);
            }
            state
        }

        Action::ListingBackspace => {
            let mut state = state;
            if let Some(text) = state.listing.focused_text_mut() {
                text.pop();
            }
            state
        }

        Action::ListingFocusNext => {
            let mut state = state;
            state.listing.focus_next();
            state
        }

        Action::ListingFocusPrev => {
            let mut state = state;
            state.listing.focus_prev();
            state
        }

        Action::ListingDescriptionChanged(description) => {
            let mut state = state;
            state.listing.draft.description = description;
            state
        }

        Action::ListingScanDialogOpened => AppState {
            listing: ListingForm {
                scan_dialog_open: true,
                ..state.listing
            },
            ..state
        },

        Action::ListingScanConfirmed => {
            let mut state = state;
            state.listing.draft.confirm_scan();
            state.listing.scan_dialog_open = false;
            state
        }

        Action::ListingScanDialogClosed => AppState {
            listing: ListingForm {
                scan_dialog_open: false,
                ..state.listing
            },
            ..state
        },

        Action::ListingSubmitted => submit_listing(state),

        // === Catalog ===
        Action::CatalogCursorDown => {
            let mut state = state;
            let len = state.market.catalog().len();
            if state.catalog.cursor + 1 < len {
                state.catalog.cursor += 1;
            }
            state
        }

        Action::CatalogCursorUp => {
            let mut state = state;
            state.catalog.cursor = state.catalog.cursor.saturating_sub(1);
            state
        }

        Action::PurchaseRequested => {
            if state.market.session().is_buyer() {
                if let Some(product) = state.market.catalog().products().get(state.catalog.cursor) {
                    state.market.purchase(&product.id);
                }
            }
            state
        }

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

fn submit_registration(state: AppState) -> AppState {
    // Disabled until a name is entered
    if !state.registration.can_submit() {
        return state;
    }

    let mut state = state;
    let request = state.registration.to_request();
    let name = request.name.clone();
    match state.market.register(request) {
        Ok(()) => {
            state.registration = RegistrationForm::default();
            reduce(state, Action::SetStatus(format!("Добро пожаловать, {}!", name)))
        }
        Err(e) => reduce(state, Action::ShowError(e.to_string())),
    }
}

fn submit_listing(state: AppState) -> AppState {
    // Disabled until name and price are filled in
    if !state.listing.draft.has_required_fields() {
        return state;
    }

    let mut state = state;
    let now = state.now;
    let draft = state.listing.draft.clone();
    let created = state
        .market
        .create_product(&draft, &now)
        .map(|product| product.name.clone());
    match created {
        Ok(name) => {
            state.listing = ListingForm::default();
            reduce(state, Action::SetStatus(format!("Товар «{}» добавлен в каталог", name)))
        }
        Err(e) => reduce(state, Action::ShowError(e.to_string())),
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Quit works everywhere
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return reduce(state, Action::Quit);
    }

    // Overlays capture input until dismissed
    if state.error.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => reduce(state, Action::DismissError),
            _ => state,
        };
    }
    if state.help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) => reduce(state, Action::HideHelp),
            _ => state,
        };
    }
    if state.listing.scan_dialog_open {
        return match key.code {
            KeyCode::Enter => reduce(state, Action::ListingScanConfirmed),
            KeyCode::Esc => reduce(state, Action::ListingScanDialogClosed),
            _ => state,
        };
    }

    match key.code {
        KeyCode::F(1) => return reduce(state, Action::ShowHelp),
        KeyCode::F(n) => {
            if let Some((_, page)) = PAGE_KEYS.iter().find(|(k, _)| *k == n) {
                return reduce(state, Action::NavigateTo(*page));
            }
            return state;
        }
        KeyCode::Char('q') if key.modifiers == KeyModifiers::NONE && !state.is_editing_text() => {
            return reduce(state, Action::Quit);
        }
        KeyCode::Esc if state.status.message.is_some() => {
            return reduce(state, Action::ClearStatus);
        }
        _ => {}
    }

    // Page-specific keybindings
    match state.page() {
        Page::Catalog => handle_catalog_key(state, key),
        Page::Profile if !state.market.session().is_registered() => handle_registration_key(state, key),
        Page::CreateProduct if state.market.session().is_seller() => handle_listing_key(state, key),
        Page::Home | Page::Orders | Page::Profile | Page::CreateProduct => state,
    }
}

fn handle_catalog_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => reduce(state, Action::CatalogCursorDown),
        KeyCode::Up | KeyCode::Char('k') => reduce(state, Action::CatalogCursorUp),
        KeyCode::Enter | KeyCode::Char('b') => reduce(state, Action::PurchaseRequested),
        _ => state,
    }
}

fn handle_registration_key(state: AppState, key: KeyEvent) -> AppState {
    let focus = state.registration.focus;
    match key.code {
        KeyCode::Tab | KeyCode::Down => reduce(state, Action::RegistrationFocusNext),
        KeyCode::BackTab | KeyCode::Up => reduce(state, Action::RegistrationFocusPrev),
        KeyCode::Enter => reduce(state, Action::RegistrationSubmitted),
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if focus == RegistrationField::Role => {
            let role = match key.code {
                KeyCode::Left => AccountRole::Buyer,
                KeyCode::Right => AccountRole::Seller,
                _ => state.registration.role.toggled(),
            };
            reduce(state, Action::RegistrationRoleSelected(role))
        }
        KeyCode::Backspace => reduce(state, Action::RegistrationBackspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            reduce(state, Action::RegistrationInput(c))
        }
        _ => state,
    }
}

fn handle_listing_key(state: AppState, key: KeyEvent) -> AppState {
    let focus = state.listing.focus;
    match (key.code, key.modifiers) {
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => reduce(state, Action::ListingSubmitted),
        (KeyCode::Tab, _) => reduce(state, Action::ListingFocusNext),
        (KeyCode::BackTab, _) => reduce(state, Action::ListingFocusPrev),
        (KeyCode::Enter, _) => match focus {
            ListingField::Scan => reduce(state, Action::ListingScanDialogOpened),
            ListingField::Submit => reduce(state, Action::ListingSubmitted),
            _ => reduce(state, Action::ListingFocusNext),
        },
        (KeyCode::Down, _) if focus != ListingField::Description => {
            reduce(state, Action::ListingFocusNext)
        }
        (KeyCode::Up, _) if focus != ListingField::Description => {
            reduce(state, Action::ListingFocusPrev)
        }
        (KeyCode::Backspace, _) => reduce(state, Action::ListingBackspace),
        (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
            reduce(state, Action::ListingInput(c))
        }
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::new();
        let state_clone = state.clone();

        let action = Action::SetStatus("Test".to_string());
        let new_state = reduce(state_clone.clone(), action);

        // Original state unchanged
        assert!(state_clone.status.message.is_none());

        // New state has the change
        assert_eq!(new_state.status.message, Some("Test".to_string()));
    }

    #[test]
    fn test_quit_action() {
        let state = AppState::new();
        assert!(!state.should_quit);

        let new_state = reduce(state, Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_rejected_navigation_sets_status() {
        let state = AppState::new();
        let state = reduce(state, Action::NavigateTo(Page::CreateProduct));

        assert!(!state.market.is_transitioning());
        assert_eq!(
            state.status.message.as_deref(),
            Some("Страница «Создать товар» доступна только продавцам")
        );
    }

    #[test]
    fn test_tick_records_time() {
        let state = AppState::new();
        let later = state.now.after(std::time::Duration::from_secs(1));

        let state = reduce(state, Action::Tick(later));
        assert_eq!(state.now, later);
    }

    #[test]
    fn test_scan_flow() {
        let mut state = AppState::new();
        state = reduce(state, Action::ListingScanDialogOpened);
        assert!(state.listing.scan_dialog_open);

        state = reduce(state, Action::ListingScanConfirmed);
        assert!(!state.listing.scan_dialog_open);
        assert!(state.listing.draft.qr_scanned);
    }

    #[test]
    fn test_closing_scanner_does_not_confirm() {
        let mut state = AppState::new();
        state = reduce(state, Action::ListingScanDialogOpened);
        state = reduce(state, Action::ListingScanDialogClosed);
        assert!(!state.listing.draft.qr_scanned);
    }

    #[test]
    fn test_catalog_cursor_is_bounded() {
        let mut state = AppState::new();
        for _ in 0..10 {
            state = reduce(state, Action::CatalogCursorDown);
        }
        assert_eq!(state.catalog.cursor, 2);

        for _ in 0..10 {
            state = reduce(state, Action::CatalogCursorUp);
        }
        assert_eq!(state.catalog.cursor, 0);
    }
}
