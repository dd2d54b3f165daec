//! Test rendering against an in-memory terminal

use std::time::Duration;

use easylife_tui::app::{reduce, Action, AppState};
use easylife_tui::ui;
use libeasylife::catalog::Catalog;
use libeasylife::navigation::Navigator;
use libeasylife::session::{RegistrationRequest, Session};
use libeasylife::{AccountRole, Config, Marketplace, Page};
use ratatui::{backend::TestBackend, buffer::Buffer, style::Modifier, Terminal};

const WIDTH: u16 = 110;
const HEIGHT: u16 = 32;

/// Rows between the navigation bar and the status bar
const PAGE_ROWS: std::ops::Range<usize> = 3..(HEIGHT as usize - 3);

fn render(state: &AppState) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut textarea = ui::new_description_editor();
    ui::style_description(&mut textarea, state);
    terminal
        .draw(|frame| ui::render(frame, state, &textarea))
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Render the state and return the screen as one string per row
fn screen(state: &AppState) -> Vec<String> {
    render(state)
        .content()
        .chunks(WIDTH as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

fn go(state: AppState, page: Page) -> AppState {
    let state = reduce(state, Action::NavigateTo(page));
    let later = state.now.after(Duration::from_millis(300));
    reduce(state, Action::Tick(later))
}

fn registered(role: AccountRole) -> AppState {
    let mut state = AppState::new();
    state.registration.name = "Ann".to_string();
    state.registration.passcode = "EasyLife".to_string();
    let state = reduce(state, Action::RegistrationRoleSelected(role));
    let state = reduce(state, Action::RegistrationSubmitted);
    assert_eq!(state.market.role(), Some(role));
    state
}

#[test]
fn test_guest_nav_bar() {
    let rows = screen(&AppState::new());
    let nav = &rows[1];

    assert!(nav.contains("Главная"));
    assert!(nav.contains("Каталог"));
    assert!(nav.contains("Личный кабинет"));
    assert!(!nav.contains("Мои заказы"));
    assert!(!nav.contains("Создать товар"));
}

#[test]
fn test_buyer_nav_bar() {
    let rows = screen(&registered(AccountRole::Buyer));
    let nav = &rows[1];

    assert!(nav.contains("Мои заказы"));
    assert!(!nav.contains("Создать товар"));
}

#[test]
fn test_seller_nav_bar() {
    let rows = screen(&registered(AccountRole::Seller));
    let nav = &rows[1];

    assert!(nav.contains("Мои заказы"));
    assert!(nav.contains("Создать товар"));
}

#[test]
fn test_home_offers_registration_to_guests_only() {
    let rows = screen(&AppState::new());
    assert!(contains(&rows, "Добро пожаловать в EasyLife"));
    assert!(contains(&rows, "Зарегистрироваться"));

    let rows = screen(&registered(AccountRole::Buyer));
    assert!(!contains(&rows, "[F6] Зарегистрироваться"));
}

#[test]
fn test_catalog_shows_prices() {
    let rows = screen(&go(AppState::new(), Page::Catalog));

    assert!(contains(&rows, "Смартфон Premium X"));
    assert!(contains(&rows, "45\u{a0}990 ₽"));
    assert!(contains(&rows, "12\u{a0}990 ₽"));
    assert!(contains(&rows, "18\u{a0}990 ₽"));
    assert!(!contains(&rows, "[Купить]"));
}

#[test]
fn test_buyers_see_purchase_buttons() {
    let rows = screen(&go(registered(AccountRole::Buyer), Page::Catalog));
    assert!(contains(&rows, "[Купить]"));

    let rows = screen(&go(registered(AccountRole::Seller), Page::Catalog));
    assert!(!contains(&rows, "[Купить]"));
}

#[test]
fn test_orders_page_is_empty() {
    let rows = screen(&go(registered(AccountRole::Buyer), Page::Orders));
    assert!(contains(&rows, "У вас пока нет заказов"));
}

#[test]
fn test_registration_form_hint_for_sellers() {
    let state = go(AppState::new(), Page::Profile);
    let rows = screen(&state);
    assert!(contains(&rows, "Ваше имя"));
    assert!(!contains(&rows, "Код продавца"));

    let state = reduce(state, Action::RegistrationRoleSelected(AccountRole::Seller));
    let rows = screen(&state);
    assert!(contains(&rows, "Код продавца"));
    assert!(contains(&rows, "Подсказка: код состоит из 8 символов"));
}

#[test]
fn test_profile_card_after_registration() {
    let rows = screen(&go(registered(AccountRole::Seller), Page::Profile));

    assert!(contains(&rows, "Ann"));
    assert!(contains(&rows, "[Продавец]"));
    assert!(!contains(&rows, "Ваше имя"));
}

#[test]
fn test_create_product_form_for_sellers() {
    let rows = screen(&go(registered(AccountRole::Seller), Page::CreateProduct));

    assert!(contains(&rows, "Название товара"));
    assert!(contains(&rows, "Сканировать QR-код"));
    assert!(contains(&rows, "Добавить товар"));
}

#[test]
fn test_status_bar_shows_guest() {
    let rows = screen(&AppState::new());
    assert!(contains(&rows, "Гость"));
}

#[test]
fn test_error_overlay_rendered() {
    let state = reduce(
        AppState::new(),
        Action::ShowError("Неверный код продавца!".to_string()),
    );
    let rows = screen(&state);

    assert!(contains(&rows, "Ошибка"));
    assert!(contains(&rows, "Неверный код продавца!"));
}

#[test]
fn test_scan_dialog_rendered() {
    let state = go(registered(AccountRole::Seller), Page::CreateProduct);
    let state = reduce(state, Action::ListingScanDialogOpened);
    let rows = screen(&state);

    assert!(contains(&rows, "Сканирование QR-кода"));
    assert!(contains(&rows, "Симуляция сканирования"));
}

#[test]
fn test_page_dims_while_transitioning() {
    let state = reduce(AppState::new(), Action::NavigateTo(Page::Catalog));
    assert!(state.market.is_transitioning());

    let buffer = render(&state);
    let page_cell = buffer.cell((5, 5)).unwrap();
    assert!(page_cell.modifier.contains(Modifier::DIM));
    // Navigation bar is not dimmed
    assert!(!buffer.cell((5, 1)).unwrap().modifier.contains(Modifier::DIM));

    let later = state.now.after(Duration::from_millis(300));
    let state = reduce(state, Action::Tick(later));
    assert_eq!(state.page(), Page::Catalog);

    let buffer = render(&state);
    assert!(!buffer.cell((5, 5)).unwrap().modifier.contains(Modifier::DIM));
}

#[test]
fn test_create_product_is_blank_without_seller() {
    let config = Config::default();
    let mut session = Session::new();
    session
        .register(RegistrationRequest::buyer("Ann"), &config.marketplace.seller_passcode)
        .unwrap();
    // A seller-only page reached by a navigator that was never guarded
    let mut navigator = Navigator::new(Duration::ZERO);
    navigator
        .request(Page::CreateProduct, Some(AccountRole::Seller), std::time::Instant::now())
        .unwrap();

    let mut state = AppState::with_config(&config);
    state.market = Marketplace::from_parts(Catalog::seeded(), session, navigator, &config.marketplace);
    assert_eq!(state.page(), Page::CreateProduct);

    let rows = screen(&state);
    for row in &rows[PAGE_ROWS] {
        assert!(row.trim().is_empty(), "page area not blank: {:?}", row);
    }
    assert!(!contains(&rows, "Название товара"));
}
