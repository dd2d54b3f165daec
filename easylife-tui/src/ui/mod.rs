//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.

mod catalog;
mod home;
mod listing;
mod profile;

pub use listing::{new_description_editor, style_description};

use libeasylife::Page;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::AppState;

/// Render the application UI
///
/// The description editor is a stateful widget owned by the event loop,
/// so it is passed in alongside the state.
pub fn render(frame: &mut Frame, state: &AppState, description: &TextArea) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation bar
            Constraint::Min(5),    // Page
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_nav_bar(frame, chunks[0], state);
    render_page(frame, chunks[1], state, description);
    render_status_bar(frame, chunks[2], state);

    if state.listing.scan_dialog_open {
        listing::render_scan_dialog(frame, area, state);
    }

    if state.help_visible {
        render_help_overlay(frame, area);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error);
    }
}

/// Style helper honoring the colour setting
pub(crate) fn fg(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

/// Marker placed before the focused control
pub(crate) fn focus_marker(state: &AppState, focused: bool) -> &'static str {
    match (focused, state.config.unicode_enabled) {
        (true, true) => "▶ ",
        (true, false) => "> ",
        (false, _) => "  ",
    }
}

fn render_nav_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let pages = state.market.visible_pages();
    let current = state.page();

    let titles: Vec<Line> = pages
        .iter()
        .map(|page| Line::from(format!("{} {}", page_key(*page), page.label())))
        .collect();
    let selected = pages.iter().position(|page| *page == current);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " EasyLife ",
                    fg(state, Color::Magenta).add_modifier(Modifier::BOLD),
                )),
        )
        .select(selected.unwrap_or(0))
        .highlight_style(
            fg(state, Color::Magenta)
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::REVERSED),
        );
    // Orders opened before registering has no tab to highlight
    let tabs = if selected.is_some() { tabs } else { tabs.highlight_style(Style::default()) };

    frame.render_widget(tabs, area);
}

fn page_key(page: Page) -> &'static str {
    match page {
        Page::Home => "F2",
        Page::Catalog => "F3",
        Page::Orders => "F4",
        Page::CreateProduct => "F5",
        Page::Profile => "F6",
    }
}

fn render_page(frame: &mut Frame, area: Rect, state: &AppState, description: &TextArea) {
    match state.page() {
        Page::Home => home::render_home(frame, area, state),
        Page::Catalog => catalog::render_catalog(frame, area, state),
        Page::Orders => catalog::render_orders(frame, area, state),
        Page::Profile => profile::render_profile(frame, area, state),
        // Only sellers get a form; anyone else sees an empty page
        Page::CreateProduct if state.market.session().is_seller() => {
            listing::render_create_product(frame, area, state, description)
        }
        Page::CreateProduct => {}
    }

    // Fade out while a page switch is pending
    if state.market.is_transitioning() {
        frame
            .buffer_mut()
            .set_style(area, Style::default().add_modifier(Modifier::DIM));
    }
}

/// Render status bar with the last message and key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.page() {
        Page::Catalog if state.market.session().is_buyer() => {
            "↑/↓: выбор | Enter: купить | F1: помощь | q: выход"
        }
        Page::Catalog => "↑/↓: выбор | F1: помощь | q: выход",
        Page::Profile if !state.market.session().is_registered() => {
            "Tab: поле | ←/→: роль | Enter: зарегистрироваться | F1: помощь"
        }
        Page::CreateProduct if state.market.session().is_seller() => {
            "Tab: поле | Enter: действие | Ctrl+S: добавить | F1: помощь"
        }
        _ => "F1: помощь | q: выход",
    };

    let mut spans = Vec::new();
    if let Some(ref message) = state.status.message {
        spans.push(Span::styled(message.clone(), fg(state, Color::Green)));
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::styled(hints, fg(state, Color::Gray)));

    let who = match state.market.session().account() {
        Some(account) => format!(" {} ({}) ", account.name, account.role.label()),
        None => " Гость ".to_string(),
    };

    let status = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(who));

    frame.render_widget(status, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled("Клавиши", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Навигация:"),
        Line::from("  F2       - Главная"),
        Line::from("  F3       - Каталог"),
        Line::from("  F4       - Мои заказы"),
        Line::from("  F5       - Создать товар (продавцы)"),
        Line::from("  F6       - Личный кабинет"),
        Line::from("  q/Ctrl+C - Выход"),
        Line::from(""),
        Line::from("Формы:"),
        Line::from("  Tab      - Следующее поле"),
        Line::from("  ←/→      - Выбор роли"),
        Line::from("  Enter    - Нажать кнопку"),
        Line::from("  Ctrl+S   - Добавить товар"),
        Line::from(""),
        Line::from("Нажмите Esc или F1, чтобы закрыть"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Помощь ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render error overlay
fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str) {
    let popup_area = centered_rect(60, 30, area);

    let error_text = vec![
        Line::from(""),
        Line::from(Span::styled(error, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Нажмите Esc, чтобы закрыть"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Ошибка ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
