//! Catalog and orders pages

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::fg;
use crate::app::AppState;

pub(super) fn render_catalog(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    // Filter and sort are shown but do nothing yet
    let header = Line::from(vec![
        Span::styled(
            "Каталог товаров",
            fg(state, Color::Magenta).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("[Фильтры] [Сортировка]", fg(state, Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let entries = state.market.catalog_entries();
    let qr_badge = if state.config.unicode_enabled { "▣ QR" } else { "[QR]" };

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let mut price_line = vec![Span::styled(
                entry.price_label.clone(),
                fg(state, Color::Magenta).add_modifier(Modifier::BOLD),
            )];
            if entry.can_purchase {
                price_line.push(Span::raw("  "));
                price_line.push(Span::styled("[Купить]", fg(state, Color::Green)));
            }

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(entry.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(qr_badge, fg(state, Color::Magenta)),
                ]),
                Line::from(Span::styled(entry.description.clone(), fg(state, Color::Gray))),
                Line::from(price_line),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Товаров: {} ", entries.len())),
        )
        .highlight_symbol(super::focus_marker(state, true))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let mut list_state = ListState::default();
    if !entries.is_empty() {
        list_state.select(Some(state.catalog.cursor.min(entries.len() - 1)));
    }
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}

pub(super) fn render_orders(frame: &mut Frame, area: Rect, state: &AppState) {
    let orders = state.market.orders();

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(orders.message(), fg(state, Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                " Мои заказы ",
                fg(state, Color::Magenta).add_modifier(Modifier::BOLD),
            )),
    );

    frame.render_widget(body, area);
}
