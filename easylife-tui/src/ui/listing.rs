//! Create-product page and the simulated QR scanner dialog

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use super::{centered_rect, fg, focus_marker};
use crate::app::{AppState, ListingField};

pub(super) fn render_create_product(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    description: &TextArea,
) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Создать товар ",
            fg(state, Color::Magenta).add_modifier(Modifier::BOLD),
        ));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Price
            Constraint::Min(4),    // Description
            Constraint::Length(1), // Image
            Constraint::Length(3), // QR scan
            Constraint::Length(1), // Submit
        ])
        .split(inner);

    let form = &state.listing;
    let field_line = |field: ListingField, label: &str, value: &str, placeholder: &str| {
        let value = if value.is_empty() {
            Span::styled(placeholder.to_string(), fg(state, Color::DarkGray))
        } else {
            Span::raw(value.to_string())
        };
        Paragraph::new(Line::from(vec![
            Span::raw(focus_marker(state, form.focus == field)),
            Span::raw(format!("{}: ", label)),
            value,
        ]))
    };

    frame.render_widget(
        field_line(
            ListingField::Name,
            "Название товара",
            &form.draft.name,
            "Например: Смартфон iPhone 15 Pro",
        ),
        chunks[0],
    );
    frame.render_widget(
        field_line(ListingField::Price, "Цена (₽)", &form.draft.price, "45990"),
        chunks[1],
    );

    frame.render_widget(description, chunks[2]);

    frame.render_widget(
        field_line(
            ListingField::Image,
            "URL изображения",
            &form.draft.image,
            "https://example.com/image.jpg",
        ),
        chunks[3],
    );

    let (scan_label, scan_style) = if form.draft.qr_scanned {
        ("[ QR-код отсканирован ]", fg(state, Color::Green).add_modifier(Modifier::BOLD))
    } else {
        ("[ Сканировать QR-код ]", Style::default())
    };
    let scan = Paragraph::new(vec![
        Line::from(Span::styled(
            "Отсканируйте уникальный QR-код товара для его идентификации",
            fg(state, Color::Gray),
        )),
        Line::from(vec![
            Span::raw(focus_marker(state, form.focus == ListingField::Scan)),
            Span::styled(scan_label, scan_style),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(scan, chunks[4]);

    let submit_style = if form.draft.can_submit() {
        fg(state, Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        fg(state, Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(focus_marker(state, form.focus == ListingField::Submit)),
            Span::styled("[ Добавить товар ]", submit_style),
        ])),
        chunks[5],
    );
}

/// A fresh, empty description editor
pub fn new_description_editor() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text("Опишите характеристики товара...");
    textarea
}

/// Style the description editor for the current focus.
///
/// The editor lives in the event loop; this keeps its look in sync with
/// the form before each draw.
pub fn style_description(textarea: &mut TextArea, state: &AppState) {
    let focused = state.listing.focus == ListingField::Description;
    let border = if focused {
        fg(state, Color::Magenta)
    } else {
        Style::default()
    };
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!("{}Описание ", focus_marker(state, focused))),
    );
    // Hide the cursor unless the editor has focus
    let cursor = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    textarea.set_cursor_style(cursor);
}

pub(super) fn render_scan_dialog(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 30, area);

    let dialog = Paragraph::new(vec![
        Line::from(""),
        Line::from("В реальной версии здесь будет камера для сканирования QR-кода"),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Симуляция сканирования",
            fg(state, Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from("[Esc] Отмена"),
    ])
    .block(
        Block::default()
            .title(" Сканирование QR-кода ")
            .borders(Borders::ALL)
            .border_style(fg(state, Color::Magenta)),
    )
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(dialog, popup_area);
}
