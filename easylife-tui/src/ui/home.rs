//! Home page

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::fg;
use crate::app::AppState;

const FEATURES: [(&str, &str); 3] = [
    (
        "QR-идентификация",
        "Каждый товар защищен уникальным QR-кодом для отслеживания и проверки подлинности",
    ),
    (
        "Безопасность",
        "Трехступенчатая система проверки товара на всех этапах доставки",
    ),
    (
        "Быстро и удобно",
        "Простая регистрация и интуитивный интерфейс для покупателей и продавцов",
    ),
];

pub(super) fn render_home(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(5),
            Constraint::Length(5),
        ])
        .split(area);

    let mut hero = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Добро пожаловать в EasyLife",
            fg(state, Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from("Удобный маркетплейс с системой QR-кодов для безопасной купли-продажи"),
        Line::from(""),
        Line::from(Span::styled("[F3] Начать покупки", fg(state, Color::Magenta))),
    ];
    if !state.market.session().is_registered() {
        hero.push(Line::from(Span::styled(
            "[F6] Зарегистрироваться",
            fg(state, Color::Magenta),
        )));
    }
    frame.render_widget(
        Paragraph::new(hero).alignment(Alignment::Center),
        chunks[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[1]);
    let accents = [Color::Magenta, Color::LightMagenta, Color::LightRed];
    for (i, (title, body)) in FEATURES.iter().enumerate() {
        let card = Paragraph::new(*body)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(fg(state, accents[i]))
                    .title(Span::styled(
                        format!(" {} ", title),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(card, columns[i]);
    }

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            "Станьте продавцом",
            fg(state, Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from("Зарегистрируйтесь как продавец и начните продавать свои товары уже сегодня"),
    ])
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(banner, chunks[2]);
}
