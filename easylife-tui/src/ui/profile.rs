//! Profile page: account card once registered, registration form before

use libeasylife::AccountRole;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{fg, focus_marker};
use crate::app::{AppState, RegistrationField};

pub(super) fn render_profile(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.market.session().account() {
        Some(account) => {
            let badge_color = match account.role {
                AccountRole::Seller => Color::LightRed,
                AccountRole::Buyer => Color::Blue,
            };
            let card = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("( {} )", account.initial()),
                    fg(state, Color::Magenta).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    account.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("[{}]", account.role.label()),
                    fg(state, badge_color),
                )),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Личный кабинет "));
            frame.render_widget(card, area);
        }
        None => render_registration(frame, area, state),
    }
}

fn render_registration(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.registration;
    let focused = |field| form.focus == field;

    let role_choice = |role: AccountRole| {
        let label = format!(" {} ", role.label());
        if form.role == role {
            Span::styled(
                format!("[{}]", label),
                fg(state, Color::Magenta).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(format!(" {} ", label))
        }
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(format!(
            "{}Ваше имя: {}",
            focus_marker(state, focused(RegistrationField::Name)),
            form.name
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(format!(
                "{}Выберите роль: ",
                focus_marker(state, focused(RegistrationField::Role))
            )),
            role_choice(AccountRole::Buyer),
            Span::raw(" "),
            role_choice(AccountRole::Seller),
        ]),
    ];

    if form.role == AccountRole::Seller {
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "{}Код продавца: {}",
            focus_marker(state, focused(RegistrationField::Passcode)),
            form.passcode
        )));
        lines.push(Line::from(Span::styled(
            "    Подсказка: код состоит из 8 символов",
            fg(state, Color::DarkGray),
        )));
    }

    let submit_style = if form.can_submit() {
        fg(state, Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        fg(state, Color::DarkGray)
    };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(focus_marker(state, focused(RegistrationField::Submit))),
        Span::styled("[ Зарегистрироваться ]", submit_style),
    ]));

    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Регистрация "));
    frame.render_widget(body, area);
}
