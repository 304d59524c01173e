// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above every unlocked page.
//!
//! Back and Next step through the pages in order and are disabled at either
//! end. The six page buttons jump straight to a page.

use crate::portal::{Page, Session};
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Row, Space, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub current: Page,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Back,
    Next,
    Jump(Page),
}

/// Applies a navigation message to the session.
pub fn update(message: Message, session: &mut Session) {
    match message {
        Message::Back => session.navigate(-1),
        Message::Next => session.navigate(1),
        Message::Jump(page) => session.jump_to(page.index() as i64),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let back = button(Text::new("⬅ Back"))
        .style(styles::button::unselected)
        .on_press_maybe((!ctx.current.is_first()).then_some(Message::Back));

    let next = button(Text::new("Next ➡"))
        .style(styles::button::unselected)
        .on_press_maybe((!ctx.current.is_last()).then_some(Message::Next));

    let tabs = Page::ALL.iter().fold(Row::new().spacing(spacing::XS), |row, &page| {
        let style: fn(&Theme, button::Status) -> button::Style = if page == ctx.current {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        row.push(
            button(Text::new(page.label()))
                .style(style)
                .on_press(Message::Jump(page)),
        )
    });

    Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(back)
        .push(Space::new().width(Length::Fill))
        .push(tabs)
        .push(Space::new().width(Length::Fill))
        .push(next)
        .into()
}
