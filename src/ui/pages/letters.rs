// SPDX-License-Identifier: MPL-2.0
//! Open-when letters, shown as flash cards that open and close in place.

use crate::content::Letter;
use crate::portal::Session;
use crate::ui::components::card::TITLE_FONT;
use crate::ui::components::{heading, notice, Tone};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

pub const EMPTY_MESSAGE: &str = "No letters yet.";

const COLUMNS: usize = 2;

pub struct ViewContext<'a> {
    pub letters: &'a [Letter],
    pub session: &'a Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle(usize),
}

pub fn update(message: Message, session: &mut Session) {
    match message {
        Message::Toggle(index) => session.toggle_letter(index),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let column = Column::new().spacing(spacing::MD).push(heading(
        "Open-When Letters 💌",
        Some("Pick one. Read it slowly. Pretend I’m right there."),
    ));

    if ctx.letters.is_empty() {
        return column.push(notice(Tone::Info, EMPTY_MESSAGE)).into();
    }

    let rows = ctx
        .letters
        .iter()
        .enumerate()
        .collect::<Vec<_>>()
        .chunks(COLUMNS)
        .fold(Column::new().spacing(spacing::MD), |rows, chunk| {
            let row = chunk.iter().fold(
                Row::new().spacing(spacing::MD),
                |row, &(index, letter)| {
                    row.push(flash_card(index, letter, ctx.session.is_letter_open(index)))
                },
            );
            let row = (chunk.len()..COLUMNS)
                .fold(row, |row, _| row.push(Space::new().width(Length::Fill)));
            rows.push(row)
        });

    column.push(rows).into()
}

fn flash_card<'a>(index: usize, letter: &'a Letter, is_open: bool) -> Element<'a, Message> {
    let hint = if is_open {
        "Tap again to close"
    } else {
        "Tap to open 💌"
    };

    let mut content = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(letter.title.as_str())
                .size(typography::BODY_LG)
                .font(TITLE_FONT),
        )
        .push(Text::new(hint).size(typography::CAPTION));

    if is_open {
        content = letter.body.iter().fold(content, |content, paragraph| {
            content.push(Text::new(paragraph.as_str()).size(typography::BODY_LG))
        });
    }

    let (label, style): (&str, fn(&iced::Theme, button::Status) -> button::Style) = if is_open {
        ("Close", styles::button::link)
    } else {
        ("Open 💌", styles::button::primary)
    };

    content = content.push(
        button(Text::new(label))
            .width(Length::Fill)
            .style(style)
            .on_press(Message::Toggle(index)),
    );

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
