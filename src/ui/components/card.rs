// SPDX-License-Identifier: MPL-2.0
//! Cards and the hero banner that frame every page.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Font, Length};

/// Bold font used for card titles.
pub const TITLE_FONT: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// A titled card holding arbitrary content.
pub fn card<'a, Message: 'a>(
    title: impl Into<String>,
    body: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(title.into())
                .size(typography::TITLE_SM)
                .font(TITLE_FONT),
        )
        .push(body);

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

/// A card whose body is a single paragraph.
pub fn text_card<'a, Message: 'a>(
    title: impl Into<String>,
    body: impl Into<String>,
) -> Element<'a, Message> {
    card(title, Text::new(body.into()).size(typography::BODY_LG))
}

/// Large heading with a subtitle and a row of pill labels.
pub fn hero<'a, Message: 'a>(
    title: impl Into<String>,
    subtitle: impl Into<String>,
    pills: &[&str],
) -> Element<'a, Message> {
    let pill_row = pills.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, label| row.push(pill(label.to_string())),
    );

    let content = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(title.into())
                .size(typography::DISPLAY)
                .font(TITLE_FONT),
        )
        .push(Text::new(subtitle.into()).size(typography::BODY_LG))
        .push(pill_row.wrap());

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn pill<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::pill)
        .into()
}

/// Page heading followed by an optional muted caption.
pub fn heading<'a, Message: 'a>(title: &str, caption: Option<&str>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS).push(
        Text::new(title.to_string())
            .size(typography::TITLE_LG)
            .font(TITLE_FONT),
    );
    if let Some(caption) = caption {
        column = column.push(Text::new(caption.to_string()).size(typography::BODY));
    }
    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_render() {
        let _: Element<'_, ()> = text_card("A tiny love note 🥹", "hello");
        let _: Element<'_, ()> = hero("Hi!", "welcome", &["one", "two"]);
        let _: Element<'_, ()> = heading("Love Quiz", Some("No pressure."));
    }
}
