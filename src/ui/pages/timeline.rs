// SPDX-License-Identifier: MPL-2.0
//! Timeline page: one card per dated moment, in file order.

use crate::content::TimelineEntry;
use crate::ui::components::{heading, notice, text_card, Tone};
use crate::ui::design_tokens::spacing;
use iced::widget::Column;
use iced::Element;

pub const EMPTY_MESSAGE: &str = "Nothing on the timeline yet.";

pub fn view<'a, Message: 'a>(entries: &'a [TimelineEntry]) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::SM)
        .push(heading("Our Timeline 🗓️💞", None));

    if entries.is_empty() {
        return column.push(notice(Tone::Info, EMPTY_MESSAGE)).into();
    }

    entries
        .iter()
        .fold(column, |column, entry| {
            column.push(text_card(
                format!("{} — {}", entry.date, entry.title),
                entry.line.as_str(),
            ))
        })
        .into()
}
