// SPDX-License-Identifier: MPL-2.0
//! Photo wall: a grid of captioned photos read from the photos directory.

use crate::app::config::GALLERY_COLUMNS;
use crate::gallery::GalleryItem;
use crate::ui::components::{notice, text_card, Tone};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{image, Column, Row, Space, Text};
use iced::{alignment::Horizontal, ContentFit, Element, Length};
use std::path::Path;

/// What the wall currently holds.
#[derive(Debug, Clone, Default)]
pub enum Wall {
    /// Photos are being decoded.
    #[default]
    Loading,
    Ready(Vec<GalleryItem>),
}

pub struct ViewContext<'a> {
    pub wall: &'a Wall,
    pub photos_dir: &'a Path,
}

/// Placeholder shown when the photos directory has no pictures.
#[must_use]
pub fn empty_message(photos_dir: &Path) -> String {
    format!(
        "Add your photos to `{}/` (01.jpg, 02.jpg, …). The wall will appear here 💗",
        photos_dir.display()
    )
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::MD)
        .push(text_card("Photo Wall 📸", "A little trot down the memory lane ;)"));

    match ctx.wall {
        Wall::Loading => column
            .push(Text::new("Developing the photos…").size(typography::BODY))
            .into(),
        Wall::Ready(items) if items.is_empty() => column
            .push(notice(Tone::Info, empty_message(ctx.photos_dir)))
            .into(),
        Wall::Ready(items) => column.push(grid(items)).into(),
    }
}

fn grid<'a, Message: 'a>(items: &'a [GalleryItem]) -> Element<'a, Message> {
    items
        .chunks(GALLERY_COLUMNS)
        .fold(Column::new().spacing(spacing::MD), |column, chunk| {
            let row = chunk
                .iter()
                .fold(Row::new().spacing(spacing::MD), |row, item| row.push(tile(item)));
            // Pad the last row so every tile keeps the same width.
            let row = (chunk.len()..GALLERY_COLUMNS)
                .fold(row, |row, _| row.push(Space::new().width(Length::Fill)));
            column.push(row)
        })
        .into()
}

fn tile<'a, Message: 'a>(item: &'a GalleryItem) -> Element<'a, Message> {
    let picture = image(item.handle())
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PHOTO_HEIGHT))
        .content_fit(ContentFit::Cover);

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(picture);

    if let Some(caption) = item.caption() {
        column = column.push(Text::new(caption).size(typography::CAPTION));
    }

    column.into()
}
