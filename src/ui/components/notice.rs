// SPDX-License-Identifier: MPL-2.0
//! Tinted notice banners.
//!
//! Used for placeholders (no photos yet, empty quiz file), the rejected PIN
//! message and quiz feedback. The tone picks the color.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::{Color, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Info => palette::ROSE_600,
            Tone::Success => palette::SUCCESS_500,
            Tone::Warning => palette::WARNING_500,
            Tone::Error => palette::ERROR_500,
        }
    }
}

pub fn notice<'a, Message: 'a>(tone: Tone, message: impl Into<String>) -> Element<'a, Message> {
    Container::new(Text::new(message.into()).size(typography::BODY_LG))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::banner(tone.color()))
        .into()
}
