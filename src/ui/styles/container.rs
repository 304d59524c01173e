// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Rounded card on the page background: timeline entries, letters, quiz
/// questions, the PIN gate.
///
/// The fill is derived from the active theme background, nudged toward white
/// or black, so cards stand out in both modes.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let base = extended.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: palette::ROSE_300,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Small rounded label inside the hero banner.
pub fn pill(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.extended_palette().background.base.color)),
        border: Border {
            color: palette::ROSE_300,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Gold-framed certificate on the Valentine page.
pub fn certificate(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLUSH_50)),
        text_color: Some(palette::INK_900),
        border: Border {
            color: palette::GOLD_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Tinted banner for notices such as an empty quiz file.
pub fn banner(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..color
        })),
        text_color: Some(color),
        border: Border {
            color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Round balloon of the celebration overlay.
pub fn balloon(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_is_translucent_and_rounded() {
        let style = card(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, opacity::SURFACE),
            other => panic!("unexpected background {other:?}"),
        }
        assert_eq!(style.border.width, border::WIDTH_SM);
    }

    #[test]
    fn banner_uses_its_color_for_text() {
        let style = banner(palette::WARNING_500)(&Theme::Dark);
        assert_eq!(style.text_color, Some(palette::WARNING_500));
    }
}
