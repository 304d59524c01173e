// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

/// Main call to action: unlock, submit, accept.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::ROSE_600)),
            text_color: WHITE,
            border: Border {
                color: palette::ROSE_700,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::ROSE_500)),
            text_color: WHITE,
            border: Border {
                color: palette::ROSE_600,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(),
    }
}

/// Greyed out and inert, e.g. Back on the first page.
fn disabled() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::BLUSH_200)),
        text_color: palette::INK_400,
        border: Border {
            color: palette::INK_400,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// The page tab currently shown.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => disabled(),
        _ => primary(theme, button::Status::Active),
    }
}

/// Secondary actions and page tabs that are not shown.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let (bg_color, text_color) = if is_dark(theme) {
        (palette::NIGHT_800, palette::BLUSH_100)
    } else {
        (WHITE, palette::INK_900)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::ROSE_300,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if is_dark(theme) {
                palette::INK_700
            } else {
                palette::BLUSH_100
            })),
            text_color,
            border: Border {
                color: palette::ROSE_500,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled(),
    }
}

/// Borderless text button, used to close an open letter.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => palette::ROSE_500,
        button::Status::Disabled => palette::INK_400,
        _ => palette::ROSE_600,
    };

    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Light, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::ROSE_600);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_buttons_look_the_same_everywhere() {
        let a = primary(&Theme::Light, button::Status::Disabled);
        let b = unselected(&Theme::Dark, button::Status::Disabled);
        assert_eq!(a.background, b.background);
        assert_eq!(a.text_color, palette::INK_400);
    }

    #[test]
    fn unselected_follows_theme() {
        let light = unselected(&Theme::Light, button::Status::Active);
        let dark = unselected(&Theme::Dark, button::Status::Active);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn link_has_no_background_fill() {
        let style = link(&Theme::Light, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(Color::TRANSPARENT)));
    }
}
