// SPDX-License-Identifier: MPL-2.0
//! Light and dark portal themes.

use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the portal paints with, beyond what the iced palette carries.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_card: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub brand_secondary: Color,

    pub error: Color,
    pub warning: Color,
    pub success: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::BLUSH_50,
            surface_card: palette::WHITE,

            text_primary: palette::INK_900,
            text_secondary: palette::INK_700,

            brand_primary: palette::ROSE_600,
            brand_secondary: palette::ROSE_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::NIGHT_900,
            surface_card: palette::NIGHT_800,

            text_primary: palette::BLUSH_100,
            text_secondary: palette::BLUSH_200,

            brand_primary: palette::ROSE_400,
            brand_secondary: palette::ROSE_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
        }
    }

    /// Iced palette built from this scheme, on top of `base`.
    #[must_use]
    pub fn iced_palette(&self, base: Palette) -> Palette {
        Palette {
            background: self.surface_primary,
            text: self.text_primary,
            primary: self.brand_primary,
            success: self.success,
            danger: self.error,
            ..base
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // The portal is a light, blush design; fall back to it when
            // detection fails.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }

    /// Builds the iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        let (name, base) = if self.is_dark() {
            ("Valentine Night", Theme::Dark.palette())
        } else {
            ("Valentine", Theme::Light.palette())
        };
        Theme::custom(name.to_string(), self.colors().iced_palette(base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn both_themes_are_rose() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!(scheme.brand_primary.r > scheme.brand_primary.b);
        }
    }

    #[test]
    fn explicit_modes_pick_their_palette() {
        assert_eq!(ThemeMode::Light.colors(), ColorScheme::light());
        assert_eq!(ThemeMode::Dark.colors(), ColorScheme::dark());
        let palette = ThemeMode::Light.theme().palette();
        assert_eq!(palette.primary, palette::ROSE_600);
        // System mode depends on the desktop; it must simply not panic.
        let _ = ThemeMode::System.theme();
    }
}
