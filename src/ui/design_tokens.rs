// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the portal: colors, spacing, sizes, type scale,
radii and shadows. Widgets read these instead of hard-coding numbers.

## Examples

```
use valentine_portal::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let veil = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::ROSE_500
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Neutrals
    pub const WHITE: Color = Color::WHITE;
    pub const INK_900: Color = Color::from_rgb(0.16, 0.09, 0.12);
    pub const INK_700: Color = Color::from_rgb(0.33, 0.22, 0.27);
    pub const INK_400: Color = Color::from_rgb(0.55, 0.45, 0.5);
    pub const BLUSH_200: Color = Color::from_rgb(0.98, 0.85, 0.89);
    pub const BLUSH_100: Color = Color::from_rgb(1.0, 0.94, 0.96);
    pub const BLUSH_50: Color = Color::from_rgb(1.0, 0.97, 0.98);
    pub const NIGHT_900: Color = Color::from_rgb(0.1, 0.06, 0.09);
    pub const NIGHT_800: Color = Color::from_rgb(0.16, 0.1, 0.14);

    // Brand (rose scale)
    pub const ROSE_300: Color = Color::from_rgb(0.99, 0.64, 0.69);
    pub const ROSE_400: Color = Color::from_rgb(0.98, 0.44, 0.52);
    pub const ROSE_500: Color = Color::from_rgb(0.96, 0.25, 0.37);
    pub const ROSE_600: Color = Color::from_rgb(0.88, 0.11, 0.28);
    pub const ROSE_700: Color = Color::from_rgb(0.75, 0.07, 0.24);

    // Semantic
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const GOLD_500: Color = Color::from_rgb(0.85, 0.65, 0.2);

    /// Balloon colors, cycled across the celebration overlay.
    pub const BALLOONS: [Color; 4] = [ROSE_500, ROSE_300, GOLD_500, ROSE_700];
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;

    /// Card surfaces laid over the page background.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of the PIN gate card.
    pub const GATE_WIDTH: f32 = 420.0;
    /// Maximum width of the page column.
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;
    /// Height of one photo tile.
    pub const PHOTO_HEIGHT: f32 = 220.0;
    /// Width of the Valentine certificate.
    pub const CERTIFICATE_WIDTH: f32 = 560.0;

    pub const BALLOON_SIZE: f32 = 40.0;
    /// Thickness of the quiz score bar.
    pub const PROGRESS_HEIGHT: f32 = 12.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero title on Home and the gate.
    pub const DISPLAY: f32 = 40.0;

    /// Page headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Card titles.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Photo captions, hints.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const TINT: Color = Color {
        r: 0.5,
        g: 0.05,
        b: 0.15,
        a: 0.25,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);

    assert!(sizing::CERTIFICATE_WIDTH <= sizing::CONTENT_MAX_WIDTH);
    assert!(sizing::GATE_WIDTH <= sizing::CONTENT_MAX_WIDTH);
};
