// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the document desk, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors and severity accents
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use docdesk::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let faded_accent = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::SUCCESS_500
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
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.58, 0.64, 0.72); // slate-400
    pub const GRAY_600: Color = Color::from_rgb(0.28, 0.33, 0.41); // slate-600

    // Brand
    pub const PRIMARY_600: Color = Color::from_rgb(0.31, 0.27, 0.90); // indigo-600

    // Severity accents (left border + icon)
    pub const SUCCESS_500: Color = Color::from_rgb(0.063, 0.725, 0.506); // emerald-500
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // red-500
    pub const WARNING_500: Color = Color::from_rgb(0.961, 0.620, 0.043); // amber-500
    pub const INFO_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // blue-500

    // Severity surfaces
    pub const SUCCESS_50: Color = Color::from_rgb(0.925, 0.992, 0.961);
    pub const ERROR_50: Color = Color::from_rgb(0.996, 0.949, 0.949);
    pub const WARNING_50: Color = Color::from_rgb(1.0, 0.984, 0.922);
    pub const INFO_50: Color = Color::from_rgb(0.937, 0.965, 1.0);

    // Severity text
    pub const SUCCESS_800: Color = Color::from_rgb(0.024, 0.373, 0.275);
    pub const ERROR_800: Color = Color::from_rgb(0.600, 0.106, 0.106);
    pub const WARNING_800: Color = Color::from_rgb(0.573, 0.251, 0.055);
    pub const INFO_800: Color = Color::from_rgb(0.118, 0.251, 0.686);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Opacity of a toast while it enters or leaves.
    pub const TRANSITION: f32 = 0.35;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Component Sizing
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;

    pub const TOAST_WIDTH: f32 = 360.0;
    pub const CONTENT_MAX_WIDTH: f32 = 720.0;
    pub const PROGRESS_HEIGHT: f32 = 6.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Widths
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Accent stripe width (`border-l-4`).
    pub const WIDTH_ACCENT: f32 = 4.0;
}

// ============================================================================
// Border Radii
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
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
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TRANSITION > 0.0 && opacity::TRANSITION < 1.0);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(border::WIDTH_ACCENT > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn severity_accents_are_distinct() {
        let accents = [
            palette::SUCCESS_500,
            palette::ERROR_500,
            palette::WARNING_500,
            palette::INFO_500,
        ];
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
