// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by the wizard, the settings screen and the toasts.
//!
//! Styles and views read their colours and measurements from here instead of
//! hard-coding them, so the questionnaire keeps one look across screens.
//!
//! ```
//! use invest_compass::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let card = Color { a: opacity::SURFACE, ..palette::WHITE };
//! let gap = spacing::MD;
//! # let _ = (card, gap);
//! ```

/// Colours. Neutrals run from `GRAY_100` (lightest) to `GRAY_900`.
pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);

    /// Brand blue: primary buttons, chosen options, progress.
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // One accent per notification severity; ERROR also marks invalid input.
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod opacity {
    /// Hover wash over neutral surfaces.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Tooltip and toast shadows.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Cards and toasts sitting over the page.
    pub const SURFACE: f32 = 0.95;
}

/// Gaps and paddings on a 4px step.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const CONTENT_MAX_WIDTH: f32 = 760.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const TOOLTIP_MAX_WIDTH: f32 = 300.0;
    pub const NUMBER_INPUT_WIDTH: f32 = 240.0;
    pub const LANGUAGE_PICKER_WIDTH: f32 = 240.0;
}

/// Font sizes, largest first.
pub mod typography {
    /// Stage and screen headings.
    pub const TITLE_LG: f32 = 30.0;
    /// Review summary heading.
    pub const TITLE_MD: f32 = 20.0;
    /// Top bar and section headers.
    pub const TITLE_SM: f32 = 18.0;
    /// Question prompts.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Help text and toast messages.
    pub const BODY_SM: f32 = 13.0;
    /// Progress, timestamps, hints.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent stripe.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    const fn drop(depth: f32) -> Shadow {
        Shadow {
            color: palette::BLACK,
            offset: Vector { x: 0.0, y: depth },
            blur_radius: depth * 2.0,
        }
    }

    pub const NONE: Shadow = drop(0.0);
    pub const SM: Shadow = drop(2.0);
    pub const MD: Shadow = drop(4.0);
}

// Scales must stay ordered; a misordered edit fails the build.
const _: () = {
    assert!(spacing::XXS < spacing::XS && spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD && spacing::MD < spacing::LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::SURFACE < 1.0);
    assert!(sizing::TOAST_WIDTH < sizing::CONTENT_MAX_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_accents_are_distinguishable() {
        let accents = [
            palette::SUCCESS_500,
            palette::INFO_500,
            palette::WARNING_500,
            palette::ERROR_500,
        ];
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn flat_shadow_has_no_offset_or_blur() {
        assert_eq!(shadow::NONE.offset, iced::Vector::ZERO);
        assert_eq!(shadow::NONE.blur_radius, 0.0);
        assert!(shadow::MD.blur_radius > shadow::SM.blur_radius);
    }
}
