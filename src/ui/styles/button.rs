// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Every button is drawn from a [`Tone`]: a fill, its hover variant, an edge
//! colour and the label colour. Disabled buttons share one muted look.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

#[derive(Debug, Clone, Copy)]
struct Tone {
    fill: Color,
    hover: Color,
    edge: Color,
    hover_edge: Color,
    text: Color,
    resting_shadow: Shadow,
}

const BRAND: Tone = Tone {
    fill: palette::PRIMARY_500,
    hover: palette::PRIMARY_400,
    edge: palette::PRIMARY_600,
    hover_edge: palette::PRIMARY_500,
    text: palette::WHITE,
    resting_shadow: shadow::SM,
};

const DANGER: Tone = Tone {
    fill: palette::ERROR_500,
    hover: Color {
        a: 0.85,
        ..palette::ERROR_500
    },
    edge: palette::ERROR_500,
    hover_edge: palette::ERROR_500,
    text: palette::WHITE,
    resting_shadow: shadow::NONE,
};

fn is_light(theme: &Theme) -> bool {
    !super::has_dark_background(theme)
}

/// Neutral tone that follows the light/dark theme.
fn neutral(theme: &Theme) -> Tone {
    if is_light(theme) {
        Tone {
            fill: palette::GRAY_100,
            hover: palette::GRAY_200,
            edge: palette::GRAY_400,
            hover_edge: palette::PRIMARY_500,
            text: palette::GRAY_900,
            resting_shadow: shadow::NONE,
        }
    } else {
        Tone {
            fill: palette::GRAY_700,
            hover: Color::from_rgb(0.35, 0.35, 0.35),
            edge: palette::GRAY_400,
            hover_edge: palette::PRIMARY_500,
            text: palette::WHITE,
            resting_shadow: shadow::NONE,
        }
    }
}

fn frame(color: Color) -> Border {
    Border {
        color,
        width: border::WIDTH_SM,
        radius: radius::SM.into(),
    }
}

fn styled(theme: &Theme, tone: Tone, status: button::Status) -> button::Style {
    let (fill, edge, shadow) = match status {
        button::Status::Active | button::Status::Pressed => {
            (tone.fill, tone.edge, tone.resting_shadow)
        }
        button::Status::Hovered => (tone.hover, tone.hover_edge, shadow::MD),
        button::Status::Disabled => {
            let fill = if is_light(theme) {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            };
            return button::Style {
                background: Some(Background::Color(fill)),
                text_color: palette::GRAY_400,
                border: frame(palette::GRAY_400),
                shadow: shadow::NONE,
                snap: true,
            };
        }
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color: tone.text,
        border: frame(edge),
        shadow,
        snap: true,
    }
}

/// Primary action button (next, submit).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    styled(theme, BRAND, status)
}

/// Chosen answer option, or the active entry of a toggle group.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    primary(theme, status)
}

/// Answer option that is not chosen, and secondary actions (back, export).
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let mut style = styled(theme, neutral(theme), status);
    if matches!(status, button::Status::Hovered) {
        style.shadow = shadow::SM;
    }
    style
}

/// Destructive action button (start over).
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    let mut style = styled(theme, DANGER, status);
    if matches!(status, button::Status::Hovered) {
        style.shadow = shadow::SM;
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_and_unselected_differ() {
        let selected = selected(&Theme::Light, button::Status::Active);
        let unselected = unselected(&Theme::Light, button::Status::Active);
        assert_ne!(selected.background, unselected.background);
    }

    #[test]
    fn danger_uses_error_color() {
        let style = danger(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ERROR_500))
        );
    }

    #[test]
    fn primary_hover_lightens() {
        let active = primary(&Theme::Light, button::Status::Active);
        let hovered = primary(&Theme::Light, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn disabled_buttons_are_muted_in_every_tone() {
        for theme in [Theme::Light, Theme::Dark] {
            for style in [
                primary(&theme, button::Status::Disabled),
                unselected(&theme, button::Status::Disabled),
                danger(&theme, button::Status::Disabled),
            ] {
                assert_eq!(style.text_color, palette::GRAY_400);
                assert_eq!(style.shadow, shadow::NONE);
            }
        }
    }

    #[test]
    fn unselected_follows_theme_brightness() {
        let light = unselected(&Theme::Light, button::Status::Active);
        let dark = unselected(&Theme::Dark, button::Status::Active);
        assert_eq!(light.text_color, palette::GRAY_900);
        assert_eq!(dark.text_color, palette::WHITE);
    }
}
