// SPDX-License-Identifier: MPL-2.0
//! Glossary tooltips.
//!
//! The popup inverts the page surface (dark on light themes, light on dark
//! themes) so a definition reads as a separate layer over the question.

use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use iced::font::Weight;
use iced::widget::{container, tooltip, Column, Container, Text};
use iced::{Background, Border, Color, Element, Font, Length, Shadow, Theme, Vector};

/// Inverted card behind a glossary definition.
pub fn definition_card(theme: &Theme) -> container::Style {
    let page_is_dark = super::has_dark_background(theme);
    let (surface, ink) = if page_is_dark {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::GRAY_100)
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..surface
        })),
        text_color: Some(ink),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: Shadow {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            offset: Vector::new(0.0, spacing::XXS / 2.0),
            blur_radius: spacing::XS,
        },
        ..container::Style::default()
    }
}

/// Wraps `content` so hovering it shows the glossary `term` and its
/// `definition`.
pub fn term<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    term: String,
    definition: String,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::default()
    };
    let card = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(term).size(typography::BODY_SM).font(bold))
            .push(Text::new(definition).size(typography::BODY_SM)),
    )
    .padding(spacing::XS)
    .width(Length::Shrink)
    .max_width(sizing::TOOLTIP_MAX_WIDTH)
    .style(definition_card);

    tooltip(content, card, position).gap(spacing::XS)
}
