// SPDX-License-Identifier: MPL-2.0
//! Toast cards and the overlay that stacks them.
//!
//! A card shows the kind glyph, the title, the time it was raised and a close
//! button, then the optional message and a right-aligned row of actions. The
//! card border takes the kind's accent colour.

use super::manager::{Manager, Message};
use super::notification::{Action, ActionStyle, Notification, NotificationId};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Column, Container, Row, Space, Text};
use iced::{font::Weight, Background, Border, Color, Element, Font, Length, Theme};

/// Renders notifications held by a [`Manager`].
pub struct Toast;

impl Toast {
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let accent = notification.kind().color();

        let mut card = Column::new()
            .spacing(spacing::XS)
            .push(header(notification, accent));

        if let Some(message) = notification.message() {
            card = card.push(Text::new(message).size(typography::BODY_SM));
        }
        if !notification.actions().is_empty() {
            card = card.push(actions(notification.id(), notification.actions()));
        }

        Container::new(card)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, accent))
            .into()
    }

    /// Stacks every queued toast in the bottom-right corner, oldest on top.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        if manager.is_empty() {
            return Space::new().into();
        }

        let column = manager
            .notifications()
            .fold(Column::new().spacing(spacing::XS), |column, notification| {
                column.push(Self::view(notification))
            })
            .align_x(Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .into()
    }
}

fn header(notification: &Notification, accent: Color) -> Row<'_, Message> {
    let glyph = Text::new(notification.kind().glyph())
        .size(typography::TITLE_SM)
        .style(move |_: &Theme| text::Style {
            color: Some(accent),
        });
    let title = Text::new(notification.title())
        .size(typography::BODY)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });
    let raised_at = Text::new(notification.created_at().format("%H:%M").to_string())
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });
    let close = button(Text::new("×").size(typography::BODY))
        .padding(spacing::XXS)
        .style(close_button_style)
        .on_press(Message::Dismiss(notification.id()));

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(glyph)
        .push(Container::new(title).width(Length::Fill))
        .push(raised_at)
        .push(close)
}

fn actions(id: NotificationId, actions: &[Action]) -> Container<'_, Message> {
    let row = actions
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, action)| {
            row.push(
                button(Text::new(action.label()).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(action_button_style(action.action_style()))
                    .on_press(Message::ActionPressed { id, index }),
            )
        });

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
}

fn action_button_style(style: ActionStyle) -> fn(&Theme, button::Status) -> button::Style {
    match style {
        ActionStyle::Primary => styles::button::primary,
        ActionStyle::Secondary => styles::button::unselected,
        ActionStyle::Danger => styles::button::danger,
    }
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.extended_palette().background.base.color)),
        text_color: Some(theme.palette().text),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let wash = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: wash.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: theme.extended_palette().background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
