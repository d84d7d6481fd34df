// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the top bar and the active screen, with the toast overlay stacked
//! above them.

use super::{Message, Screen};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::settings::{State as SettingsState, ViewContext as SettingsViewContext};
use crate::ui::styles;
use crate::ui::wizard::{self, State as WizardState};
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, Column, Container, Row, Space, Stack, Text},
    Element, Font, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub settings: &'a SettingsState,
    pub wizard: Option<&'a WizardState>,
    pub load_error: Option<&'a Error>,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Wizard => view_wizard(ctx.wizard, ctx.load_error, ctx.i18n),
        Screen::Settings => ctx
            .settings
            .view(SettingsViewContext { i18n: ctx.i18n })
            .map(Message::Settings),
    };

    let page = Column::new()
        .push(top_bar(ctx.i18n, ctx.screen))
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .into()
}

fn top_bar<'a>(i18n: &'a I18n, screen: Screen) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("window-title"))
        .size(typography::TITLE_SM)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let mut row = Row::new()
        .padding([spacing::XS, spacing::MD])
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill));

    if screen == Screen::Wizard {
        row = row.push(
            button(Text::new(i18n.tr("nav-settings-button")).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::unselected)
                .on_press(Message::SwitchScreen(Screen::Settings)),
        );
    }

    row.into()
}

fn view_wizard<'a>(
    wizard: Option<&'a WizardState>,
    load_error: Option<&'a Error>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    if let Some(state) = wizard {
        return wizard::view(wizard::ViewContext { i18n, state }).map(Message::Wizard);
    }

    let details = load_error.map(ToString::to_string).unwrap_or_default();
    Container::new(
        Text::new(i18n.tr_with_args("wizard-load-error", &[("details", details.as_str())]))
            .size(typography::BODY_LG)
            .color(palette::ERROR_500),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .padding(spacing::LG)
    .into()
}
