// SPDX-License-Identifier: MPL-2.0
//! Settings screen: display language, theme and wizard behaviour.
//!
//! The screen keeps its own copy of the editable preferences. Changes are
//! reported as [`Event`]s so the application can apply them (switch locale,
//! change theme) and persist them to `settings.toml`.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, pick_list, scrollable, toggler, Column, Container, Row, Space, Text},
    Element, Length,
};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Initial values for the settings screen.
#[derive(Debug, Clone, Copy)]
pub struct StateConfig {
    pub theme_mode: ThemeMode,
    pub allow_skip_required: bool,
    pub autosave_draft: bool,
}

#[derive(Debug, Clone)]
pub struct State {
    theme_mode: ThemeMode,
    allow_skip_required: bool,
    autosave_draft: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(StateConfig {
            theme_mode: ThemeMode::default(),
            allow_skip_required: crate::config::DEFAULT_ALLOW_SKIP_REQUIRED,
            autosave_draft: crate::config::DEFAULT_AUTOSAVE_DRAFT,
        })
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    BackToWizard,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    AllowSkipToggled(bool),
    AutosaveToggled(bool),
    ClearNotifications,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    BackToWizard,
    LanguageChanged(LanguageIdentifier),
    ThemeModeChanged(ThemeMode),
    /// A wizard preference changed; persist the configuration.
    PreferencesChanged,
    ClearNotifications,
}

/// Entry of the language picker.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LanguageOption {
    locale: LanguageIdentifier,
    label: String,
}

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl State {
    #[must_use]
    pub fn new(config: StateConfig) -> Self {
        Self {
            theme_mode: config.theme_mode,
            allow_skip_required: config.allow_skip_required,
            autosave_draft: config.autosave_draft,
        }
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn allow_skip_required(&self) -> bool {
        self.allow_skip_required
    }

    #[must_use]
    pub fn autosave_draft(&self) -> bool {
        self.autosave_draft
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::BackToWizard => Event::BackToWizard,
            Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
            Message::ThemeModeSelected(mode) => {
                if self.theme_mode == mode {
                    return Event::None;
                }
                self.theme_mode = mode;
                Event::ThemeModeChanged(mode)
            }
            Message::AllowSkipToggled(enabled) => {
                self.allow_skip_required = enabled;
                Event::PreferencesChanged
            }
            Message::AutosaveToggled(enabled) => {
                self.autosave_draft = enabled;
                Event::PreferencesChanged
            }
            Message::ClearNotifications => Event::ClearNotifications,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let back_button = button(
            Text::new(format!("← {}", ctx.i18n.tr("settings-back-button"))).size(typography::BODY),
        )
        .style(styles::button::unselected)
        .on_press(Message::BackToWizard);

        let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

        let content = Column::new()
            .width(Length::Fill)
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .align_x(Horizontal::Left)
            .push(back_button)
            .push(title)
            .push(self.language_section(&ctx))
            .push(self.theme_section(&ctx))
            .push(toggle_row(
                ctx.i18n.tr("settings-allow-skip-label"),
                self.allow_skip_required,
                Message::AllowSkipToggled,
            ))
            .push(toggle_row(
                ctx.i18n.tr("settings-autosave-label"),
                self.autosave_draft,
                Message::AutosaveToggled,
            ))
            .push(
                button(Text::new(ctx.i18n.tr("settings-clear-notifications-button")))
                    .style(styles::button::unselected)
                    .on_press(Message::ClearNotifications),
            );

        scrollable(Container::new(content).width(Length::Fill)).into()
    }

    fn language_section<'a>(&self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let options: Vec<LanguageOption> = ctx
            .i18n
            .available_locales()
            .iter()
            .map(|locale| LanguageOption {
                locale: locale.clone(),
                label: language_label(ctx.i18n, locale),
            })
            .collect();
        let selected = options
            .iter()
            .find(|opt| &opt.locale == ctx.i18n.current_locale())
            .cloned();

        let picker = pick_list(options, selected, |opt| Message::LanguageSelected(opt.locale))
            .padding(spacing::XS)
            .width(Length::Fixed(sizing::LANGUAGE_PICKER_WIDTH));

        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(ctx.i18n.tr("settings-language-label")).size(typography::TITLE_SM))
            .push(picker)
            .into()
    }

    fn theme_section<'a>(&self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let buttons = ThemeMode::ALL
            .iter()
            .fold(Row::new().spacing(spacing::XS), |row, mode| {
                let style: fn(&iced::Theme, button::Status) -> button::Style =
                    if *mode == self.theme_mode {
                        styles::button::selected
                    } else {
                        styles::button::unselected
                    };
                row.push(
                    button(Text::new(ctx.i18n.tr(mode.i18n_key())))
                        .padding([spacing::XS, spacing::MD])
                        .style(style)
                        .on_press(Message::ThemeModeSelected(*mode)),
                )
            });

        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(ctx.i18n.tr("settings-theme-label")).size(typography::TITLE_SM))
            .push(buttons)
            .into()
    }
}

/// Localized language name, falling back to the locale tag.
fn language_label(i18n: &I18n, locale: &LanguageIdentifier) -> String {
    let translated = i18n.tr(&format!("language-{locale}"));
    if translated.starts_with("MISSING:") {
        locale.to_string()
    } else {
        translated
    }
}

fn toggle_row<'a>(
    label: String,
    enabled: bool,
    on_toggle: fn(bool) -> Message,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(toggler(enabled).on_toggle(on_toggle).size(20.0))
        .into()
}
