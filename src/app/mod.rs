// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the wizard and settings
//! screens.
//!
//! The `App` struct wires together the questionnaire wizard, localization,
//! settings and the notification queue, and translates component events into
//! side effects like draft autosave, config persistence or saving responses.

pub mod draft;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use update::SharedSink;

use crate::config;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::questionnaire::{FileSink, Questionnaire};
use crate::ui::notifications::{self, NotificationEvent, NotificationSpec};
use crate::ui::settings::{State as SettingsState, StateConfig as SettingsConfig};
use crate::ui::wizard::State as WizardState;
use draft::Draft;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    settings: SettingsState,
    /// `None` when the embedded questionnaire failed to load.
    wizard: Option<WizardState>,
    load_error: Option<Error>,
    notifications: notifications::Manager,
    sink: Option<SharedSink>,
    data_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    draft_warning_shown: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field(
                "stage",
                &self.wizard.as_ref().map(WizardState::current_index),
            )
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Launches the application.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 boots through an `Fn`, so every call starts from a copy.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads configuration, translations, the questionnaire and any saved
    /// draft. Problems along the way become warning toasts; startup never
    /// fails.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);
        let settings = SettingsState::new(SettingsConfig {
            theme_mode: config.general.theme_mode,
            allow_skip_required: config.wizard.allow_skip_required,
            autosave_draft: config.wizard.autosave_draft,
        });

        let sink = match FileSink::in_data_dir(flags.data_dir.clone()) {
            Ok(sink) => {
                tracing::debug!(dir = %sink.dir().display(), "responses directory resolved");
                Some(Arc::new(sink) as SharedSink)
            }
            Err(err) => {
                tracing::warn!(error = %err, "submissions will fail");
                None
            }
        };

        let mut app = App {
            i18n,
            screen: Screen::Wizard,
            settings,
            wizard: None,
            load_error: None,
            notifications: notifications::Manager::new(),
            sink,
            data_dir: flags.data_dir,
            config_dir: flags.config_dir,
            draft_warning_shown: false,
        };

        let mut tasks = Vec::new();
        if let Some(key) = config_warning {
            tasks.push(app.notify_key(NotificationSpec::warning, &key));
        }

        match Questionnaire::load() {
            Ok(questionnaire) => {
                let (draft, draft_warning) = if app.settings.autosave_draft() {
                    Draft::load_from(app.data_dir.clone())
                } else {
                    (None, None)
                };
                if let Some(key) = draft_warning {
                    tasks.push(app.notify_key(NotificationSpec::warning, &key));
                }

                app.wizard = Some(match draft {
                    Some(draft) => {
                        tracing::info!(stage = draft.stage, answers = draft.answers.len(), "draft restored");
                        if !draft.answers.is_empty() {
                            tasks.push(
                                app.notify_key(NotificationSpec::info, "notification-draft-restored"),
                            );
                        }
                        WizardState::restore(questionnaire, draft)
                    }
                    None => WizardState::new(questionnaire),
                });
            }
            Err(err) => {
                tracing::error!(error = %err, "questionnaire could not be loaded");
                app.load_error = Some(err);
            }
        }

        (app, Task::batch(tasks))
    }

    /// Queues a toast and returns the task that expires it.
    pub fn notify(&mut self, spec: NotificationSpec) -> Task<Message> {
        self.notifications.enqueue(spec).map(Message::Notification)
    }

    fn notify_key(&mut self, spec: fn(String) -> NotificationSpec, key: &str) -> Task<Message> {
        let title = self.i18n.tr(key);
        self.notify(spec(title))
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.settings.theme_mode().to_theme()
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            settings: &mut self.settings,
            wizard: &mut self.wizard,
            notifications: &mut self.notifications,
            sink: self.sink.as_ref(),
            data_dir: &self.data_dir,
            config_dir: &self.config_dir,
            draft_warning_shown: &mut self.draft_warning_shown,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                match self.notifications.handle_message(notification_message) {
                    NotificationEvent::None => Task::none(),
                    // Toast buttons carry ordinary app messages.
                    NotificationEvent::Action(action) => self.update(action),
                }
            }
            Message::Wizard(wizard_message) => {
                update::handle_wizard_message(&mut self.update_context(), wizard_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut self.update_context(), settings_message)
            }
            Message::SwitchScreen(target) => {
                update::handle_screen_switch(&mut self.update_context(), target)
            }
            Message::SubmitCompleted(result) => {
                update::handle_submit_completed(&mut self.update_context(), result)
            }
            Message::ExportCompleted(result) => {
                update::handle_export_completed(&mut self.update_context(), result)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            settings: &self.settings,
            wizard: self.wizard.as_ref(),
            load_error: self.load_error.as_ref(),
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::Answer;
    use crate::ui::notifications::{Kind, Notification, NotificationMessage};
    use crate::ui::settings;
    use crate::ui::theming::ThemeMode;
    use crate::ui::wizard;
    use std::fs;
    use tempfile::{tempdir, TempDir};
    use unic_langid::LanguageIdentifier;

    fn flags_in(dir: &TempDir) -> Flags {
        Flags {
            lang: Some("en-US".into()),
            data_dir: Some(dir.path().join("data")),
            config_dir: Some(dir.path().join("config")),
        }
    }

    fn test_app() -> (App, TempDir) {
        let dir = tempdir().expect("temp dir");
        let (app, _task) = App::new(flags_in(&dir));
        (app, dir)
    }

    fn draft_path(dir: &TempDir) -> PathBuf {
        dir.path().join("data").join("draft.cbor")
    }

    fn wizard(app: &App) -> &WizardState {
        app.wizard.as_ref().expect("questionnaire loads")
    }

    fn send(app: &mut App, message: wizard::Message) {
        let _ = app.update(Message::Wizard(message));
    }

    fn select(app: &mut App, question: &str, option: &str) {
        send(
            app,
            wizard::Message::Select {
                question: question.into(),
                option: option.into(),
            },
        );
    }

    fn last_notification(app: &App) -> &Notification {
        app.notifications
            .notifications()
            .last()
            .expect("a notification was queued")
    }

    fn press_action(app: &mut App) {
        let id = last_notification(app).id();
        let _ = app.update(Message::Notification(NotificationMessage::ActionPressed {
            id,
            index: 0,
        }));
    }

    #[test]
    fn new_starts_on_first_stage_without_notifications() {
        let (app, _dir) = test_app();
        assert_eq!(app.screen, Screen::Wizard);
        assert_eq!(wizard(&app).current_index(), 0);
        assert!(app.notifications.is_empty());
        assert!(app.load_error.is_none());
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn missing_required_offers_continue_anyway() {
        let (mut app, _dir) = test_app();

        send(&mut app, wizard::Message::Next);

        let toast = last_notification(&app);
        assert_eq!(toast.kind(), Kind::Warning);
        assert_eq!(toast.actions().len(), 1);
        assert_eq!(wizard(&app).current_index(), 0);

        press_action(&mut app);
        assert_eq!(wizard(&app).current_index(), 1);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn continue_anyway_is_not_offered_when_skipping_is_disabled() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Settings(settings::Message::AllowSkipToggled(false)));

        send(&mut app, wizard::Message::Next);

        let toast = last_notification(&app);
        assert_eq!(toast.kind(), Kind::Warning);
        assert!(toast.actions().is_empty());
    }

    #[test]
    fn stale_continue_action_does_nothing_after_advancing() {
        let (mut app, _dir) = test_app();
        send(&mut app, wizard::Message::Next);
        let stale = last_notification(&app).id();

        select(&mut app, "primary-goal", "wealth-growth");
        send(&mut app, wizard::Message::Next);
        assert_eq!(wizard(&app).current_index(), 1);

        let _ = app.update(Message::Notification(NotificationMessage::ActionPressed {
            id: stale,
            index: 0,
        }));
        assert_eq!(wizard(&app).current_index(), 1);
    }

    #[test]
    fn invalid_number_blocks_with_error_toast() {
        let (mut app, _dir) = test_app();
        select(&mut app, "primary-goal", "wealth-growth");
        send(
            &mut app,
            wizard::Message::NumberChanged {
                question: "target-amount".into(),
                value: "lots".into(),
            },
        );

        send(&mut app, wizard::Message::Next);

        let toast = last_notification(&app);
        assert_eq!(toast.kind(), Kind::Error);
        assert!(toast.actions().is_empty());
        assert!(toast.message().is_some_and(|m| !m.contains("MISSING")));
        assert_eq!(wizard(&app).current_index(), 0);
    }

    #[test]
    fn answers_are_autosaved_and_restored() {
        let dir = tempdir().expect("temp dir");
        let (mut app, _task) = App::new(flags_in(&dir));
        select(&mut app, "primary-goal", "regular-income");
        send(&mut app, wizard::Message::Next);
        assert!(draft_path(&dir).exists());

        let (restored, _task) = App::new(flags_in(&dir));
        let state = wizard(&restored);
        assert_eq!(state.current_index(), 1);
        assert_eq!(
            state.answers().get("primary-goal"),
            Some(&Answer::Choice("regular-income".into()))
        );
        assert_eq!(last_notification(&restored).kind(), Kind::Info);
    }

    #[test]
    fn disabling_autosave_removes_the_draft() {
        let (mut app, dir) = test_app();
        select(&mut app, "primary-goal", "wealth-growth");
        assert!(draft_path(&dir).exists());

        let _ = app.update(Message::Settings(settings::Message::AutosaveToggled(false)));
        assert!(!draft_path(&dir).exists());

        select(&mut app, "primary-goal", "regular-income");
        assert!(!draft_path(&dir).exists());
    }

    #[test]
    fn draft_write_failure_warns_once() {
        let dir = tempdir().expect("temp dir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").expect("write blocker");
        let flags = Flags {
            lang: Some("en-US".into()),
            data_dir: Some(blocker),
            config_dir: Some(dir.path().join("config")),
        };
        let (mut app, _task) = App::new(flags);

        select(&mut app, "primary-goal", "wealth-growth");
        select(&mut app, "primary-goal", "regular-income");

        assert_eq!(app.notifications.len(), 1);
        assert_eq!(last_notification(&app).kind(), Kind::Warning);
    }

    #[test]
    fn invalid_config_shows_warning_on_startup() {
        let dir = tempdir().expect("temp dir");
        let config_dir = dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("create config dir");
        fs::write(config_dir.join("settings.toml"), "[general\nbroken").expect("write config");

        let (app, _task) = App::new(flags_in(&dir));

        let toast = last_notification(&app);
        assert_eq!(toast.kind(), Kind::Warning);
        assert_eq!(toast.title(), app.i18n.tr("notification-config-load-error"));
    }

    #[test]
    fn successful_submission_offers_start_over_and_clears_draft() {
        let (mut app, dir) = test_app();
        select(&mut app, "primary-goal", "wealth-growth");
        assert!(draft_path(&dir).exists());

        let saved = dir.path().join("data").join("responses").join("response.toml");
        let _ = app.update(Message::SubmitCompleted(Ok(saved)));

        let toast = last_notification(&app);
        assert_eq!(toast.kind(), Kind::Success);
        assert!(matches!(
            toast.actions()[0].on_press(),
            Message::Wizard(wizard::Message::Restart)
        ));
        assert!(!draft_path(&dir).exists());

        press_action(&mut app);
        assert!(wizard(&app).answers().is_empty());
        assert_eq!(last_notification(&app).kind(), Kind::Info);
    }

    #[test]
    fn failed_submission_offers_retry() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::SubmitCompleted(Err(Error::Save("disk full".into()))));

        let toast = last_notification(&app);
        assert_eq!(toast.kind(), Kind::Error);
        assert_eq!(toast.message(), Some(app.i18n.tr("error-save").as_str()));
        assert!(matches!(
            toast.actions()[0].on_press(),
            Message::Wizard(wizard::Message::Submit)
        ));
    }

    #[test]
    fn submit_before_last_stage_is_ignored() {
        let (mut app, _dir) = test_app();
        send(&mut app, wizard::Message::Submit);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn cancelled_export_is_silent() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::ExportCompleted(None));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn export_outcomes_are_reported() {
        let (mut app, dir) = test_app();
        let _ = app.update(Message::ExportCompleted(Some(Ok(dir.path().join("out.toml")))));
        assert_eq!(last_notification(&app).kind(), Kind::Success);

        let _ = app.update(Message::ExportCompleted(Some(Err(Error::Io("denied".into())))));
        assert_eq!(last_notification(&app).kind(), Kind::Error);
    }

    #[test]
    fn settings_screen_round_trip() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::SwitchScreen(Screen::Settings));
        assert_eq!(app.screen, Screen::Settings);

        let _ = app.update(Message::Settings(settings::Message::BackToWizard));
        assert_eq!(app.screen, Screen::Wizard);
    }

    #[test]
    fn language_change_is_applied_and_persisted() {
        let (mut app, dir) = test_app();
        let zh: LanguageIdentifier = "zh-CN".parse().expect("valid locale");

        let _ = app.update(Message::Settings(settings::Message::LanguageSelected(zh)));

        assert!(app.i18n.is_chinese());
        let (cfg, _) = config::load_with_override(Some(dir.path().join("config")));
        assert_eq!(cfg.general.language.as_deref(), Some("zh-CN"));
    }

    #[test]
    fn theme_change_is_applied_and_persisted() {
        let (mut app, dir) = test_app();

        let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
            ThemeMode::Dark,
        )));

        assert_eq!(app.theme(), Theme::Dark);
        let (cfg, _) = config::load_with_override(Some(dir.path().join("config")));
        assert_eq!(cfg.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn clear_notifications_empties_queue() {
        let (mut app, _dir) = test_app();
        send(&mut app, wizard::Message::Next);
        assert!(!app.notifications.is_empty());

        let _ = app.update(Message::Settings(settings::Message::ClearNotifications));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn dismiss_and_expiry_remove_toasts_idempotently() {
        let (mut app, _dir) = test_app();
        send(&mut app, wizard::Message::Next);
        let id = last_notification(&app).id();

        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));
        let _ = app.update(Message::Notification(NotificationMessage::Expired(id)));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn restart_deletes_draft_and_returns_to_first_stage() {
        let (mut app, dir) = test_app();
        select(&mut app, "primary-goal", "wealth-growth");
        send(&mut app, wizard::Message::Next);
        assert!(draft_path(&dir).exists());

        send(&mut app, wizard::Message::Restart);

        assert!(!draft_path(&dir).exists());
        assert_eq!(wizard(&app).current_index(), 0);
        assert_eq!(last_notification(&app).kind(), Kind::Info);
    }

    #[test]
    fn view_renders_with_pending_toasts() {
        let (mut app, _dir) = test_app();
        send(&mut app, wizard::Message::Next);
        let _element = app.view();
    }
}
