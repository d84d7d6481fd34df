// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Components report what happened through their `Event` types; the
//! handlers here turn those events into side effects: toasts, the answer
//! draft, configuration writes and background save/export tasks.

use super::draft::Draft;
use super::{persistence, Message, Screen};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::questionnaire::{Answers, InvalidAnswer, Issue, Response, SaveSink};
use crate::ui::notifications::{
    self, Action, ActionStyle, NotificationEvent, NotificationMessage,
};
use crate::ui::settings::{self, Event as SettingsEvent, State as SettingsState};
use crate::ui::wizard::{self, Event as WizardEvent, State as WizardState};
use chrono::Local;
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

/// Save sink shared with background submission tasks.
pub type SharedSink = Arc<dyn SaveSink + Send + Sync>;

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub settings: &'a mut SettingsState,
    pub wizard: &'a mut Option<WizardState>,
    pub notifications: &'a mut notifications::Manager,
    pub sink: Option<&'a SharedSink>,
    pub data_dir: &'a Option<PathBuf>,
    pub config_dir: &'a Option<PathBuf>,
    /// Set once a draft write failed, so repeated failures do not flood the
    /// queue; cleared by the next successful write.
    pub draft_warning_shown: &'a mut bool,
}

impl UpdateContext<'_> {
    fn warn(&mut self, key: &str) -> Task<Message> {
        let title = self.i18n.tr(key);
        self.notifications
            .warning(title, None, Vec::new())
            .map(Message::Notification)
    }

    fn warn_if(&mut self, key: Option<String>) -> Task<Message> {
        key.map_or_else(Task::none, |key| self.warn(&key))
    }
}

pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    *ctx.screen = target;
    Task::none()
}

pub fn handle_wizard_message(ctx: &mut UpdateContext<'_>, message: wizard::Message) -> Task<Message> {
    let Some(wizard) = ctx.wizard.as_mut() else {
        return Task::none();
    };

    let event = wizard.update(message);
    let wizard: &WizardState = wizard;

    match event {
        WizardEvent::None => Task::none(),
        WizardEvent::AnswersChanged | WizardEvent::StageChanged => save_draft(ctx),
        WizardEvent::InvalidAnswers(invalid) => {
            let separator = ctx.i18n.tr("list-separator");
            let details = invalid
                .iter()
                .map(|item| describe_invalid(ctx.i18n, wizard, item))
                .collect::<Vec<_>>()
                .join(&separator);
            let title = ctx.i18n.tr("notification-invalid-answers-title");
            ctx.notifications
                .error(title, Some(details), Vec::new())
                .map(Message::Notification)
        }
        WizardEvent::MissingRequired(missing) => {
            let separator = ctx.i18n.tr("list-separator");
            let questions = missing
                .iter()
                .map(|id| question_label(ctx.i18n, wizard, id))
                .collect::<Vec<_>>()
                .join(&separator);

            let title = ctx.i18n.tr("notification-missing-required-title");
            let message = ctx.i18n.tr_with_args(
                "notification-missing-required-message",
                &[("questions", questions.as_str())],
            );
            let actions = if ctx.settings.allow_skip_required() {
                vec![Action::new(
                    ctx.i18n.tr("notification-continue-anyway"),
                    Message::Wizard(wizard::Message::ForceNext),
                )
                .style(ActionStyle::Primary)]
            } else {
                Vec::new()
            };
            ctx.notifications
                .warning(title, Some(message), actions)
                .map(Message::Notification)
        }
        WizardEvent::SubmitIncomplete { stage } => {
            let stage_title = wizard
                .questionnaire()
                .stage(stage)
                .map(|s| ctx.i18n.tr(&s.title_key()))
                .unwrap_or_default();
            let title = ctx.i18n.tr("notification-submit-incomplete-title");
            let message = ctx.i18n.tr_with_args(
                "notification-submit-incomplete-message",
                &[("stage", stage_title.as_str())],
            );
            let go_to_stage = Action::new(
                ctx.i18n.tr("notification-go-to-stage"),
                Message::Wizard(wizard::Message::JumpTo(stage)),
            )
            .style(ActionStyle::Primary);
            ctx.notifications
                .warning(title, Some(message), vec![go_to_stage])
                .map(Message::Notification)
        }
        WizardEvent::Submit(answers) => submit(ctx.sink.cloned(), answers),
        WizardEvent::Export(answers) => export(answers),
        WizardEvent::Restarted => {
            Draft::delete_from(ctx.data_dir.clone());
            let title = ctx.i18n.tr("notification-restarted");
            ctx.notifications
                .info(title, None, Vec::new())
                .map(Message::Notification)
        }
    }
}

pub fn handle_submit_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            Draft::delete_from(ctx.data_dir.clone());
            let path = path.display().to_string();
            let title = ctx.i18n.tr("notification-saved-title");
            let message =
                ctx.i18n.tr_with_args("notification-saved-message", &[("path", path.as_str())]);
            let start_over = Action::new(
                ctx.i18n.tr("notification-start-over"),
                Message::Wizard(wizard::Message::Restart),
            );
            ctx.notifications
                .success(title, Some(message), vec![start_over])
                .map(Message::Notification)
        }
        Err(err) => {
            tracing::error!(error = %err, "submission failed");
            let title = ctx.i18n.tr("notification-save-failed-title");
            let retry = Action::new(
                ctx.i18n.tr("notification-retry"),
                Message::Wizard(wizard::Message::Submit),
            )
            .style(ActionStyle::Primary);
            ctx.notifications
                .error(title, Some(ctx.i18n.tr(err.i18n_key())), vec![retry])
                .map(Message::Notification)
        }
    }
}

pub fn handle_export_completed(
    ctx: &mut UpdateContext<'_>,
    result: Option<Result<PathBuf, Error>>,
) -> Task<Message> {
    match result {
        None => {
            tracing::debug!("export cancelled");
            Task::none()
        }
        Some(Ok(path)) => {
            tracing::info!(path = %path.display(), "responses exported");
            let path = path.display().to_string();
            let title = ctx.i18n.tr("notification-exported-title");
            let message =
                ctx.i18n.tr_with_args("notification-saved-message", &[("path", path.as_str())]);
            ctx.notifications
                .success(title, Some(message), Vec::new())
                .map(Message::Notification)
        }
        Some(Err(err)) => {
            tracing::error!(error = %err, "export failed");
            let title = ctx.i18n.tr("notification-export-failed-title");
            ctx.notifications
                .error(title, Some(ctx.i18n.tr(err.i18n_key())), Vec::new())
                .map(Message::Notification)
        }
    }
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match ctx.settings.update(message) {
        SettingsEvent::None => Task::none(),
        SettingsEvent::BackToWizard => handle_screen_switch(ctx, Screen::Wizard),
        SettingsEvent::LanguageChanged(locale) => {
            let warning = persistence::apply_language_change(ctx.i18n, locale, ctx.config_dir.clone());
            ctx.warn_if(warning)
        }
        SettingsEvent::ThemeModeChanged(mode) => {
            tracing::debug!(?mode, "theme mode changed");
            let warning = persistence::persist_preferences(ctx.settings, ctx.config_dir.clone());
            ctx.warn_if(warning)
        }
        SettingsEvent::PreferencesChanged => {
            let warning = persistence::persist_preferences(ctx.settings, ctx.config_dir.clone());
            let persisted = ctx.warn_if(warning);
            // Turning autosave off also forgets the stored draft.
            let draft = if ctx.settings.autosave_draft() {
                save_draft(ctx)
            } else {
                Draft::delete_from(ctx.data_dir.clone());
                Task::none()
            };
            Task::batch([persisted, draft])
        }
        SettingsEvent::ClearNotifications => {
            match ctx.notifications.handle_message(NotificationMessage::ClearAll) {
                NotificationEvent::None => Task::none(),
                NotificationEvent::Action(action) => Task::done(action),
            }
        }
    }
}

/// Writes the wizard position and answers to the draft file when autosave
/// is enabled.
fn save_draft(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.settings.autosave_draft() {
        return Task::none();
    }
    let Some(wizard) = ctx.wizard.as_ref() else {
        return Task::none();
    };

    match wizard.to_draft().save_to(ctx.data_dir.clone()) {
        None => {
            *ctx.draft_warning_shown = false;
            Task::none()
        }
        Some(key) if !*ctx.draft_warning_shown => {
            *ctx.draft_warning_shown = true;
            ctx.warn(&key)
        }
        Some(_) => Task::none(),
    }
}

fn submit(sink: Option<SharedSink>, answers: Answers) -> Task<Message> {
    let Some(sink) = sink else {
        return Task::done(Message::SubmitCompleted(Err(Error::Save(
            "no data directory available".into(),
        ))));
    };
    tracing::debug!(answers = answers.len(), "submitting responses");
    Task::perform(async move { sink.save(&answers) }, Message::SubmitCompleted)
}

fn export(answers: Answers) -> Task<Message> {
    let filename = format!("responses-{}.toml", Local::now().format("%Y%m%d-%H%M%S"));
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_file_name(&filename)
                .add_filter("TOML", &["toml"]);
            if let Some(dir) = dirs::document_dir() {
                dialog = dialog.set_directory(&dir);
            }

            let path = dialog.save_file().await.map(|h| h.path().to_path_buf())?;
            Some(
                Response::new(&answers, Local::now())
                    .write_to(&path)
                    .map(|()| path),
            )
        },
        Message::ExportCompleted,
    )
}

/// Localized prompt of a question, falling back to its id.
fn question_label(i18n: &I18n, wizard: &WizardState, id: &str) -> String {
    wizard
        .questionnaire()
        .question(id)
        .map_or_else(|| id.to_string(), |(_, q)| i18n.tr(&q.prompt_key()))
}

/// One line describing why an answer was rejected.
fn describe_invalid(i18n: &I18n, wizard: &WizardState, invalid: &InvalidAnswer) -> String {
    let question = question_label(i18n, wizard, &invalid.question_id);
    let question = question.as_str();

    match &invalid.issue {
        Issue::NotANumber => i18n.tr_with_args("validation-number-invalid", &[("question", question)]),
        Issue::OutOfRange { min, max } => match (min, max) {
            (Some(min), Some(max)) => i18n.tr_with_args(
                "validation-number-range",
                &[
                    ("question", question),
                    ("min", min.to_string().as_str()),
                    ("max", max.to_string().as_str()),
                ],
            ),
            (Some(min), None) => i18n.tr_with_args(
                "validation-number-min",
                &[("question", question), ("min", min.to_string().as_str())],
            ),
            (None, Some(max)) => i18n.tr_with_args(
                "validation-number-max",
                &[("question", question), ("max", max.to_string().as_str())],
            ),
            (None, None) => i18n.tr_with_args("validation-number-invalid", &[("question", question)]),
        },
        Issue::TooFewSelections { min } => i18n.tr_with_args(
            "validation-too-few",
            &[("question", question), ("min", min.to_string().as_str())],
        ),
        Issue::UnknownOption => i18n.tr_with_args("validation-unknown-option", &[("question", question)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::Questionnaire;

    fn wizard() -> WizardState {
        WizardState::new(Questionnaire::load().expect("embedded questionnaire is valid"))
    }

    #[test]
    fn describe_invalid_formats_closed_range() {
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        let line = describe_invalid(
            &i18n,
            &wizard(),
            &InvalidAnswer {
                question_id: "target-amount".into(),
                issue: Issue::OutOfRange {
                    min: Some(0.0),
                    max: Some(100.0),
                },
            },
        );
        assert!(line.contains("0"));
        assert!(line.contains("100"));
        assert!(!line.contains("MISSING"));
    }

    #[test]
    fn describe_invalid_handles_open_ranges() {
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        let wizard = wizard();
        for issue in [
            Issue::OutOfRange {
                min: Some(1.0),
                max: None,
            },
            Issue::OutOfRange {
                min: None,
                max: Some(5.0),
            },
            Issue::NotANumber,
            Issue::TooFewSelections { min: 2 },
            Issue::UnknownOption,
        ] {
            let line = describe_invalid(
                &i18n,
                &wizard,
                &InvalidAnswer {
                    question_id: "annual-income".into(),
                    issue,
                },
            );
            assert!(!line.contains("MISSING"), "untranslated: {line}");
        }
    }

    #[test]
    fn unknown_question_label_falls_back_to_id() {
        let i18n = I18n::default();
        assert_eq!(question_label(&i18n, &wizard(), "no-such-question"), "no-such-question");
    }
}
