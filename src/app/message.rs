// SPDX-License-Identifier: MPL-2.0
//! Application messages and startup flags.

use super::Screen;
use crate::error::Error;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::wizard;
use std::path::PathBuf;

/// Top-level messages consumed by [`App::update`](super::App::update).
///
/// Notification actions carry one of these, so a toast button can trigger
/// any wizard or settings transition.
#[derive(Debug, Clone)]
pub enum Message {
    Wizard(wizard::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    SwitchScreen(Screen),
    /// Result of handing the answers to the save sink.
    SubmitCompleted(Result<PathBuf, Error>),
    /// Result of the export dialog and write; `None` when the user cancelled.
    ExportCompleted(Option<Result<PathBuf, Error>>),
}

/// Runtime flags passed from the command line into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `zh-CN`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (draft and responses).
    /// Takes precedence over `INVEST_COMPASS_DATA_DIR`.
    pub data_dir: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `INVEST_COMPASS_CONFIG_DIR`.
    pub config_dir: Option<PathBuf>,
}
