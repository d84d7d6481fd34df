// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Saves the preferences edited on the settings screen to `settings.toml`.
//! Failures never interrupt the user: each function returns the i18n key of
//! a warning to show instead.

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::settings::State as SettingsState;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

const SAVE_ERROR_KEY: &str = "notification-config-save-error";

/// Persists theme and wizard preferences, leaving the stored language alone.
pub fn persist_preferences(settings: &SettingsState, config_dir: Option<PathBuf>) -> Option<String> {
    let (mut cfg, _) = config::load_with_override(config_dir.clone());
    cfg.general.theme_mode = settings.theme_mode();
    cfg.wizard.allow_skip_required = settings.allow_skip_required();
    cfg.wizard.autosave_draft = settings.autosave_draft();
    save(&cfg, config_dir)
}

/// Switches the active locale and persists it.
///
/// Locales without a loaded bundle are ignored and not written to disk.
pub fn apply_language_change(
    i18n: &mut I18n,
    locale: LanguageIdentifier,
    config_dir: Option<PathBuf>,
) -> Option<String> {
    if !i18n.available_locales().contains(&locale) {
        tracing::warn!(%locale, "ignoring unsupported locale");
        return None;
    }
    i18n.set_locale(locale.clone());
    tracing::info!(%locale, "language changed");

    let (mut cfg, _) = config::load_with_override(config_dir.clone());
    cfg.general.language = Some(locale.to_string());
    save(&cfg, config_dir)
}

fn save(cfg: &Config, config_dir: Option<PathBuf>) -> Option<String> {
    match config::save_with_override(cfg, config_dir) {
        Ok(()) => None,
        Err(err) => {
            tracing::warn!(error = %err, "failed to save config");
            Some(SAVE_ERROR_KEY.to_string())
        }
    }
}
