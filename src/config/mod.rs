// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in `settings.toml`.
//!
//! ```toml
//! [general]
//! language = "zh-CN"      # omitted until the user picks one
//! theme_mode = "system"   # light | dark | system
//!
//! [wizard]
//! allow_skip_required = true
//! autosave_draft = true
//! ```
//!
//! Missing sections and keys take their defaults from [`defaults`]. A file
//! that cannot be parsed is never fatal: the application starts with
//! [`Config::default`] and tells the user their settings were reset.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the toast shown when `settings.toml` is unreadable.
pub const LOAD_WARNING_KEY: &str = "notification-config-load-error";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Locale chosen in the settings screen, e.g. `en-US` or `zh-CN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// How the questionnaire treats incomplete stages and unsaved answers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WizardConfig {
    /// Offer "Continue anyway" when required questions are unanswered.
    pub allow_skip_required: bool,
    /// Persist in-progress answers so they survive a restart.
    pub autosave_draft: bool,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            allow_skip_required: DEFAULT_ALLOW_SKIP_REQUIRED,
            autosave_draft: DEFAULT_AUTOSAVE_DRAFT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
}

fn settings_file(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads preferences from `base_dir` (or the resolved config directory).
///
/// Returns the config plus, when the file existed but could not be read, the
/// i18n key of a warning for the user. A missing file is silent.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = settings_file(base_dir).filter(|path| path.exists()) else {
        return (Config::default(), None);
    };

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "settings unreadable, using defaults");
            (Config::default(), Some(LOAD_WARNING_KEY.to_string()))
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Writes preferences into `base_dir` (or the resolved config directory).
///
/// Does nothing when no config directory can be determined.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match settings_file(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => {
            tracing::debug!("no config directory available, preferences not saved");
            Ok(())
        }
    }
}

/// Writes preferences to `path`, creating missing parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn preferences_survive_save_and_reload() {
        let config = Config {
            general: GeneralConfig {
                language: Some("zh-CN".to_string()),
                theme_mode: ThemeMode::Light,
            },
            wizard: WizardConfig {
                allow_skip_required: false,
                autosave_draft: false,
            },
        };
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &path).expect("failed to save config");
        assert_eq!(load_from_path(&path).expect("failed to load config"), config);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not = valid = toml").expect("failed to write file");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn malformed_file_falls_back_with_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "[general\nbroken").expect("failed to write file");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING_KEY));
    }

    #[test]
    fn missing_file_loads_defaults_silently() {
        let dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"en-US\"\n\n[wizard]\nautosave_draft = false\n")
            .expect("partial config should parse");
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.wizard.allow_skip_required, DEFAULT_ALLOW_SKIP_REQUIRED);
        assert!(!config.wizard.autosave_draft);
    }

    #[test]
    fn save_with_override_creates_settings_file() {
        let dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(dir.path().join(CONFIG_FILE).exists());
    }
}
