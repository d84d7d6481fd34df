// SPDX-License-Identifier: MPL-2.0
//! Where the application keeps its files.
//!
//! The data directory holds the answer draft and submitted responses; the
//! config directory holds `settings.toml`. Each one is resolved from the
//! first source that yields a path:
//!
//! 1. an explicit override passed by the caller (tests, embedding)
//! 2. `--data-dir` / `--config-dir` recorded by [`init_cli_overrides`]
//! 3. `INVEST_COMPASS_DATA_DIR` / `INVEST_COMPASS_CONFIG_DIR`
//! 4. the platform directory from `dirs`, suffixed with the app name

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "InvestCompass";

pub const ENV_DATA_DIR: &str = "INVEST_COMPASS_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "INVEST_COMPASS_CONFIG_DIR";

/// Subdirectory of the data directory that receives submitted responses.
pub const RESPONSES_DIR: &str = "responses";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    Data,
    Config,
}

impl Location {
    fn env_var(self) -> &'static str {
        match self {
            Location::Data => ENV_DATA_DIR,
            Location::Config => ENV_CONFIG_DIR,
        }
    }

    fn cli_override(self) -> Option<PathBuf> {
        let cell = match self {
            Location::Data => &CLI_DATA_DIR,
            Location::Config => &CLI_CONFIG_DIR,
        };
        cell.get().cloned().flatten()
    }

    fn platform_default(self) -> Option<PathBuf> {
        let base = match self {
            Location::Data => dirs::data_dir(),
            Location::Config => dirs::config_dir(),
        };
        base.map(|dir| dir.join(APP_NAME))
    }

    fn resolve(self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit
            .or_else(|| self.cli_override())
            .or_else(|| {
                std::env::var_os(self.env_var())
                    .filter(|value| !value.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| self.platform_default())
    }
}

/// Records the directories given on the command line.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    for (cell, value, label) in [
        (&CLI_DATA_DIR, data_dir, "data"),
        (&CLI_CONFIG_DIR, config_dir, "config"),
    ] {
        if cell.set(value.map(PathBuf::from)).is_err() {
            tracing::warn!(dir = label, "command-line directory override already set");
        }
    }
}

/// Resolves the data directory, preferring `override_path` when given.
///
/// Returns `None` only when no platform data directory exists.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    Location::Data.resolve(override_path)
}

/// Resolves the directory that receives submitted responses.
pub fn get_responses_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    get_app_data_dir_with_override(override_path).map(|dir| dir.join(RESPONSES_DIR))
}

/// Resolves the config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    Location::Config.resolve(override_path)
}
