// SPDX-License-Identifier: MPL-2.0
//! In-progress answers persisted between sessions using CBOR.
//!
//! The draft holds the wizard position and the answers given so far. It is
//! not user-editable, so it lives next to submitted responses in the data
//! directory rather than in `settings.toml`.
//!
//! # Path Resolution
//!
//! 1. Explicit `base_dir` passed to `load_from()`/`save_to()`/`delete_from()`
//! 2. `--data-dir` CLI flag
//! 3. `INVEST_COMPASS_DATA_DIR` environment variable
//! 4. Platform-specific data directory

use super::paths;
use crate::questionnaire::Answers;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Draft file name within the app data directory.
const DRAFT_FILE: &str = "draft.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Draft {
    /// Index of the stage the user was on.
    #[serde(default)]
    pub stage: usize,
    /// Stages the user has reached, so jumps stay available after restore.
    #[serde(default)]
    pub visited: Vec<usize>,
    #[serde(default)]
    pub answers: Answers,
}

impl Draft {
    /// Loads the draft from a custom directory.
    ///
    /// Returns `(None, None)` when no draft exists and `(None, Some(key))`
    /// when a draft exists but cannot be read; the key is a notification
    /// message id.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Option<Self>, Option<String>) {
        let Some(path) = Self::draft_file_path_with_override(base_dir) else {
            return (None, None);
        };

        if !path.exists() {
            return (None, None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(draft) => (Some(draft), None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable draft");
                    (None, Some("notification-draft-load-error".to_string()))
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not open draft");
                (None, Some("notification-draft-load-error".to_string()))
            }
        }
    }

    /// Saves the draft to a custom directory.
    ///
    /// Returns a notification message id if the save failed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::draft_file_path_with_override(base_dir) else {
            return Some("notification-draft-save-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-draft-save-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if let Err(err) = ciborium::into_writer(self, BufWriter::new(file)) {
                    tracing::warn!(path = %path.display(), error = %err, "could not write draft");
                    return Some("notification-draft-save-error".to_string());
                }
                None
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not create draft");
                Some("notification-draft-save-error".to_string())
            }
        }
    }

    /// Removes the draft file if present. Missing files are not an error.
    pub fn delete_from(base_dir: Option<PathBuf>) {
        let Some(path) = Self::draft_file_path_with_override(base_dir) else {
            return;
        };
        match fs::remove_file(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "draft removed"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(path = %path.display(), error = %err, "could not remove draft"),
        }
    }

    fn draft_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(DRAFT_FILE);
            path
        })
    }
}
