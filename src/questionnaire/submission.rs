// SPDX-License-Identifier: MPL-2.0
//! Rendering and storing submitted responses.
//!
//! A submission is written as a small TOML document: the submission time
//! and one entry per answered question. Choice answers keep their option
//! ids, number answers are written as numbers when they parse.

use super::answers::{Answer, Answers};
use super::validation::parse_number;
use crate::app::paths;
use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name prefix of stored responses.
const RESPONSE_PREFIX: &str = "response";

/// Where submitted answers go.
pub trait SaveSink {
    /// Stores the answers and returns the path they were written to.
    fn save(&self, answers: &Answers) -> Result<PathBuf>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl From<&Answer> for ExportValue {
    fn from(answer: &Answer) -> Self {
        match answer {
            Answer::Choice(option) => ExportValue::Text(option.clone()),
            Answer::Choices(options) => ExportValue::List(options.iter().cloned().collect()),
            Answer::Text(value) => ExportValue::Text(value.trim().to_string()),
            Answer::Number(raw) => parse_number(raw)
                .map_or_else(|| ExportValue::Text(raw.trim().to_string()), ExportValue::Number),
        }
    }
}

/// The document written for one submission.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub submitted_at: String,
    pub answers: BTreeMap<String, ExportValue>,
}

impl Response {
    #[must_use]
    pub fn new(answers: &Answers, submitted_at: DateTime<Local>) -> Self {
        Self {
            submitted_at: submitted_at.to_rfc3339(),
            answers: answers
                .answered()
                .map(|(id, answer)| (id.to_string(), ExportValue::from(answer)))
                .collect(),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| Error::Save(err.to_string()))
    }

    /// Writes the document to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| Error::Save(format!("{}: {err}", parent.display())))?;
        }
        fs::write(path, content).map_err(|err| Error::Save(format!("{}: {err}", path.display())))
    }
}

/// Writes each submission to its own timestamped file in a directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Sink for the `responses` directory inside the app data directory.
    pub fn in_data_dir(base_dir: Option<PathBuf>) -> Result<Self> {
        paths::get_responses_dir_with_override(base_dir)
            .map(Self::new)
            .ok_or_else(|| Error::Save("no data directory available".into()))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// First free `response-<timestamp>[-n].toml` path in the directory.
    fn next_path(&self, now: DateTime<Local>) -> PathBuf {
        let stem = format!("{RESPONSE_PREFIX}-{}", now.format("%Y%m%d-%H%M%S"));
        let mut path = self.dir.join(format!("{stem}.toml"));
        let mut n = 1;
        while path.exists() {
            path = self.dir.join(format!("{stem}-{n}.toml"));
            n += 1;
        }
        path
    }
}

impl SaveSink for FileSink {
    fn save(&self, answers: &Answers) -> Result<PathBuf> {
        let now = Local::now();
        let path = self.next_path(now);
        Response::new(answers, now).write_to(&path)?;
        tracing::info!(path = %path.display(), answers = answers.len(), "responses saved");
        Ok(path)
    }
}
