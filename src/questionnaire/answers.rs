// SPDX-License-Identifier: MPL-2.0
//! The user's answers, keyed by question id.
//!
//! Empty input never produces an entry: clearing a text field, emptying a
//! number field or deselecting the last option removes the answer, so
//! "answered" is simply "present in the map".

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Answer {
    Choice(String),
    Choices(BTreeSet<String>),
    Text(String),
    /// Raw input as typed; parsed during validation.
    Number(String),
}

impl Answer {
    fn is_empty(&self) -> bool {
        match self {
            Answer::Choice(option) => option.is_empty(),
            Answer::Choices(options) => options.is_empty(),
            Answer::Text(value) | Answer::Number(value) => value.is_empty(),
        }
    }

    /// Whether the answer carries nothing but whitespace.
    ///
    /// Blank input is kept as typed, so the field keeps its content, but
    /// counts as unanswered and is left out of submissions.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Answer::Text(value) | Answer::Number(value) => value.trim().is_empty(),
            other => other.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, Answer>);

impl Answers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.0.get(question_id)
    }

    /// Whether the question has a non-blank answer.
    #[must_use]
    pub fn is_answered(&self, question_id: &str) -> bool {
        self.0.get(question_id).is_some_and(|answer| !answer.is_blank())
    }

    /// Stores an answer, or removes the entry when the answer is empty.
    ///
    /// Text is stored exactly as typed; only the empty string clears it.
    pub fn set(&mut self, question_id: impl Into<String>, answer: Answer) {
        let question_id = question_id.into();
        if answer.is_empty() {
            self.0.remove(&question_id);
        } else {
            self.0.insert(question_id, answer);
        }
    }

    /// Selects `option` for a single-choice question.
    pub fn select(&mut self, question_id: &str, option: &str) {
        self.set(question_id, Answer::Choice(option.to_string()));
    }

    /// Toggles `option` for a multi-choice question.
    pub fn toggle(&mut self, question_id: &str, option: &str) {
        let mut selected = match self.0.get(question_id) {
            Some(Answer::Choices(current)) => current.clone(),
            _ => BTreeSet::new(),
        };
        if !selected.remove(option) {
            selected.insert(option.to_string());
        }
        self.set(question_id, Answer::Choices(selected));
    }

    /// Whether `option` is currently selected for a choice question.
    #[must_use]
    pub fn is_selected(&self, question_id: &str, option: &str) -> bool {
        match self.0.get(question_id) {
            Some(Answer::Choice(current)) => current == option,
            Some(Answer::Choices(current)) => current.contains(option),
            _ => false,
        }
    }

    /// Raw text of a text or number answer, empty when unanswered.
    #[must_use]
    pub fn raw_text(&self, question_id: &str) -> &str {
        match self.0.get(question_id) {
            Some(Answer::Text(value) | Answer::Number(value)) => value,
            _ => "",
        }
    }

    pub fn remove(&mut self, question_id: &str) -> Option<Answer> {
        self.0.remove(question_id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.0.iter().map(|(id, answer)| (id.as_str(), answer))
    }

    /// Answers that are not blank, in question id order.
    pub fn answered(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.iter().filter(|(_, answer)| !answer.is_blank())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
