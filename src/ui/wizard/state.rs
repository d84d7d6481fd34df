// SPDX-License-Identifier: MPL-2.0
//! Wizard navigation state.
//!
//! Pure state machine over the questionnaire: it never touches the disk or
//! the notification queue. Every transition reports an [`Event`] and the
//! application decides which side effects follow.

use crate::app::draft::Draft;
use crate::questionnaire::validation::{first_incomplete_stage, missing_required_count};
use crate::questionnaire::{validate_stage, Answer, Answers, InvalidAnswer, Questionnaire, Stage};
use std::collections::BTreeSet;

/// Messages emitted by the wizard view and by notification actions.
#[derive(Debug, Clone)]
pub enum Message {
    Select { question: String, option: String },
    Toggle { question: String, option: String },
    TextChanged { question: String, value: String },
    NumberChanged { question: String, value: String },
    Next,
    /// Advance past unanswered required questions after the user confirmed.
    ForceNext,
    Previous,
    JumpTo(usize),
    Submit,
    Export,
    Restart,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    AnswersChanged,
    StageChanged,
    /// Advancing was refused because some answers break their rules.
    InvalidAnswers(Vec<InvalidAnswer>),
    /// Advancing was held back because required questions are unanswered.
    MissingRequired(Vec<String>),
    /// Submission was refused; `stage` is the first stage needing work.
    SubmitIncomplete { stage: usize },
    Submit(Answers),
    Export(Answers),
    Restarted,
}

#[derive(Debug, Clone)]
pub struct State {
    questionnaire: Questionnaire,
    current: usize,
    visited: BTreeSet<usize>,
    answers: Answers,
    /// Stage for which a "continue anyway" confirmation is outstanding.
    pending_skip: Option<usize>,
}

impl State {
    #[must_use]
    pub fn new(questionnaire: Questionnaire) -> Self {
        Self {
            questionnaire,
            current: 0,
            visited: BTreeSet::from([0]),
            answers: Answers::new(),
            pending_skip: None,
        }
    }

    /// Rebuilds the state from a saved draft, clamping stale indices.
    #[must_use]
    pub fn restore(questionnaire: Questionnaire, draft: Draft) -> Self {
        let last = questionnaire.stage_count().saturating_sub(1);
        let current = draft.stage.min(last);
        let mut visited: BTreeSet<usize> =
            draft.visited.into_iter().filter(|index| *index <= last).collect();
        visited.insert(0);
        visited.insert(current);

        Self {
            questionnaire,
            current,
            visited,
            answers: draft.answers,
            pending_skip: None,
        }
    }

    /// Snapshot for draft persistence.
    #[must_use]
    pub fn to_draft(&self) -> Draft {
        Draft {
            stage: self.current,
            visited: self.visited.iter().copied().collect(),
            answers: self.answers.clone(),
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Select { question, option } => {
                self.answers.select(&question, &option);
                Event::AnswersChanged
            }
            Message::Toggle { question, option } => {
                self.answers.toggle(&question, &option);
                Event::AnswersChanged
            }
            Message::TextChanged { question, value } => {
                self.answers.set(question, Answer::Text(value));
                Event::AnswersChanged
            }
            Message::NumberChanged { question, value } => {
                self.answers.set(question, Answer::Number(value));
                Event::AnswersChanged
            }
            Message::Next => self.next(),
            Message::ForceNext => self.force_next(),
            Message::Previous => self.previous(),
            Message::JumpTo(index) => self.jump_to(index),
            Message::Submit => self.submit(),
            Message::Export => Event::Export(self.answers.clone()),
            Message::Restart => self.restart(),
        }
    }

    /// Validates the current stage and moves on when it is complete.
    pub fn next(&mut self) -> Event {
        if self.is_last_stage() {
            return Event::None;
        }
        let report = validate_stage(self.current_stage(), &self.answers);
        if report.has_invalid() {
            self.pending_skip = None;
            Event::InvalidAnswers(report.invalid)
        } else if report.has_missing() {
            self.pending_skip = Some(self.current);
            Event::MissingRequired(report.missing)
        } else {
            self.go_to(self.current + 1)
        }
    }

    /// Moves on despite missing required answers. Only honoured while the
    /// confirmation for the current stage is outstanding, and never past
    /// invalid answers.
    pub fn force_next(&mut self) -> Event {
        if self.pending_skip != Some(self.current) || self.is_last_stage() {
            return Event::None;
        }
        let report = validate_stage(self.current_stage(), &self.answers);
        if report.has_invalid() {
            self.pending_skip = None;
            return Event::InvalidAnswers(report.invalid);
        }
        tracing::info!(
            stage = %self.current_stage().id,
            skipped = report.missing.len(),
            "continuing with unanswered required questions"
        );
        self.go_to(self.current + 1)
    }

    pub fn previous(&mut self) -> Event {
        if self.current == 0 {
            return Event::None;
        }
        self.go_to(self.current - 1)
    }

    /// Jumps to a stage the user has already reached.
    pub fn jump_to(&mut self, index: usize) -> Event {
        if !self.visited.contains(&index) || index == self.current {
            return Event::None;
        }
        self.go_to(index)
    }

    pub fn submit(&mut self) -> Event {
        if !self.is_last_stage() {
            return Event::None;
        }
        match first_incomplete_stage(&self.questionnaire, &self.answers) {
            Some(stage) => Event::SubmitIncomplete { stage },
            None => Event::Submit(self.answers.clone()),
        }
    }

    pub fn restart(&mut self) -> Event {
        self.answers.clear();
        self.current = 0;
        self.visited = BTreeSet::from([0]);
        self.pending_skip = None;
        tracing::info!("questionnaire restarted");
        Event::Restarted
    }

    fn go_to(&mut self, index: usize) -> Event {
        self.current = index;
        self.visited.insert(index);
        self.pending_skip = None;
        tracing::info!(stage = %self.current_stage().id, index, "stage changed");
        Event::StageChanged
    }

    #[must_use]
    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    #[must_use]
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The stage being shown. A loaded questionnaire always has stages and
    /// `current` is kept in range, so the index is valid.
    #[must_use]
    pub fn current_stage(&self) -> &Stage {
        &self.questionnaire.stages()[self.current]
    }

    #[must_use]
    pub fn is_first_stage(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last_stage(&self) -> bool {
        self.current + 1 >= self.questionnaire.stage_count()
    }

    #[must_use]
    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.contains(&index)
    }

    /// `(current, total)` with a 1-based current stage.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.questionnaire.stage_count())
    }

    /// Fraction of stages reached, for the progress bar.
    #[must_use]
    pub fn progress_fraction(&self) -> f32 {
        let (current, total) = self.progress();
        if total == 0 {
            0.0
        } else {
            current as f32 / total as f32
        }
    }

    #[must_use]
    pub fn missing_required(&self) -> usize {
        missing_required_count(&self.questionnaire, &self.answers)
    }

    #[must_use]
    pub fn has_pending_skip(&self) -> bool {
        self.pending_skip.is_some()
    }
}
