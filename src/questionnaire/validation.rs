// SPDX-License-Identifier: MPL-2.0
//! Answer validation.
//!
//! A stage report separates two outcomes that the wizard treats differently:
//! `missing` (required question without an answer) can be skipped when the
//! user confirms, `invalid` (an answer that breaks the question's rules)
//! always blocks.

use super::answers::{Answer, Answers};
use super::definition::{Question, QuestionKind, Questionnaire, Stage};

/// Why an answer was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    NotANumber,
    OutOfRange { min: Option<f64>, max: Option<f64> },
    TooFewSelections { min: usize },
    /// Choice id not offered by the question, or an answer of the wrong shape.
    UnknownOption,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvalidAnswer {
    pub question_id: String,
    pub issue: Issue,
}

/// Result of checking one stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    /// Required questions without an answer, in definition order.
    pub missing: Vec<String>,
    pub invalid: Vec<InvalidAnswer>,
}

impl StageReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }

    #[must_use]
    pub fn has_invalid(&self) -> bool {
        !self.invalid.is_empty()
    }

    #[must_use]
    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }
}

/// Parses a number answer. Surrounding whitespace and `_`/`,` group
/// separators are accepted; non-finite values are not.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '_' && *c != ',')
        .collect();
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Checks a single answer against its question.
#[must_use]
pub fn validate_answer(question: &Question, answer: &Answer) -> Option<Issue> {
    match (&question.kind, answer) {
        (QuestionKind::SingleChoice { .. }, Answer::Choice(option)) => {
            (!question.has_option(option)).then_some(Issue::UnknownOption)
        }
        (QuestionKind::MultiChoice { min_selected, .. }, Answer::Choices(selected)) => {
            if selected.iter().any(|option| !question.has_option(option)) {
                Some(Issue::UnknownOption)
            } else if selected.len() < *min_selected {
                Some(Issue::TooFewSelections { min: *min_selected })
            } else {
                None
            }
        }
        (QuestionKind::Text { .. }, Answer::Text(_)) => None,
        (QuestionKind::Number { min, max }, Answer::Number(raw)) => match parse_number(raw) {
            None => Some(Issue::NotANumber),
            Some(value)
                if min.is_some_and(|min| value < min) || max.is_some_and(|max| value > max) =>
            {
                Some(Issue::OutOfRange {
                    min: *min,
                    max: *max,
                })
            }
            Some(_) => None,
        },
        _ => Some(Issue::UnknownOption),
    }
}

/// Reports missing and invalid answers for one stage.
#[must_use]
pub fn validate_stage(stage: &Stage, answers: &Answers) -> StageReport {
    let mut report = StageReport::default();
    for question in &stage.questions {
        match answers.get(&question.id).filter(|answer| !answer.is_blank()) {
            None if question.required => report.missing.push(question.id.clone()),
            None => {}
            Some(answer) => {
                if let Some(issue) = validate_answer(question, answer) {
                    report.invalid.push(InvalidAnswer {
                        question_id: question.id.clone(),
                        issue,
                    });
                }
            }
        }
    }
    report
}

/// Index of the first stage with missing or invalid answers.
#[must_use]
pub fn first_incomplete_stage(questionnaire: &Questionnaire, answers: &Answers) -> Option<usize> {
    questionnaire
        .stages()
        .iter()
        .position(|stage| !validate_stage(stage, answers).is_ok())
}

/// Number of required questions without an answer across all stages.
#[must_use]
pub fn missing_required_count(questionnaire: &Questionnaire, answers: &Answers) -> usize {
    questionnaire
        .stages()
        .iter()
        .map(|stage| validate_stage(stage, answers).missing.len())
        .sum()
}
