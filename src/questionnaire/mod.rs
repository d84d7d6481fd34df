// SPDX-License-Identifier: MPL-2.0
//! Questionnaire model: stages, questions, answers and their validation.
//!
//! The definition ships inside the binary (`assets/questionnaire/`) and is
//! checked once at load time. Every user-visible string is a Fluent key
//! derived from the ids in the definition, so the model itself carries no
//! translated text.
//!
//! # Components
//!
//! - [`definition`] - `Questionnaire`, `Stage`, `Question` and load-time checks
//! - [`glossary`] - bilingual financial terms shown as tooltips
//! - [`answers`] - the user's answers keyed by question id
//! - [`validation`] - per-stage completeness and validity reports
//! - [`submission`] - TOML rendering and the `SaveSink` abstraction

pub mod answers;
pub mod definition;
pub mod glossary;
pub mod submission;
pub mod validation;

pub use answers::{Answer, Answers};
pub use definition::{Question, QuestionKind, Questionnaire, Stage, STAGE_COUNT};
pub use glossary::{Glossary, Term};
pub use submission::{FileSink, Response, SaveSink};
pub use validation::{validate_stage, InvalidAnswer, Issue, StageReport};
