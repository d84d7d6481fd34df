// SPDX-License-Identifier: MPL-2.0
//! Stage and question definitions.
//!
//! The TOML definition is deserialized into loosely typed `Raw*` structs and
//! then converted into the typed model, so a question can only carry the
//! fields its kind needs. All structural checks happen here; the wizard
//! assumes a loaded [`Questionnaire`] is well formed.

use super::glossary::Glossary;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(RustEmbed)]
#[folder = "assets/questionnaire/"]
struct Asset;

const STAGES_FILE: &str = "stages.toml";
const GLOSSARY_FILE: &str = "glossary.toml";

/// Number of stages the wizard walks through.
pub const STAGE_COUNT: usize = 7;

/// Answer shape of a question.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    SingleChoice {
        options: Vec<String>,
    },
    MultiChoice {
        options: Vec<String>,
        min_selected: usize,
    },
    Text {
        multiline: bool,
    },
    /// Bounds are inclusive; `None` leaves that side open.
    Number {
        min: Option<f64>,
        max: Option<f64>,
    },
}

impl QuestionKind {
    /// Option ids for choice questions, empty otherwise.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match self {
            QuestionKind::SingleChoice { options } | QuestionKind::MultiChoice { options, .. } => {
                options
            }
            QuestionKind::Text { .. } | QuestionKind::Number { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: String,
    pub kind: QuestionKind,
    pub required: bool,
    /// Glossary term ids shown next to the prompt.
    pub terms: Vec<String>,
}

impl Question {
    #[must_use]
    pub fn prompt_key(&self) -> String {
        format!("question-{}", self.id)
    }

    #[must_use]
    pub fn help_key(&self) -> String {
        format!("question-{}-help", self.id)
    }

    #[must_use]
    pub fn option_key(&self, option: &str) -> String {
        format!("option-{}-{}", self.id, option)
    }

    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.kind.options().iter().any(|o| o == option)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub id: String,
    pub questions: Vec<Question>,
}

impl Stage {
    #[must_use]
    pub fn title_key(&self) -> String {
        format!("stage-{}-title", self.id)
    }

    #[must_use]
    pub fn description_key(&self) -> String {
        format!("stage-{}-description", self.id)
    }

    #[must_use]
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// The validated questionnaire together with its glossary.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    stages: Vec<Stage>,
    glossary: Glossary,
}

impl Questionnaire {
    /// Loads the definition embedded in the binary.
    pub fn load() -> Result<Self> {
        let stages = embedded_text(STAGES_FILE)?;
        let glossary = embedded_text(GLOSSARY_FILE)?;
        Self::from_sources(&stages, &glossary)
    }

    /// Builds a questionnaire from TOML sources and validates it.
    pub fn from_sources(stages_toml: &str, glossary_toml: &str) -> Result<Self> {
        let glossary = Glossary::from_toml(glossary_toml)?;
        let raw: RawDefinition = toml::from_str(stages_toml)
            .map_err(|err| Error::Questionnaire(format!("stages: {err}")))?;

        let stages = raw
            .stages
            .into_iter()
            .map(Stage::try_from)
            .collect::<Result<Vec<_>>>()?;

        let questionnaire = Self { stages, glossary };
        questionnaire.check()?;
        tracing::debug!(
            stages = questionnaire.stages.len(),
            terms = questionnaire.glossary.len(),
            "questionnaire loaded"
        );
        Ok(questionnaire)
    }

    fn check(&self) -> Result<()> {
        if self.stages.len() != STAGE_COUNT {
            return Err(Error::Questionnaire(format!(
                "expected {STAGE_COUNT} stages, found {}",
                self.stages.len()
            )));
        }

        let mut stage_ids = HashSet::new();
        let mut question_ids = HashSet::new();
        for stage in &self.stages {
            if !stage_ids.insert(stage.id.as_str()) {
                return Err(Error::Questionnaire(format!(
                    "duplicate stage id '{}'",
                    stage.id
                )));
            }
            for question in &stage.questions {
                if !question_ids.insert(question.id.as_str()) {
                    return Err(Error::Questionnaire(format!(
                        "duplicate question id '{}'",
                        question.id
                    )));
                }
                if let Some(term) = question.terms.iter().find(|t| !self.glossary.contains(t)) {
                    return Err(Error::Questionnaire(format!(
                        "question '{}' references unknown term '{term}'",
                        question.id
                    )));
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    #[must_use]
    pub fn stage(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Finds a question anywhere in the questionnaire, with its stage index.
    #[must_use]
    pub fn question(&self, id: &str) -> Option<(usize, &Question)> {
        self.stages
            .iter()
            .enumerate()
            .find_map(|(index, stage)| stage.question(id).map(|q| (index, q)))
    }

    #[must_use]
    pub fn glossary(&self) -> &Glossary {
        &self.glossary
    }
}

fn embedded_text(name: &str) -> Result<String> {
    let file = Asset::get(name)
        .ok_or_else(|| Error::Questionnaire(format!("missing embedded file '{name}'")))?;
    String::from_utf8(file.data.into_owned())
        .map_err(|err| Error::Questionnaire(format!("{name}: {err}")))
}

#[derive(Debug, Deserialize)]
struct RawDefinition {
    #[serde(default, rename = "stage")]
    stages: Vec<RawStage>,
}

#[derive(Debug, Deserialize)]
struct RawStage {
    id: String,
    #[serde(default, rename = "question")]
    questions: Vec<RawQuestion>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum RawKind {
    SingleChoice,
    MultiChoice,
    Text,
    Number,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    id: String,
    kind: RawKind,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    options: Vec<String>,
    min_selected: Option<usize>,
    #[serde(default)]
    multiline: bool,
    min: Option<f64>,
    max: Option<f64>,
    #[serde(default)]
    terms: Vec<String>,
}

impl TryFrom<RawStage> for Stage {
    type Error = Error;

    fn try_from(raw: RawStage) -> Result<Self> {
        if raw.id.trim().is_empty() {
            return Err(Error::Questionnaire("stage with empty id".into()));
        }
        let questions = raw
            .questions
            .into_iter()
            .map(Question::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Stage {
            id: raw.id,
            questions,
        })
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = Error;

    fn try_from(raw: RawQuestion) -> Result<Self> {
        let invalid = |reason: &str| Error::Questionnaire(format!("question '{}': {reason}", raw.id));

        if raw.id.trim().is_empty() {
            return Err(Error::Questionnaire("question with empty id".into()));
        }

        let kind = match raw.kind {
            RawKind::SingleChoice | RawKind::MultiChoice => {
                if raw.options.is_empty() {
                    return Err(invalid("choice question without options"));
                }
                let mut seen = HashSet::new();
                if let Some(dup) = raw.options.iter().find(|o| !seen.insert(o.as_str())) {
                    return Err(invalid(&format!("duplicate option '{dup}'")));
                }
                if matches!(raw.kind, RawKind::SingleChoice) {
                    QuestionKind::SingleChoice {
                        options: raw.options.clone(),
                    }
                } else {
                    let min_selected = raw.min_selected.unwrap_or(usize::from(raw.required));
                    if min_selected > raw.options.len() {
                        return Err(invalid("min_selected exceeds the number of options"));
                    }
                    QuestionKind::MultiChoice {
                        options: raw.options.clone(),
                        min_selected,
                    }
                }
            }
            RawKind::Text => QuestionKind::Text {
                multiline: raw.multiline,
            },
            RawKind::Number => {
                if let (Some(min), Some(max)) = (raw.min, raw.max) {
                    if min > max {
                        return Err(invalid("min is greater than max"));
                    }
                }
                QuestionKind::Number {
                    min: raw.min,
                    max: raw.max,
                }
            }
        };

        Ok(Question {
            id: raw.id,
            kind,
            required: raw.required,
            terms: raw.terms,
        })
    }
}
