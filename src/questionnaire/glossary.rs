// SPDX-License-Identifier: MPL-2.0
//! Bilingual glossary of financial terms.
//!
//! Questions reference terms by id; the wizard renders each referenced term
//! as a tooltip target. Entries carry both the English and the Chinese name
//! so a tooltip can show the term in the active language with its
//! counterpart in parentheses.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A single glossary entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Term {
    pub id: String,
    pub en: String,
    pub zh: String,
    pub definition_en: String,
    pub definition_zh: String,
}

impl Term {
    /// Term name in the active language.
    #[must_use]
    pub fn name(&self, chinese: bool) -> &str {
        if chinese {
            &self.zh
        } else {
            &self.en
        }
    }

    /// Term name in the other language.
    #[must_use]
    pub fn counterpart(&self, chinese: bool) -> &str {
        self.name(!chinese)
    }

    #[must_use]
    pub fn definition(&self, chinese: bool) -> &str {
        if chinese {
            &self.definition_zh
        } else {
            &self.definition_en
        }
    }

    /// Tooltip heading: the name in the active language with its
    /// counterpart in parentheses.
    #[must_use]
    pub fn heading(&self, chinese: bool) -> String {
        format!("{} ({})", self.name(chinese), self.counterpart(chinese))
    }
}

#[derive(Debug, Deserialize)]
struct RawGlossary {
    #[serde(default, rename = "term")]
    terms: Vec<Term>,
}

/// Glossary terms indexed by id.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    terms: BTreeMap<String, Term>,
}

impl Glossary {
    /// Parses a glossary from its TOML source. Duplicate ids are rejected.
    pub fn from_toml(source: &str) -> Result<Self> {
        let raw: RawGlossary = toml::from_str(source)
            .map_err(|err| Error::Questionnaire(format!("glossary: {err}")))?;

        let mut terms = BTreeMap::new();
        for term in raw.terms {
            if term.id.trim().is_empty() {
                return Err(Error::Questionnaire("glossary term with empty id".into()));
            }
            if let Some(previous) = terms.insert(term.id.clone(), term) {
                return Err(Error::Questionnaire(format!(
                    "duplicate glossary term '{}'",
                    previous.id
                )));
            }
        }
        Ok(Self { terms })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Term> {
        self.terms.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.terms.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[term]]
id = "bond"
en = "Bond"
zh = "债券"
definition_en = "A loan to an issuer that pays interest."
definition_zh = "向发行人提供的付息借款。"

[[term]]
id = "etf"
en = "ETF"
zh = "交易所交易基金"
definition_en = "A fund traded on an exchange."
definition_zh = "在交易所交易的基金。"
"#;

    #[test]
    fn parses_terms_by_id() {
        let glossary = Glossary::from_toml(SAMPLE).expect("glossary should parse");
        assert_eq!(glossary.len(), 2);
        assert_eq!(glossary.get("bond").map(|t| t.zh.as_str()), Some("债券"));
    }

    #[test]
    fn unknown_id_is_none() {
        let glossary = Glossary::from_toml(SAMPLE).expect("glossary should parse");
        assert!(glossary.get("leverage").is_none());
        assert!(!glossary.contains("leverage"));
    }

    #[test]
    fn tooltip_shows_counterpart_in_parentheses() {
        let glossary = Glossary::from_toml(SAMPLE).expect("glossary should parse");
        let bond = glossary.get("bond").expect("bond exists");

        assert_eq!(bond.heading(false), "Bond (债券)");
        assert_eq!(bond.heading(true), "债券 (Bond)");
        assert_eq!(bond.definition(true), "向发行人提供的付息借款。");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let doubled = format!("{SAMPLE}{SAMPLE}");
        let err = Glossary::from_toml(&doubled).expect_err("duplicate must fail");
        assert!(matches!(err, Error::Questionnaire(_)));
    }

    #[test]
    fn empty_source_is_an_empty_glossary() {
        let glossary = Glossary::from_toml("").expect("empty glossary should parse");
        assert!(glossary.is_empty());
    }
}
