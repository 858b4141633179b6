//! Localized copy for every built-in revision.
//!
//! Content ships as JSON embedded in the binary and is parsed once per process. All lookups
//! are keyed by [`CategoryId`], [`DiagnosisCategory`] and [`Language`]; a failed lookup is a
//! content authoring defect and is caught by [`LocalizationTable::validate`].

mod validation;

pub use validation::ContentIssue;

use crate::assessment::{CategoryId, DiagnosisCategory, Language, Revision};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::{debug, error};

const SLEEP_HEALTH_JSON: &str = include_str!("../../content/sleep_health.json");
const SLEEP_HABITS_JSON: &str = include_str!("../../content/sleep_habits.json");

static SLEEP_HEALTH: OnceLock<Result<LocalizationTable, ContentError>> = OnceLock::new();
static SLEEP_HABITS: OnceLock<Result<LocalizationTable, ContentError>> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("unable to parse {revision} content: {message}")]
    Parse { revision: String, message: String },
    #[error("content file declares revision {found}, expected {expected}")]
    RevisionMismatch { expected: Revision, found: Revision },
    #[error("no {language} content for {revision}")]
    UnsupportedLanguage {
        revision: Revision,
        language: Language,
    },
    #[error("missing {language} content entry '{key}'")]
    Missing { language: Language, key: String },
    #[error("{revision} content failed validation with {} issue(s)", issues.len())]
    Invalid {
        revision: Revision,
        issues: Vec<ContentIssue>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCopy {
    pub text: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisCopy {
    pub title: String,
    pub message: String,
    pub tips: Vec<String>,
    pub products: Vec<Product>,
}

/// Fixed interface strings: buttons, captions and section headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceCopy {
    pub disclaimer: String,
    pub back: String,
    pub retake: String,
    pub learn_more: String,
    pub chart_caption: String,
    pub score_summary: String,
    pub progress: String,
    pub of: String,
    pub report_title: String,
    pub tips_title: String,
    pub products_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePack {
    pub quiz_title: String,
    pub questions: BTreeMap<CategoryId, QuestionCopy>,
    pub categories: BTreeMap<CategoryId, String>,
    pub diagnoses: BTreeMap<DiagnosisCategory, DiagnosisCopy>,
    pub interface: InterfaceCopy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ContentBundle {
    revision: Revision,
    languages: BTreeMap<Language, LanguagePack>,
}

/// Read-only lookup of all copy for one revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationTable {
    bundle: ContentBundle,
}

impl LocalizationTable {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let bundle: ContentBundle =
            serde_json::from_str(raw).map_err(|err| ContentError::Parse {
                revision: "embedded".to_string(),
                message: err.to_string(),
            })?;
        Ok(Self { bundle })
    }

    /// Process-wide table for a built-in revision, parsed on first use.
    pub fn builtin(revision: Revision) -> Result<&'static LocalizationTable, ContentError> {
        let (cell, raw) = match revision {
            Revision::SleepHealth => (&SLEEP_HEALTH, SLEEP_HEALTH_JSON),
            Revision::SleepHabits => (&SLEEP_HABITS, SLEEP_HABITS_JSON),
        };

        cell.get_or_init(|| {
            let table = Self::from_json(raw)
                .map_err(|err| match err {
                    ContentError::Parse { message, .. } => ContentError::Parse {
                        revision: revision.key().to_string(),
                        message,
                    },
                    other => other,
                })
                .and_then(|table| {
                    if table.revision() == revision {
                        Ok(table)
                    } else {
                        Err(ContentError::RevisionMismatch {
                            expected: revision,
                            found: table.revision(),
                        })
                    }
                });

            match &table {
                Ok(table) => debug!(
                    revision = %revision,
                    languages = table.bundle.languages.len(),
                    "loaded localization table"
                ),
                Err(err) => error!(revision = %revision, error = %err, "failed to load content"),
            }
            table
        })
        .as_ref()
        .map_err(Clone::clone)
    }

    pub fn revision(&self) -> Revision {
        self.bundle.revision
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.bundle.languages.keys().copied()
    }

    pub fn supports(&self, language: Language) -> bool {
        self.bundle.languages.contains_key(&language)
    }

    pub fn pack(&self, language: Language) -> Result<&LanguagePack, ContentError> {
        self.bundle
            .languages
            .get(&language)
            .ok_or(ContentError::UnsupportedLanguage {
                revision: self.bundle.revision,
                language,
            })
    }

    pub fn quiz_title(&self, language: Language) -> Result<&str, ContentError> {
        Ok(&self.pack(language)?.quiz_title)
    }

    pub fn question_text(
        &self,
        category: &CategoryId,
        language: Language,
    ) -> Result<&str, ContentError> {
        Ok(&self.question(category, language)?.text)
    }

    pub fn option_text(
        &self,
        category: &CategoryId,
        option_index: usize,
        language: Language,
    ) -> Result<&str, ContentError> {
        self.question(category, language)?
            .options
            .get(option_index)
            .map(String::as_str)
            .ok_or_else(|| ContentError::Missing {
                language,
                key: format!("questions.{category}.options[{option_index}]"),
            })
    }

    pub fn category_name(
        &self,
        category: &CategoryId,
        language: Language,
    ) -> Result<&str, ContentError> {
        self.pack(language)?
            .categories
            .get(category)
            .map(String::as_str)
            .ok_or_else(|| ContentError::Missing {
                language,
                key: format!("categories.{category}"),
            })
    }

    pub fn diagnosis_copy(
        &self,
        category: DiagnosisCategory,
        language: Language,
    ) -> Result<&DiagnosisCopy, ContentError> {
        self.pack(language)?
            .diagnoses
            .get(&category)
            .ok_or_else(|| ContentError::Missing {
                language,
                key: format!("diagnoses.{category}"),
            })
    }

    pub fn tips(
        &self,
        category: DiagnosisCategory,
        language: Language,
    ) -> Result<&[String], ContentError> {
        Ok(&self.diagnosis_copy(category, language)?.tips)
    }

    pub fn products(
        &self,
        category: DiagnosisCategory,
        language: Language,
    ) -> Result<&[Product], ContentError> {
        Ok(&self.diagnosis_copy(category, language)?.products)
    }

    pub fn interface(&self, language: Language) -> Result<&InterfaceCopy, ContentError> {
        Ok(&self.pack(language)?.interface)
    }

    fn question(
        &self,
        category: &CategoryId,
        language: Language,
    ) -> Result<&QuestionCopy, ContentError> {
        self.pack(language)?
            .questions
            .get(category)
            .ok_or_else(|| ContentError::Missing {
                language,
                key: format!("questions.{category}"),
            })
    }
}
