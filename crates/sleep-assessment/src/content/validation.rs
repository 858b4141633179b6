use super::{ContentError, LocalizationTable};
use crate::assessment::{AssessmentDefinition, CategoryId, DiagnosisCategory, Language};
use serde::Serialize;

/// A single content authoring defect found by [`LocalizationTable::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ContentIssue {
    #[error("{revision}: content is for {found}")]
    WrongRevision { revision: String, found: String },
    #[error("{language}: language pack missing")]
    MissingLanguage { language: Language },
    #[error("{language}: question text missing for '{category}'")]
    MissingQuestion {
        language: Language,
        category: CategoryId,
    },
    #[error("{language}: '{category}' has {found} option texts, catalog defines {expected}")]
    OptionCount {
        language: Language,
        category: CategoryId,
        expected: usize,
        found: usize,
    },
    #[error("{language}: display name missing for '{category}'")]
    MissingCategoryName {
        language: Language,
        category: CategoryId,
    },
    #[error("{language}: '{category}' is not part of the catalog")]
    UnknownCategory {
        language: Language,
        category: CategoryId,
    },
    #[error("{language}: diagnosis copy missing for {category}")]
    MissingDiagnosis {
        language: Language,
        category: DiagnosisCategory,
    },
    #[error("{language}: {category} has no tips")]
    EmptyTips {
        language: Language,
        category: DiagnosisCategory,
    },
    #[error("{language}: {category} has no products")]
    EmptyProducts {
        language: Language,
        category: DiagnosisCategory,
    },
    #[error("{language}: blank text at '{key}'")]
    BlankText { language: Language, key: String },
}

impl LocalizationTable {
    /// Checks that every lookup the presentation layer can make for `definition` resolves,
    /// for every supported language. Returns every issue found, in a stable order.
    pub fn validate(&self, definition: &AssessmentDefinition) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        if self.revision() != definition.revision() {
            issues.push(ContentIssue::WrongRevision {
                revision: definition.revision().key().to_string(),
                found: self.revision().key().to_string(),
            });
            return issues;
        }

        let catalog = definition.catalog();
        let diagnoses = definition.diagnosis_categories();

        for language in Language::ordered() {
            let Ok(pack) = self.pack(language) else {
                issues.push(ContentIssue::MissingLanguage { language });
                continue;
            };

            let mut blank = |key: String, text: &str| {
                if text.trim().is_empty() {
                    issues.push(ContentIssue::BlankText { language, key });
                }
            };
            blank("quiz_title".to_string(), &pack.quiz_title);
            for question in catalog.questions() {
                if let Some(copy) = pack.questions.get(&question.category) {
                    blank(format!("questions.{}", question.category), &copy.text);
                    for (index, option) in copy.options.iter().enumerate() {
                        blank(
                            format!("questions.{}.options[{index}]", question.category),
                            option,
                        );
                    }
                }
            }

            for question in catalog.questions() {
                let category = &question.category;
                match pack.questions.get(category) {
                    None => issues.push(ContentIssue::MissingQuestion {
                        language,
                        category: category.clone(),
                    }),
                    Some(copy) if copy.options.len() != question.options.len() => {
                        issues.push(ContentIssue::OptionCount {
                            language,
                            category: category.clone(),
                            expected: question.options.len(),
                            found: copy.options.len(),
                        })
                    }
                    Some(_) => {}
                }

                if !pack.categories.contains_key(category) {
                    issues.push(ContentIssue::MissingCategoryName {
                        language,
                        category: category.clone(),
                    });
                }
            }

            for category in pack.questions.keys().chain(pack.categories.keys()) {
                let unknown = ContentIssue::UnknownCategory {
                    language,
                    category: category.clone(),
                };
                if catalog.position(category.as_str()).is_none() && !issues.contains(&unknown) {
                    issues.push(unknown);
                }
            }

            for &category in &diagnoses {
                match pack.diagnoses.get(&category) {
                    None => issues.push(ContentIssue::MissingDiagnosis { language, category }),
                    Some(copy) => {
                        if copy.tips.is_empty() {
                            issues.push(ContentIssue::EmptyTips { language, category });
                        }
                        if copy.products.is_empty() {
                            issues.push(ContentIssue::EmptyProducts { language, category });
                        }
                    }
                }
            }
        }

        issues
    }

    /// [`LocalizationTable::validate`] as a `Result`, for startup checks.
    pub fn ensure_valid(&self, definition: &AssessmentDefinition) -> Result<(), ContentError> {
        let issues = self.validate(definition);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ContentError::Invalid {
                revision: definition.revision(),
                issues,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Revision;

    #[test]
    fn builtin_content_is_complete_for_every_revision() {
        for revision in Revision::ordered() {
            let definition = AssessmentDefinition::builtin(revision).expect("definition");
            let table = LocalizationTable::builtin(revision).expect("content");
            assert_eq!(table.validate(&definition), Vec::new(), "{revision}");
        }
    }

    #[test]
    fn detects_missing_and_mismatched_entries() {
        let definition = AssessmentDefinition::builtin(Revision::SleepHabits).expect("definition");
        let mut table = LocalizationTable::builtin(Revision::SleepHabits)
            .expect("content")
            .clone();

        let zh = table
            .bundle
            .languages
            .get_mut(&Language::Zh)
            .expect("zh pack");
        zh.questions.remove("nightWaking");
        zh.categories.insert(CategoryId::new("snoring"), "打鼾".to_string());
        if let Some(copy) = zh.questions.get_mut("screenHabits") {
            copy.options.pop();
        }
        table.bundle.languages.remove(&Language::Ms);

        let issues = table.validate(&definition);

        assert!(issues.contains(&ContentIssue::MissingQuestion {
            language: Language::Zh,
            category: CategoryId::new("nightWaking"),
        }));
        assert!(issues.contains(&ContentIssue::OptionCount {
            language: Language::Zh,
            category: CategoryId::new("screenHabits"),
            expected: 3,
            found: 2,
        }));
        assert!(issues.contains(&ContentIssue::UnknownCategory {
            language: Language::Zh,
            category: CategoryId::new("snoring"),
        }));
        assert!(issues.contains(&ContentIssue::MissingLanguage {
            language: Language::Ms
        }));
        assert!(matches!(
            table.ensure_valid(&definition),
            Err(ContentError::Invalid { issues, .. }) if issues.len() == 4
        ));
    }

    #[test]
    fn content_for_another_revision_is_rejected() {
        let definition = AssessmentDefinition::builtin(Revision::SleepHealth).expect("definition");
        let table = LocalizationTable::builtin(Revision::SleepHabits).expect("content");
        assert!(matches!(
            table.validate(&definition).as_slice(),
            [ContentIssue::WrongRevision { .. }]
        ));
    }
}
