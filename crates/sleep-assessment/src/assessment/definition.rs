use super::catalog::{CatalogError, QuestionCatalog};
use super::domain::DiagnosisCategory;
use super::scoring::{BandError, ScoringConfig, ScoringEngine};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in catalog revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Revision {
    SleepHealth,
    SleepHabits,
}

impl Revision {
    pub const fn ordered() -> [Self; 2] {
        [Self::SleepHealth, Self::SleepHabits]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::SleepHealth => "sleep_health",
            Self::SleepHabits => "sleep_habits",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SleepHealth => "Sleep Health Self-Assessment",
            Self::SleepHabits => "Sleep Habits Quick Check",
        }
    }
}

impl Default for Revision {
    fn default() -> Self {
        Self::SleepHealth
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Revision {
    type Err = UnknownRevision;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "sleep_health" | "health" => Ok(Self::SleepHealth),
            "sleep_habits" | "habits" => Ok(Self::SleepHabits),
            other => Err(UnknownRevision(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown assessment revision '{0}' (expected sleep_health or sleep_habits)")]
pub struct UnknownRevision(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("invalid question catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("invalid diagnosis bands: {0}")]
    Bands(#[from] BandError),
}

/// Which catalog, which thresholds, which scaling policy: everything that distinguishes one
/// assessment revision from another.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentDefinition {
    revision: Revision,
    catalog: QuestionCatalog,
    scoring: ScoringEngine,
}

impl AssessmentDefinition {
    pub fn new(
        revision: Revision,
        catalog: QuestionCatalog,
        scoring: ScoringConfig,
    ) -> Result<Self, DefinitionError> {
        catalog.validate()?;
        let scoring = ScoringEngine::new(scoring, catalog.max_total())?;

        Ok(Self {
            revision,
            catalog,
            scoring,
        })
    }

    pub fn builtin(revision: Revision) -> Result<Self, DefinitionError> {
        match revision {
            Revision::SleepHealth => Self::new(
                revision,
                QuestionCatalog::sleep_health(),
                ScoringConfig::sleep_health(),
            ),
            Revision::SleepHabits => Self::new(
                revision,
                QuestionCatalog::sleep_habits(),
                ScoringConfig::sleep_habits(),
            ),
        }
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    /// Diagnoses this definition can produce, best first.
    pub fn diagnosis_categories(&self) -> Vec<DiagnosisCategory> {
        let mut categories: Vec<DiagnosisCategory> = self.scoring.categories().collect();
        categories.sort();
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revisions_parse_from_keys_and_aliases() {
        assert_eq!("sleep-health".parse::<Revision>(), Ok(Revision::SleepHealth));
        assert_eq!("HABITS".parse::<Revision>(), Ok(Revision::SleepHabits));
        assert!("insomnia".parse::<Revision>().is_err());
    }

    #[test]
    fn builtin_definitions_validate() {
        for revision in Revision::ordered() {
            let definition = AssessmentDefinition::builtin(revision).expect("builtin valid");
            assert_eq!(definition.revision(), revision);
        }
    }

    #[test]
    fn habits_revision_produces_three_diagnoses() {
        let definition = AssessmentDefinition::builtin(Revision::SleepHabits).expect("valid");
        assert_eq!(
            definition.diagnosis_categories(),
            vec![
                DiagnosisCategory::Healthy,
                DiagnosisCategory::Improvement,
                DiagnosisCategory::Struggling,
            ]
        );
    }
}
