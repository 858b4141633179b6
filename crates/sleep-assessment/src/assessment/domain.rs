use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Topic tag identifying one question slot, e.g. `sleepOnsetLatency`.
///
/// Joins the catalog, the answer map, the localization table and the chart projection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Borrow<str> for CategoryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Selected option value per category. Grows by one entry per answered question and is
/// only emptied by a full reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<CategoryId, u8>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` for `category`, returning the value it replaced.
    pub fn record(&mut self, category: CategoryId, value: u8) -> Option<u8> {
        self.0.insert(category, value)
    }

    pub fn get(&self, category: &str) -> Option<u8> {
        self.0.get(category).copied()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains_key(category)
    }

    pub fn total(&self) -> u32 {
        self.0.values().map(|value| u32::from(*value)).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
    Ms,
}

impl Language {
    pub const fn ordered() -> [Self; 3] {
        [Self::En, Self::Zh, Self::Ms]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
            Self::Ms => "ms",
        }
    }

    /// Name of the language in the language itself, as shown in a language picker.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
            Self::Ms => "Bahasa Melayu",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "zh" | "chinese" => Ok(Self::Zh),
            "ms" | "malay" => Ok(Self::Ms),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language tag '{0}' (expected one of: en, zh, ms)")]
pub struct UnknownLanguage(pub String);

/// Final outcome of a completed assessment, ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisCategory {
    Healthy,
    Improvement,
    Struggling,
    Severe,
}

impl DiagnosisCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Healthy,
            Self::Improvement,
            Self::Struggling,
            Self::Severe,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Improvement => "improvement",
            Self::Struggling => "struggling",
            Self::Severe => "severe",
        }
    }

    pub const fn severity(self) -> SeverityTier {
        match self {
            Self::Healthy => SeverityTier::Positive,
            Self::Improvement => SeverityTier::Caution,
            Self::Struggling => SeverityTier::Warning,
            Self::Severe => SeverityTier::Critical,
        }
    }
}

impl fmt::Display for DiagnosisCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Visual marker bound to a diagnosis card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Positive,
    Caution,
    Warning,
    Critical,
}

impl SeverityTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Caution => "Caution",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Positive => "green",
            Self::Caution => "yellow",
            Self::Warning => "orange",
            Self::Critical => "red",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Positive => "check-circle",
            Self::Caution => "exclamation-triangle",
            Self::Warning => "exclamation-circle",
            Self::Critical => "x-circle",
        }
    }
}

/// Rejected state-machine transitions. State is left untouched whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("the assessment is already completed; reset to start again")]
    AlreadyCompleted,
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("answer for '{found}' does not match the current question '{expected}'")]
    CategoryMismatch {
        expected: CategoryId,
        found: CategoryId,
    },
    #[error("value {value} is not an option of '{category}'")]
    InvalidOptionValue { category: CategoryId, value: u8 },
    #[error("option {index} does not exist for '{category}' ({available} options)")]
    OptionOutOfRange {
        category: CategoryId,
        index: usize,
        available: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_parses_codes_and_names() {
        assert_eq!("ZH".parse::<Language>(), Ok(Language::Zh));
        assert_eq!(" malay ".parse::<Language>(), Ok(Language::Ms));
        assert_eq!(
            "fr".parse::<Language>(),
            Err(UnknownLanguage("fr".to_string()))
        );
    }

    #[test]
    fn answer_map_overwrites_and_totals() {
        let mut answers = AnswerMap::new();
        assert_eq!(answers.record("moodState".into(), 2), None);
        assert_eq!(answers.record("moodState".into(), 1), Some(2));
        answers.record("energyLevel".into(), 3);

        assert_eq!(answers.len(), 2);
        assert_eq!(answers.total(), 4);
        assert_eq!(answers.get("moodState"), Some(1));
        assert!(!answers.contains("dietExercise"));
    }

    #[test]
    fn severity_tiers_follow_diagnosis_order() {
        let tiers: Vec<SeverityTier> = DiagnosisCategory::ordered()
            .into_iter()
            .map(DiagnosisCategory::severity)
            .collect();
        assert!(tiers.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(DiagnosisCategory::Severe.severity().color(), "red");
    }
}
