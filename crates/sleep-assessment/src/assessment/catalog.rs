use super::domain::CategoryId;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub category: CategoryId,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Question whose options score `0..=max_value` in presentation order.
    pub fn scored(category: &str, max_value: u8) -> Self {
        Self {
            category: CategoryId::new(category),
            options: (0..=max_value).map(|value| AnswerOption { value }).collect(),
        }
    }

    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }

    pub fn accepts(&self, value: u8) -> bool {
        self.options.iter().any(|option| option.value == value)
    }

    pub fn max_value(&self) -> u8 {
        self.options
            .iter()
            .map(|option| option.value)
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no questions")]
    Empty,
    #[error("category '{0}' appears more than once")]
    DuplicateCategory(CategoryId),
    #[error("question '{0}' has no options")]
    NoOptions(CategoryId),
}

/// Ordered, immutable question list. A question's identity is its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let catalog = Self { questions };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Twelve symptom questions scored 0 (no issue) to 3 (severe issue).
    pub fn sleep_health() -> Self {
        Self {
            questions: [
                "sleepOnsetLatency",
                "sleepMaintenance",
                "earlyAwakening",
                "sleepQuality",
                "abnormalBehavior",
                "daytimeSleepiness",
                "moodState",
                "cognitiveFunction",
                "energyLevel",
                "sleepConsistency",
                "bedtimeHabits",
                "dietExercise",
            ]
            .into_iter()
            .map(|category| Question::scored(category, 3))
            .collect(),
        }
    }

    /// Seven habit questions scored 0 (poor habit) to 2 (healthy habit).
    pub fn sleep_habits() -> Self {
        Self {
            questions: [
                "sleepDuration",
                "sleepOnsetLatency",
                "nightWaking",
                "morningRefreshment",
                "daytimeAlertness",
                "screenHabits",
                "scheduleRegularity",
            ]
            .into_iter()
            .map(|category| Question::scored(category, 2))
            .collect(),
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.category.as_str()) {
                return Err(CatalogError::DuplicateCategory(question.category.clone()));
            }
            if question.options.is_empty() {
                return Err(CatalogError::NoOptions(question.category.clone()));
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn position(&self, category: &str) -> Option<usize> {
        self.questions
            .iter()
            .position(|question| question.category.as_str() == category)
    }

    /// Highest achievable raw sum.
    pub fn max_total(&self) -> u32 {
        self.questions
            .iter()
            .map(|question| u32::from(question.max_value()))
            .sum()
    }
}
