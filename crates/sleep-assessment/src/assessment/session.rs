use super::catalog::Question;
use super::chart::{self, ChartDatum};
use super::definition::AssessmentDefinition;
use super::domain::{AnswerMap, CategoryId, QuizError};
use super::scoring::{Score, ScoreOutcome};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum QuizPhase {
    InProgress { current_index: usize },
    Completed,
}

/// Position, recorded answers and completion flag of one quiz run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuizState {
    current_index: usize,
    answers: AnswerMap,
    completed: bool,
}

impl QuizState {
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn phase(&self) -> QuizPhase {
        if self.completed {
            QuizPhase::Completed
        } else {
            QuizPhase::InProgress {
                current_index: self.current_index,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    /// 1-based number of the question on screen.
    pub position: usize,
    pub total: usize,
    pub percent: f64,
}

/// Linear state machine over the catalog of one [`AssessmentDefinition`].
#[derive(Debug, Clone)]
pub struct QuizSession {
    definition: Arc<AssessmentDefinition>,
    state: QuizState,
}

impl QuizSession {
    pub fn new(definition: Arc<AssessmentDefinition>) -> Self {
        Self {
            definition,
            state: QuizState::default(),
        }
    }

    pub fn definition(&self) -> &AssessmentDefinition {
        &self.definition
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.definition.catalog().question(self.state.current_index)
    }

    pub fn submit_answer(
        &mut self,
        category: &CategoryId,
        value: u8,
    ) -> Result<&QuizState, QuizError> {
        if self.state.completed {
            return Err(QuizError::AlreadyCompleted);
        }

        let catalog = self.definition.catalog();
        let index = self.state.current_index;
        let question = catalog
            .question(index)
            .ok_or(QuizError::AlreadyCompleted)?;

        if &question.category != category {
            return Err(QuizError::CategoryMismatch {
                expected: question.category.clone(),
                found: category.clone(),
            });
        }
        if !question.accepts(value) {
            return Err(QuizError::InvalidOptionValue {
                category: category.clone(),
                value,
            });
        }

        let replaced = self.state.answers.record(category.clone(), value);
        debug!(%category, value, ?replaced, index, "answer recorded");

        if index + 1 >= catalog.len() {
            self.state.completed = true;
            debug!(answered = self.state.answers.len(), "assessment completed");
        } else {
            self.state.current_index = index + 1;
        }

        Ok(&self.state)
    }

    /// Submits the value of the option at `option_index` of the current question.
    pub fn select_option(&mut self, option_index: usize) -> Result<&QuizState, QuizError> {
        if self.state.completed {
            return Err(QuizError::AlreadyCompleted);
        }

        let question = self.current_question().ok_or(QuizError::AlreadyCompleted)?;
        let category = question.category.clone();
        let option = question
            .option(option_index)
            .copied()
            .ok_or_else(|| QuizError::OptionOutOfRange {
                category: category.clone(),
                index: option_index,
                available: question.options.len(),
            })?;

        self.submit_answer(&category, option.value)
    }

    /// Steps back one question. The answer recorded for the question being left is kept
    /// and overwritten when that question is answered again.
    pub fn go_back(&mut self) -> Result<&QuizState, QuizError> {
        if self.state.completed {
            return Err(QuizError::AlreadyCompleted);
        }
        if self.state.current_index == 0 {
            return Err(QuizError::AtFirstQuestion);
        }

        self.state.current_index -= 1;
        debug!(index = self.state.current_index, "stepped back");
        Ok(&self.state)
    }

    pub fn reset(&mut self) -> &QuizState {
        self.state.current_index = 0;
        self.state.answers.clear();
        self.state.completed = false;
        debug!("assessment reset");
        &self.state
    }

    pub fn score(&self) -> Score {
        self.definition.scoring().score(&self.state.answers)
    }

    /// Score and diagnosis, available once every question is answered.
    pub fn outcome(&self) -> Option<ScoreOutcome> {
        self.state
            .completed
            .then(|| self.definition.scoring().resolve(&self.state.answers))
    }

    pub fn progress(&self) -> Progress {
        let total = self.definition.catalog().len();
        let percent = if self.state.completed || total == 0 {
            100.0
        } else {
            self.state.current_index as f64 / total as f64 * 100.0
        };

        Progress {
            position: (self.state.current_index + 1).min(total),
            total,
            percent,
        }
    }

    pub fn chart(&self) -> Vec<ChartDatum> {
        chart::project(self.definition.catalog(), &self.state.answers)
    }
}
