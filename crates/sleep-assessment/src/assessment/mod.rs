//! Sleep self-assessment: question catalogs, the scoring state machine, diagnosis
//! resolution and the localized views handed to a presentation layer.

pub mod catalog;
pub mod chart;
mod definition;
pub mod domain;
pub mod scoring;
mod service;
mod session;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::{AnswerOption, CatalogError, Question, QuestionCatalog};
pub use chart::ChartDatum;
pub use definition::{AssessmentDefinition, DefinitionError, Revision, UnknownRevision};
pub use domain::{
    AnswerMap, CategoryId, DiagnosisCategory, Language, QuizError, SeverityTier, UnknownLanguage,
};
pub use scoring::{
    BandError, Score, ScoreBand, ScoreOutcome, ScorePolicy, ScoreRange, ScoringConfig,
    ScoringEngine,
};
pub use service::{AssessmentService, AssessmentServiceError};
pub use session::{Progress, QuizPhase, QuizSession, QuizState};
pub use views::{ChartPoint, DiagnosisView, OptionView, ProgressView, QuestionView, ResultView};
