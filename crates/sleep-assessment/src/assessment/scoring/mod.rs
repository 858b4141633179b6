mod bands;
mod config;
mod policy;

pub use bands::{BandError, ScoreBand};
pub use config::ScoringConfig;
pub use policy::{ScorePolicy, ScoreRange};

use super::domain::{AnswerMap, DiagnosisCategory};
use serde::Serialize;

/// Computed score for the current answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    /// Plain sum of the recorded option values.
    pub raw: u32,
    /// Highest achievable raw sum for the catalog.
    pub raw_max: u32,
    /// Policy-normalized score; the value shown to the user and classified.
    pub value: u32,
    pub range: ScoreRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreOutcome {
    pub score: Score,
    pub category: DiagnosisCategory,
}

/// Applies a validated [`ScoringConfig`] to answer sets.
///
/// Construction guarantees the bands partition the policy's score range, so every
/// normalized score maps to exactly one diagnosis.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringEngine {
    config: ScoringConfig,
    raw_max: u32,
    range: ScoreRange,
    sorted: Vec<ScoreBand>,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig, raw_max: u32) -> Result<Self, BandError> {
        let range = config.policy.range(raw_max);
        bands::validate_partition(&config.bands, range)?;
        let sorted = bands::sorted_by_min(&config.bands);

        Ok(Self {
            config,
            raw_max,
            range,
            sorted,
        })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn range(&self) -> ScoreRange {
        self.range
    }

    pub fn score(&self, answers: &AnswerMap) -> Score {
        let raw = answers.total();
        Score {
            raw,
            raw_max: self.raw_max,
            value: self.config.policy.normalize(raw, self.raw_max),
            range: self.range,
        }
    }

    /// Maps a normalized score onto its band. Out-of-range scores are clamped first.
    pub fn classify(&self, score: u32) -> DiagnosisCategory {
        let score = self.range.clamp(score);
        let index = self.sorted.partition_point(|band| band.max < score);
        self.sorted[index.min(self.sorted.len() - 1)].category
    }

    /// Does not mutate `answers`.
    pub fn resolve(&self, answers: &AnswerMap) -> ScoreOutcome {
        let score = self.score(answers);
        ScoreOutcome {
            score,
            category: self.classify(score.value),
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = DiagnosisCategory> + '_ {
        self.config.categories()
    }
}
