use super::super::domain::DiagnosisCategory;
use super::bands::ScoreBand;
use super::policy::ScorePolicy;
use serde::{Deserialize, Serialize};

/// Score normalization and diagnosis thresholds for one catalog revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub policy: ScorePolicy,
    /// Ordered from best to worst outcome.
    pub bands: Vec<ScoreBand>,
}

impl ScoringConfig {
    /// Raw sums scaled by 2.8 onto 0-100, split into quartiles.
    pub fn sleep_health() -> Self {
        Self {
            policy: ScorePolicy::Scaled {
                multiplier: 2.8,
                min: 0,
                max: 100,
            },
            bands: vec![
                ScoreBand::new(DiagnosisCategory::Healthy, 0, 25),
                ScoreBand::new(DiagnosisCategory::Improvement, 26, 50),
                ScoreBand::new(DiagnosisCategory::Struggling, 51, 75),
                ScoreBand::new(DiagnosisCategory::Severe, 76, 100),
            ],
        }
    }

    /// Percentage of the best achievable answers; higher is healthier.
    pub fn sleep_habits() -> Self {
        Self {
            policy: ScorePolicy::PercentOfMax,
            bands: vec![
                ScoreBand::new(DiagnosisCategory::Healthy, 80, 100),
                ScoreBand::new(DiagnosisCategory::Improvement, 50, 79),
                ScoreBand::new(DiagnosisCategory::Struggling, 0, 49),
            ],
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = DiagnosisCategory> + '_ {
        self.bands.iter().map(|band| band.category)
    }
}
