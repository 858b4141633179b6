use super::super::domain::DiagnosisCategory;
use super::policy::ScoreRange;
use serde::{Deserialize, Serialize};

/// Contiguous inclusive score sub-range mapped to one diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBand {
    pub category: DiagnosisCategory,
    pub min: u32,
    pub max: u32,
}

impl ScoreBand {
    pub const fn new(category: DiagnosisCategory, min: u32, max: u32) -> Self {
        Self { category, min, max }
    }

    pub fn contains(&self, score: u32) -> bool {
        (self.min..=self.max).contains(&score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BandError {
    #[error("no diagnosis bands configured")]
    Empty,
    #[error("band for {category} is inverted ({min} > {max})")]
    Inverted {
        category: DiagnosisCategory,
        min: u32,
        max: u32,
    },
    #[error("{0} is bound to more than one band")]
    DuplicateCategory(DiagnosisCategory),
    #[error("scores {from}..={to} are not covered by any band")]
    Gap { from: u32, to: u32 },
    #[error("scores {from}..={to} are covered by more than one band")]
    Overlap { from: u32, to: u32 },
}

/// Validates that `bands` partition `range` exactly: every score in the range falls in one
/// band and no band reaches outside it.
pub(crate) fn validate_partition(bands: &[ScoreBand], range: ScoreRange) -> Result<(), BandError> {
    if bands.is_empty() {
        return Err(BandError::Empty);
    }

    for (index, band) in bands.iter().enumerate() {
        if band.min > band.max {
            return Err(BandError::Inverted {
                category: band.category,
                min: band.min,
                max: band.max,
            });
        }
        if bands[..index]
            .iter()
            .any(|earlier| earlier.category == band.category)
        {
            return Err(BandError::DuplicateCategory(band.category));
        }
    }

    let sorted = sorted_by_min(bands);

    let first = sorted[0];
    if first.min > range.min {
        return Err(BandError::Gap {
            from: range.min,
            to: first.min - 1,
        });
    }
    if first.min < range.min {
        return Err(BandError::Overlap {
            from: first.min,
            to: range.min - 1,
        });
    }

    for pair in sorted.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        if upper.min <= lower.max {
            return Err(BandError::Overlap {
                from: upper.min,
                to: lower.max.min(upper.max),
            });
        }
        if upper.min > lower.max + 1 {
            return Err(BandError::Gap {
                from: lower.max + 1,
                to: upper.min - 1,
            });
        }
    }

    let last = sorted[sorted.len() - 1];
    if last.max < range.max {
        return Err(BandError::Gap {
            from: last.max + 1,
            to: range.max,
        });
    }
    if last.max > range.max {
        return Err(BandError::Overlap {
            from: range.max + 1,
            to: last.max,
        });
    }

    Ok(())
}

pub(crate) fn sorted_by_min(bands: &[ScoreBand]) -> Vec<ScoreBand> {
    let mut sorted = bands.to_vec();
    sorted.sort_by_key(|band| band.min);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use DiagnosisCategory::*;

    fn quartiles() -> Vec<ScoreBand> {
        vec![
            ScoreBand::new(Healthy, 0, 25),
            ScoreBand::new(Improvement, 26, 50),
            ScoreBand::new(Struggling, 51, 75),
            ScoreBand::new(Severe, 76, 100),
        ]
    }

    #[test]
    fn accepts_exact_partition_in_any_order() {
        let mut bands = quartiles();
        bands.reverse();
        assert_eq!(validate_partition(&bands, ScoreRange::new(0, 100)), Ok(()));
    }

    #[test]
    fn reports_gaps_between_bands() {
        let mut bands = quartiles();
        bands[1].max = 48;
        assert_eq!(
            validate_partition(&bands, ScoreRange::new(0, 100)),
            Err(BandError::Gap { from: 49, to: 50 })
        );
    }

    #[test]
    fn reports_overlapping_bands() {
        let mut bands = quartiles();
        bands[2].min = 49;
        assert_eq!(
            validate_partition(&bands, ScoreRange::new(0, 100)),
            Err(BandError::Overlap { from: 49, to: 50 })
        );
    }

    #[test]
    fn reports_uncovered_range_edges() {
        let mut bands = quartiles();
        bands[0].min = 1;
        assert_eq!(
            validate_partition(&bands, ScoreRange::new(0, 100)),
            Err(BandError::Gap { from: 0, to: 0 })
        );

        let bands = quartiles();
        assert_eq!(
            validate_partition(&bands, ScoreRange::new(0, 36)),
            Err(BandError::Overlap { from: 37, to: 100 })
        );
    }

    #[test]
    fn rejects_inverted_and_duplicate_bands() {
        let inverted = vec![ScoreBand::new(Healthy, 10, 0)];
        assert!(matches!(
            validate_partition(&inverted, ScoreRange::new(0, 10)),
            Err(BandError::Inverted { .. })
        ));

        let duplicate = vec![
            ScoreBand::new(Healthy, 0, 5),
            ScoreBand::new(Healthy, 6, 10),
        ];
        assert_eq!(
            validate_partition(&duplicate, ScoreRange::new(0, 10)),
            Err(BandError::DuplicateCategory(Healthy))
        );
        assert_eq!(
            validate_partition(&[], ScoreRange::new(0, 10)),
            Err(BandError::Empty)
        );
    }
}
