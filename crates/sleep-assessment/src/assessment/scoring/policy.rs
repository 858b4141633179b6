use serde::{Deserialize, Serialize};

/// Inclusive score interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
}

impl ScoreRange {
    /// Bounds given in either order are normalized to `min <= max`.
    pub const fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Never panics, even for a hand-built range with `min > max`; `min` wins then.
    pub fn clamp(&self, score: u32) -> u32 {
        self.min.max(score.min(self.max))
    }
}

/// How the raw answer sum is turned into the score shown to the user and classified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScorePolicy {
    /// Raw sum against a cap of `question count x max option value`.
    RawSum,
    /// `round(raw * multiplier)` clamped into `[min, max]`.
    Scaled { multiplier: f64, min: u32, max: u32 },
    /// `round(raw / max_raw * 100)`.
    PercentOfMax,
}

impl ScorePolicy {
    pub fn range(&self, max_raw: u32) -> ScoreRange {
        match *self {
            ScorePolicy::RawSum => ScoreRange::new(0, max_raw),
            ScorePolicy::Scaled { min, max, .. } => ScoreRange::new(min, max),
            ScorePolicy::PercentOfMax => ScoreRange::new(0, 100),
        }
    }

    /// Normalized score; always within [`ScorePolicy::range`].
    pub fn normalize(&self, raw: u32, max_raw: u32) -> u32 {
        let range = self.range(max_raw);
        let value = match *self {
            ScorePolicy::RawSum => raw,
            ScorePolicy::Scaled { multiplier, .. } => {
                let scaled = (f64::from(raw) * multiplier).round();
                if scaled <= 0.0 {
                    0
                } else if scaled >= f64::from(u32::MAX) {
                    u32::MAX
                } else {
                    scaled as u32
                }
            }
            ScorePolicy::PercentOfMax => {
                if max_raw == 0 {
                    0
                } else {
                    (f64::from(raw) * 100.0 / f64::from(max_raw)).round() as u32
                }
            }
        };
        range.clamp(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLEEP_HEALTH_SCALE: ScorePolicy = ScorePolicy::Scaled {
        multiplier: 2.8,
        min: 0,
        max: 100,
    };

    #[test]
    fn scaled_policy_rounds_then_clamps() {
        assert_eq!(SLEEP_HEALTH_SCALE.normalize(0, 36), 0);
        assert_eq!(SLEEP_HEALTH_SCALE.normalize(9, 36), 25);
        assert_eq!(SLEEP_HEALTH_SCALE.normalize(10, 36), 28);
        assert_eq!(SLEEP_HEALTH_SCALE.normalize(27, 36), 76);
        assert_eq!(SLEEP_HEALTH_SCALE.normalize(36, 36), 100);
    }

    #[test]
    fn percent_policy_rounds_to_nearest_point() {
        let policy = ScorePolicy::PercentOfMax;
        assert_eq!(policy.normalize(14, 14), 100);
        assert_eq!(policy.normalize(7, 14), 50);
        assert_eq!(policy.normalize(11, 14), 79);
        assert_eq!(policy.normalize(0, 14), 0);
        assert_eq!(policy.normalize(3, 0), 0);
    }

    #[test]
    fn inverted_scaled_bounds_do_not_panic() {
        let policy = ScorePolicy::Scaled {
            multiplier: 1.0,
            min: 10,
            max: 0,
        };
        assert_eq!(policy.range(10), ScoreRange::new(0, 10));
        assert_eq!(policy.normalize(5, 10), 5);
        assert_eq!(policy.normalize(50, 10), 10);

        let inverted = ScoreRange { min: 10, max: 0 };
        assert_eq!(inverted.clamp(5), 10);
    }

    #[test]
    fn raw_sum_is_capped_by_catalog_maximum() {
        let policy = ScorePolicy::RawSum;
        assert_eq!(policy.range(36), ScoreRange::new(0, 36));
        assert_eq!(policy.normalize(20, 36), 20);
        assert_eq!(policy.normalize(40, 36), 36);
    }
}
