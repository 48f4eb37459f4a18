//! Tunable parameters for the scoring engine.
//!
//! Formula variants (which questions are reverse-worded, which conceptual
//! bounds to normalize against, where the quadrant thresholds sit) are all
//! expressed here as data, so a single engine covers every questionnaire.
//!
//! # Design Principles
//!
//! - **Declarative**: Behavior controlled by `ScoringConfig`, not branches
//! - **SoC**: Config is pure data; the scoring modules hold the math

use serde::{Deserialize, Serialize};
use types::QUESTION_COUNT;

/// Errors from building an invalid configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("ability bounds must be finite with min < max, got min={min}, max={max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("ability threshold must be finite, got {0}")]
    NonFiniteThreshold(f64),

    #[error("polarity must list exactly {expected} questions, got {actual}")]
    PolarityLength { expected: usize, actual: usize },

    #[error("unknown polarity {0:?} (expected direct or inverted)")]
    UnknownPolarity(String),

    #[error("unknown questionnaire {0:?} (expected standard or reverse_worded)")]
    UnknownQuestionnaire(String),
}

// =============================================================================
// Polarity
// =============================================================================

/// How a question's answer maps onto willingness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionPolarity {
    /// Higher answer means more willing.
    #[default]
    Direct,
    /// Reverse-worded question: higher answer means less willing.
    Inverted,
}

impl std::str::FromStr for QuestionPolarity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" | "d" => Ok(QuestionPolarity::Direct),
            "inverted" | "i" => Ok(QuestionPolarity::Inverted),
            _ => Err(ConfigError::UnknownPolarity(s.to_string())),
        }
    }
}

/// Per-question polarity vector, q1 through q5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Polarity(pub [QuestionPolarity; QUESTION_COUNT]);

impl Polarity {
    /// Every question read as-is.
    pub fn all_direct() -> Self {
        Self([QuestionPolarity::Direct; QUESTION_COUNT])
    }

    /// Invert exactly the listed questions (zero-based indices).
    ///
    /// Indices past the last question are ignored.
    pub fn inverting(indices: &[usize]) -> Self {
        let mut slots = [QuestionPolarity::Direct; QUESTION_COUNT];
        for &i in indices {
            if let Some(slot) = slots.get_mut(i) {
                *slot = QuestionPolarity::Inverted;
            }
        }
        Self(slots)
    }

    /// Build from a variable-length list, as read from a CLI flag.
    pub fn from_slice(items: &[QuestionPolarity]) -> Result<Self, ConfigError> {
        let slots: [QuestionPolarity; QUESTION_COUNT] =
            items.try_into().map_err(|_| ConfigError::PolarityLength {
                expected: QUESTION_COUNT,
                actual: items.len(),
            })?;
        Ok(Self(slots))
    }

    pub fn get(&self, question: usize) -> Option<QuestionPolarity> {
        self.0.get(question).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = QuestionPolarity> + '_ {
        self.0.iter().copied()
    }
}

// =============================================================================
// AbilityBounds
// =============================================================================

/// Conceptual extremes of the raw ability score.
///
/// These are tuning parameters, not observed minima/maxima.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct AbilityBounds {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawBounds {
    min: f64,
    max: f64,
}

impl TryFrom<RawBounds> for AbilityBounds {
    type Error = ConfigError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        AbilityBounds::new(raw.min, raw.max)
    }
}

impl AbilityBounds {
    pub const DEFAULT_MIN: f64 = -5.0;
    pub const DEFAULT_MAX: f64 = 20.0;

    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the conceptual range. Always positive.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for AbilityBounds {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

// =============================================================================
// Thresholds
// =============================================================================

/// Quadrant split points. Both comparisons are inclusive on the high side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Split on normalized ability (0.0-1.0).
    pub ability: f64,
    /// Split on willingness score (5-25).
    pub willingness: u8,
}

impl Thresholds {
    pub const DEFAULT_ABILITY: f64 = 0.5;
    pub const DEFAULT_WILLINGNESS: u8 = 15;

    pub fn new(ability: f64, willingness: u8) -> Result<Self, ConfigError> {
        if !ability.is_finite() {
            return Err(ConfigError::NonFiniteThreshold(ability));
        }
        Ok(Self {
            ability,
            willingness,
        })
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ability: Self::DEFAULT_ABILITY,
            willingness: Self::DEFAULT_WILLINGNESS,
        }
    }
}

// =============================================================================
// ScoringConfig
// =============================================================================

/// Complete engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub bounds: AbilityBounds,
    pub thresholds: Thresholds,
    pub polarity: Polarity,
}

impl ScoringConfig {
    pub fn with_bounds(mut self, bounds: AbilityBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScoringConfig::default();
        assert_eq!(config.bounds.min(), -5.0);
        assert_eq!(config.bounds.max(), 20.0);
        assert_eq!(config.thresholds.ability, 0.5);
        assert_eq!(config.thresholds.willingness, 15);
        assert_eq!(config.polarity, Polarity::all_direct());
    }

    #[test]
    fn test_bounds_must_be_ordered() {
        assert!(AbilityBounds::new(0.0, 10.0).is_ok());
        assert_eq!(
            AbilityBounds::new(10.0, 10.0),
            Err(ConfigError::InvalidBounds {
                min: 10.0,
                max: 10.0
            })
        );
        assert!(AbilityBounds::new(f64::NEG_INFINITY, 10.0).is_err());
    }

    #[test]
    fn test_polarity_inverting() {
        let p = Polarity::inverting(&[0, 1, 2, 9]);
        assert_eq!(
            p.iter().collect::<Vec<_>>(),
            vec![
                QuestionPolarity::Inverted,
                QuestionPolarity::Inverted,
                QuestionPolarity::Inverted,
                QuestionPolarity::Direct,
                QuestionPolarity::Direct,
            ]
        );
    }

    #[test]
    fn test_polarity_inverting_repeats_and_empty() {
        assert_eq!(Polarity::inverting(&[]), Polarity::all_direct());
        assert_eq!(Polarity::inverting(&[4, 4]).get(4), Some(QuestionPolarity::Inverted));
        assert_eq!(Polarity::inverting(&[4, 4]).get(3), Some(QuestionPolarity::Direct));
    }

    #[test]
    fn test_polarity_from_slice_length() {
        let short = [QuestionPolarity::Direct; 4];
        assert_eq!(
            Polarity::from_slice(&short),
            Err(ConfigError::PolarityLength {
                expected: 5,
                actual: 4
            })
        );
        assert!(Polarity::from_slice(&[QuestionPolarity::Inverted; 5]).is_ok());
    }

    #[test]
    fn test_config_json_partial_and_invalid() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"thresholds":{"ability":0.6,"willingness":12}}"#).unwrap();
        assert_eq!(config.thresholds.willingness, 12);
        assert_eq!(config.bounds, AbilityBounds::default());

        let config: ScoringConfig = serde_json::from_str(
            r#"{"polarity":["inverted","inverted","inverted","direct","direct"]}"#,
        )
        .unwrap();
        assert_eq!(config.polarity, Polarity::inverting(&[0, 1, 2]));

        let bad = serde_json::from_str::<ScoringConfig>(r#"{"bounds":{"min":5,"max":1}}"#);
        assert!(bad.is_err());
    }
}
