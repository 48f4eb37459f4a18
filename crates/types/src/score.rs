//! Scoring outputs: scores, risk-tolerance categories and matrix quadrants.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::client::RiskObjective;

// =============================================================================
// RiskToleranceCategory
// =============================================================================

/// Overall risk-tolerance label.
///
/// Both mismatch quadrants collapse into `ResolutionNeeded`: a client whose
/// ability and willingness disagree is referred to an advisor rather than
/// resolved numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskToleranceCategory {
    BelowAverage,
    AboveAverage,
    ResolutionNeeded,
}

impl RiskToleranceCategory {
    pub const ALL: [RiskToleranceCategory; 3] = [
        RiskToleranceCategory::BelowAverage,
        RiskToleranceCategory::AboveAverage,
        RiskToleranceCategory::ResolutionNeeded,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            RiskToleranceCategory::BelowAverage => "Below-average risk tolerance",
            RiskToleranceCategory::AboveAverage => "Above-average risk tolerance",
            RiskToleranceCategory::ResolutionNeeded => "Resolution needed",
        }
    }
}

impl fmt::Display for RiskToleranceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// RiskQuadrant
// =============================================================================

/// One cell of the two-by-two risk tolerance matrix.
///
/// Finer-grained than [`RiskToleranceCategory`]; used to place a client on
/// the matrix and to say *which* mismatch needs resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskQuadrant {
    LowAbilityLowWillingness,
    LowAbilityHighWillingness,
    HighAbilityLowWillingness,
    HighAbilityHighWillingness,
}

impl RiskQuadrant {
    /// Select the quadrant from the two threshold comparisons.
    pub fn from_sides(high_ability: bool, high_willingness: bool) -> Self {
        match (high_ability, high_willingness) {
            (false, false) => RiskQuadrant::LowAbilityLowWillingness,
            (false, true) => RiskQuadrant::LowAbilityHighWillingness,
            (true, false) => RiskQuadrant::HighAbilityLowWillingness,
            (true, true) => RiskQuadrant::HighAbilityHighWillingness,
        }
    }

    /// Collapse to the three-way category.
    pub fn category(self) -> RiskToleranceCategory {
        match self {
            RiskQuadrant::LowAbilityLowWillingness => RiskToleranceCategory::BelowAverage,
            RiskQuadrant::HighAbilityHighWillingness => RiskToleranceCategory::AboveAverage,
            RiskQuadrant::LowAbilityHighWillingness | RiskQuadrant::HighAbilityLowWillingness => {
                RiskToleranceCategory::ResolutionNeeded
            }
        }
    }

    /// Label position on the matrix as `(normalized ability, willingness)`.
    pub fn centroid(self) -> (f64, f64) {
        match self {
            RiskQuadrant::LowAbilityLowWillingness => (0.25, 7.5),
            RiskQuadrant::LowAbilityHighWillingness => (0.25, 22.5),
            RiskQuadrant::HighAbilityLowWillingness => (0.75, 7.5),
            RiskQuadrant::HighAbilityHighWillingness => (0.75, 22.5),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskQuadrant::LowAbilityLowWillingness => "Below-average risk tolerance",
            RiskQuadrant::LowAbilityHighWillingness => "Resolution needed (Low Ability)",
            RiskQuadrant::HighAbilityLowWillingness => "Resolution needed (High Ability)",
            RiskQuadrant::HighAbilityHighWillingness => "Above-average risk tolerance",
        }
    }
}

impl fmt::Display for RiskQuadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// ScoreResult
// =============================================================================

/// Result of one evaluation. Recomputed from inputs on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Raw ability to bear risk. Unbounded.
    pub ability_score: f64,
    /// Ability rescaled against the conceptual bounds, clamped to [0, 1].
    pub ability_score_normalized: f64,
    /// Sum of the five willingness-aligned answers (5..=25).
    pub willingness_score: u8,
    pub risk_tolerance_category: RiskToleranceCategory,
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ability Score: {:.2}", self.ability_score)?;
        writeln!(
            f,
            "Normalized Ability Score: {:.2}",
            self.ability_score_normalized
        )?;
        writeln!(f, "Willingness Score: {}", self.willingness_score)?;
        write!(
            f,
            "Overall Risk Tolerance Category: {}",
            self.risk_tolerance_category
        )
    }
}

// =============================================================================
// RiskAssessment
// =============================================================================

/// A score bundled with the matrix quadrant and the client's stated objective.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: ScoreResult,
    pub quadrant: RiskQuadrant,
    /// Passed through untouched.
    pub objective: RiskObjective,
}
