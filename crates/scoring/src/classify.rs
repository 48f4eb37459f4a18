//! Quadrant classification on the risk tolerance matrix.

use types::{RiskQuadrant, RiskToleranceCategory};

use crate::config::Thresholds;

/// Place a point on the matrix. High side is inclusive on both axes.
pub fn locate_quadrant(ability_norm: f64, willingness_score: u8, thresholds: Thresholds) -> RiskQuadrant {
    RiskQuadrant::from_sides(
        ability_norm >= thresholds.ability,
        willingness_score >= thresholds.willingness,
    )
}

/// Three-way risk tolerance label. Mismatches collapse to `ResolutionNeeded`.
pub fn classify_risk_tolerance(
    ability_norm: f64,
    willingness_score: u8,
    thresholds: Thresholds,
) -> RiskToleranceCategory {
    locate_quadrant(ability_norm, willingness_score, thresholds).category()
}
