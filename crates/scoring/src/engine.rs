//! Scoring entry points.
//!
//! `score` is the full pipeline: ability, normalization, willingness and
//! classification, in one pure call. `RiskScoringEngine` binds a config for
//! callers that score many clients with the same settings.

use std::collections::BTreeMap;
use std::fmt;

use types::{
    ClientFinancialProfile, PsychometricResponses, RiskAssessment, RiskObjective, RiskQuadrant,
    RiskToleranceCategory, ScoreResult,
};

use crate::ability::{compute_ability_score, normalize_ability_score};
use crate::classify::locate_quadrant;
use crate::config::ScoringConfig;
use crate::willingness::compute_willingness_score;

/// Score one client.
pub fn score(
    profile: &ClientFinancialProfile,
    responses: &PsychometricResponses,
    config: &ScoringConfig,
) -> ScoreResult {
    evaluate(profile, responses, config).0
}

/// Score one client and attach the matrix quadrant and stated objective.
pub fn score_assessment(
    profile: &ClientFinancialProfile,
    responses: &PsychometricResponses,
    objective: RiskObjective,
    config: &ScoringConfig,
) -> RiskAssessment {
    let (score, quadrant) = evaluate(profile, responses, config);
    RiskAssessment {
        score,
        quadrant,
        objective,
    }
}

/// The category is always `quadrant.category()` of the returned quadrant.
fn evaluate(
    profile: &ClientFinancialProfile,
    responses: &PsychometricResponses,
    config: &ScoringConfig,
) -> (ScoreResult, RiskQuadrant) {
    let ability_score = compute_ability_score(profile);
    let ability_score_normalized = normalize_ability_score(ability_score, config.bounds);
    let willingness_score = compute_willingness_score(responses, &config.polarity);
    let quadrant = locate_quadrant(ability_score_normalized, willingness_score, config.thresholds);

    let result = ScoreResult {
        ability_score,
        ability_score_normalized,
        willingness_score,
        risk_tolerance_category: quadrant.category(),
    };
    (result, quadrant)
}

// =============================================================================
// RiskScoringEngine
// =============================================================================

/// A scoring config bound for repeated use.
///
/// Holds no state beyond the config; every call recomputes from its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScoringEngine {
    config: ScoringConfig,
}

impl RiskScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(
        &self,
        profile: &ClientFinancialProfile,
        responses: &PsychometricResponses,
    ) -> ScoreResult {
        score(profile, responses, &self.config)
    }

    pub fn assess(
        &self,
        profile: &ClientFinancialProfile,
        responses: &PsychometricResponses,
        objective: RiskObjective,
    ) -> RiskAssessment {
        score_assessment(profile, responses, objective, &self.config)
    }

    /// Score a batch of `(profile, responses)` pairs in order.
    pub fn score_all<'a, I>(&self, clients: I) -> Vec<ScoreResult>
    where
        I: IntoIterator<Item = (&'a ClientFinancialProfile, &'a PsychometricResponses)>,
    {
        clients
            .into_iter()
            .map(|(profile, responses)| self.score(profile, responses))
            .collect()
    }
}

// =============================================================================
// CategoryTally
// =============================================================================

/// How many results fell into each risk-tolerance category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTally {
    counts: BTreeMap<RiskToleranceCategory, usize>,
    total: usize,
}

impl CategoryTally {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a ScoreResult>) -> Self {
        let mut tally = Self::default();
        results
            .into_iter()
            .for_each(|r| tally.record(r.risk_tolerance_category));
        tally
    }

    pub fn record(&mut self, category: RiskToleranceCategory) {
        *self.counts.entry(category).or_default() += 1;
        self.total += 1;
    }

    pub fn count(&self, category: RiskToleranceCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Share of results in `category`, or `None` when empty.
    pub fn fraction(&self, category: RiskToleranceCategory) -> Option<f64> {
        (self.total > 0).then(|| self.count(category) as f64 / self.total as f64)
    }
}

impl fmt::Display for CategoryTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in RiskToleranceCategory::ALL {
            let pct = self.fraction(category).unwrap_or(0.0) * 100.0;
            writeln!(
                f,
                "{:<30} {:>8} {:>6.1}%",
                category.label(),
                self.count(category),
                pct
            )?;
        }
        write!(f, "{:<30} {:>8}", "Total", self.total)
    }
}
