//! End-to-end scoring over generated clients and hand-built edge cases.

use scoring::{
    AbilityBounds, CategoryTally, Polarity, Questionnaire, RiskScoringEngine, ScoringConfig,
    Thresholds, compute_ability_score, normalize_ability_score, score,
};
use synth::generate_synthetic;
use types::{
    ClientFinancialProfile, IncomeStability, PsychometricResponses, RiskObjective, RiskQuadrant,
    RiskToleranceCategory,
};

fn profile(income: f64, net_worth: f64, liabilities: f64, horizon: u8) -> ClientFinancialProfile {
    ClientFinancialProfile {
        income,
        net_worth,
        liabilities,
        time_horizon_years: horizon,
        dependents: 2,
        income_stability: IncomeStability::Variable,
    }
}

#[test]
fn test_reference_client() {
    let client = profile(50_000.0, 200_000.0, 50_000.0, 10);
    let result = score(
        &client,
        &PsychometricResponses::neutral(),
        &ScoringConfig::default(),
    );
    assert!((result.ability_score - 7.5).abs() < 1e-12);
    assert!((result.ability_score_normalized - 0.5).abs() < 1e-12);
    assert_eq!(result.willingness_score, 15);
    assert_eq!(result.risk_tolerance_category, RiskToleranceCategory::AboveAverage);
}

#[test]
fn test_extreme_inputs_clamp() {
    let config = ScoringConfig::default();
    let rich = profile(10_000_000.0, 0.0, 0.0, 1);
    let result = score(&rich, &PsychometricResponses::neutral(), &config);
    assert!(result.ability_score > 20.0);
    assert_eq!(result.ability_score_normalized, 1.0);

    let indebted = profile(0.0, -5_000_000.0, 9_000_000.0, 1);
    let result = score(&indebted, &PsychometricResponses::neutral(), &config);
    assert!(result.ability_score < -5.0);
    assert_eq!(result.ability_score_normalized, 0.0);
}

#[test]
fn test_generated_clients_score_in_domain() {
    let table = generate_synthetic(1_000, Some(17)).unwrap();
    let engine = RiskScoringEngine::default();

    let inputs: Vec<_> = table.iter().map(|r| (r.profile(), r.responses())).collect();
    let results = engine.score_all(inputs.iter().map(|(p, r)| (p, r)));
    assert_eq!(results.len(), table.len());

    for result in &results {
        assert!((0.0..=1.0).contains(&result.ability_score_normalized));
        assert!((5..=25).contains(&result.willingness_score));
        assert!(RiskToleranceCategory::ALL.contains(&result.risk_tolerance_category));
    }

    let tally = CategoryTally::from_results(&results);
    assert_eq!(tally.total(), 1_000);
    let summed: usize = RiskToleranceCategory::ALL
        .iter()
        .map(|c| tally.count(*c))
        .sum();
    assert_eq!(summed, 1_000);
}

#[test]
fn test_scoring_is_idempotent() {
    let table = generate_synthetic(50, Some(3)).unwrap();
    let config = ScoringConfig::default().with_polarity(Questionnaire::ReverseWorded.polarity());
    for row in &table {
        let first = score(&row.profile(), &row.responses(), &config);
        let second = score(&row.profile(), &row.responses(), &config);
        assert_eq!(first, second);
    }
}

#[test]
fn test_polarity_changes_willingness_only() {
    let client = profile(80_000.0, 100_000.0, 10_000.0, 20);
    let answers = PsychometricResponses::from_values([1, 1, 1, 5, 5]).unwrap();

    let direct = score(&client, &answers, &ScoringConfig::default());
    let inverted = score(
        &client,
        &answers,
        &ScoringConfig::default().with_polarity(Polarity::inverting(&[0, 1, 2])),
    );

    assert_eq!(direct.willingness_score, 13);
    assert_eq!(inverted.willingness_score, 25);
    assert_eq!(direct.ability_score, inverted.ability_score);
}

#[test]
fn test_custom_bounds_and_thresholds() {
    let client = profile(50_000.0, 200_000.0, 50_000.0, 10);
    let raw = compute_ability_score(&client);
    let bounds = AbilityBounds::new(0.0, 10.0).unwrap();
    assert!((normalize_ability_score(raw, bounds) - 0.75).abs() < 1e-12);

    let strict = ScoringConfig::default()
        .with_bounds(bounds)
        .with_thresholds(Thresholds::new(0.8, 20).unwrap());
    let result = score(&client, &PsychometricResponses::neutral(), &strict);
    assert_eq!(result.risk_tolerance_category, RiskToleranceCategory::BelowAverage);
}

#[test]
fn test_assessment_carries_objective() {
    let engine = RiskScoringEngine::default();
    let objective = RiskObjective {
        absolute_max_loss_pct: 20.0,
        relative_outperformance_pct: 3.5,
    };
    let low_willing = PsychometricResponses::from_values([1, 1, 1, 1, 1]).unwrap();
    let assessment = engine.assess(&profile(50_000.0, 200_000.0, 50_000.0, 10), &low_willing, objective);

    assert_eq!(assessment.objective, objective);
    assert_eq!(assessment.quadrant, RiskQuadrant::HighAbilityLowWillingness);
    assert_eq!(
        assessment.score.risk_tolerance_category,
        RiskToleranceCategory::ResolutionNeeded
    );
}
