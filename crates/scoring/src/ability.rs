//! Ability to bear risk.
//!
//! A linear score over the client's finances. Each dimension is scaled by a
//! divisor chosen so typical middle-class values land inside the conceptual
//! range [-5, 20]. Dependents and income stability are not part of the
//! formula.

use types::ClientFinancialProfile;

use crate::config::AbilityBounds;

/// Dollars of income per ability point.
pub const INCOME_DIVISOR: f64 = 10_000.0;
/// Dollars of net worth per ability point.
pub const NET_WORTH_DIVISOR: f64 = 50_000.0;
/// Dollars of liabilities per lost ability point.
pub const LIABILITIES_DIVISOR: f64 = 20_000.0;
/// Years of horizon per ability point.
pub const TIME_HORIZON_DIVISOR: f64 = 10.0;

/// Raw ability score. Total over finite inputs; unbounded.
pub fn compute_ability_score(profile: &ClientFinancialProfile) -> f64 {
    profile.income / INCOME_DIVISOR + profile.net_worth / NET_WORTH_DIVISOR
        - profile.liabilities / LIABILITIES_DIVISOR
        + f64::from(profile.time_horizon_years) / TIME_HORIZON_DIVISOR
}

/// Rescale onto [0, 1] against the conceptual bounds, then clamp.
pub fn normalize_ability_score(ability_score: f64, bounds: AbilityBounds) -> f64 {
    ((ability_score - bounds.min()) / bounds.span()).clamp(0.0, 1.0)
}
