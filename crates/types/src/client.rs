//! Client financial circumstances and stated risk objectives.
//!
//! These are the "ability to bear risk" inputs. They are plain data: the
//! scoring engine reads them, nothing mutates them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;
use crate::{MAX_TIME_HORIZON_YEARS, MIN_TIME_HORIZON_YEARS};

// =============================================================================
// Income Stability
// =============================================================================

/// How predictable the client's income is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeStability {
    Stable,
    Fluctuating,
    Variable,
}

impl IncomeStability {
    /// Every variant, in declaration order.
    pub const ALL: [IncomeStability; 3] = [
        IncomeStability::Stable,
        IncomeStability::Fluctuating,
        IncomeStability::Variable,
    ];

    /// Canonical label.
    pub fn as_str(self) -> &'static str {
        match self {
            IncomeStability::Stable => "Stable",
            IncomeStability::Fluctuating => "Fluctuating",
            IncomeStability::Variable => "Variable",
        }
    }
}

impl fmt::Display for IncomeStability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncomeStability {
    type Err = InputError;

    /// Case-insensitive parse of the canonical labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IncomeStability::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InputError::UnknownIncomeStability(s.to_string()))
    }
}

// =============================================================================
// ClientFinancialProfile
// =============================================================================

/// Financial inputs for one client evaluation.
///
/// `dependents` and `income_stability` are collected for completeness but do
/// not enter the ability formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientFinancialProfile {
    /// Annual income in dollars (>= 0).
    pub income: f64,
    /// Net worth in dollars. May be negative.
    pub net_worth: f64,
    /// Total liabilities in dollars (>= 0).
    pub liabilities: f64,
    /// Investment time horizon in years (1..=30).
    pub time_horizon_years: u8,
    /// Number of dependents.
    pub dependents: u8,
    /// Income predictability.
    pub income_stability: IncomeStability,
}

impl ClientFinancialProfile {
    /// Check every field against its declared range.
    pub fn validate(&self) -> Result<(), InputError> {
        for (field, value) in [
            ("income", self.income),
            ("net_worth", self.net_worth),
            ("liabilities", self.liabilities),
        ] {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field });
            }
        }
        if self.income < 0.0 {
            return Err(InputError::NegativeIncome(self.income));
        }
        if self.liabilities < 0.0 {
            return Err(InputError::NegativeLiabilities(self.liabilities));
        }
        if !(MIN_TIME_HORIZON_YEARS..=MAX_TIME_HORIZON_YEARS).contains(&self.time_horizon_years) {
            return Err(InputError::TimeHorizonOutOfRange {
                value: self.time_horizon_years,
                min: MIN_TIME_HORIZON_YEARS,
                max: MAX_TIME_HORIZON_YEARS,
            });
        }
        Ok(())
    }
}

impl Default for ClientFinancialProfile {
    fn default() -> Self {
        Self {
            income: 50_000.0,
            net_worth: 200_000.0,
            liabilities: 50_000.0,
            time_horizon_years: 10,
            dependents: 0,
            income_stability: IncomeStability::Stable,
        }
    }
}

// =============================================================================
// RiskObjective
// =============================================================================

/// The client's stated risk objectives.
///
/// Descriptive only: carried alongside the score, never used to compute it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskObjective {
    /// Maximum acceptable capital loss, percent (0..=100).
    pub absolute_max_loss_pct: f64,
    /// Desired benchmark outperformance, percent (0..=10).
    pub relative_outperformance_pct: f64,
}

impl RiskObjective {
    pub fn validate(&self) -> Result<(), InputError> {
        if !(0.0..=100.0).contains(&self.absolute_max_loss_pct) {
            return Err(InputError::MaxLossOutOfRange(self.absolute_max_loss_pct));
        }
        if !(0.0..=10.0).contains(&self.relative_outperformance_pct) {
            return Err(InputError::OutperformanceOutOfRange(
                self.relative_outperformance_pct,
            ));
        }
        Ok(())
    }
}

impl Default for RiskObjective {
    fn default() -> Self {
        Self {
            absolute_max_loss_pct: 5.0,
            relative_outperformance_pct: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_stability_parse() {
        assert_eq!("stable".parse::<IncomeStability>(), Ok(IncomeStability::Stable));
        assert_eq!(
            " Fluctuating ".parse::<IncomeStability>(),
            Ok(IncomeStability::Fluctuating)
        );
        assert_eq!(
            "VARIABLE".parse::<IncomeStability>(),
            Ok(IncomeStability::Variable)
        );
        assert!(matches!(
            "steady".parse::<IncomeStability>(),
            Err(InputError::UnknownIncomeStability(_))
        ));
    }

    #[test]
    fn test_default_profile_is_valid() {
        assert_eq!(ClientFinancialProfile::default().validate(), Ok(()));
    }

    #[test]
    fn test_negative_net_worth_is_allowed() {
        let profile = ClientFinancialProfile {
            net_worth: -75_000.0,
            ..Default::default()
        };
        assert_eq!(profile.validate(), Ok(()));
    }

    #[test]
    fn test_profile_range_violations() {
        let profile = ClientFinancialProfile {
            liabilities: -1.0,
            ..Default::default()
        };
        assert_eq!(profile.validate(), Err(InputError::NegativeLiabilities(-1.0)));

        let profile = ClientFinancialProfile {
            time_horizon_years: 31,
            ..Default::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(InputError::TimeHorizonOutOfRange { value: 31, .. })
        ));

        let profile = ClientFinancialProfile {
            income: f64::NAN,
            ..Default::default()
        };
        assert_eq!(
            profile.validate(),
            Err(InputError::NonFinite { field: "income" })
        );
    }

    #[test]
    fn test_objective_ranges() {
        assert_eq!(RiskObjective::default().validate(), Ok(()));

        let objective = RiskObjective {
            absolute_max_loss_pct: 100.5,
            ..Default::default()
        };
        assert_eq!(objective.validate(), Err(InputError::MaxLossOutOfRange(100.5)));

        let objective = RiskObjective {
            relative_outperformance_pct: 10.0,
            ..Default::default()
        };
        assert_eq!(objective.validate(), Ok(()));
    }
}
