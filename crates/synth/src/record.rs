//! A single synthetic client row.

use serde::{Deserialize, Serialize};
use types::{ClientFinancialProfile, IncomeStability, LikertResponse, PsychometricResponses};

/// One generated client: the financial profile fields followed by q1..q5.
///
/// Immutable once generated; convert with [`profile`](Self::profile) and
/// [`responses`](Self::responses) to feed the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticClientRecord {
    pub income: f64,
    pub net_worth: f64,
    pub liabilities: f64,
    pub time_horizon_years: u8,
    pub dependents: u8,
    pub income_stability: IncomeStability,
    pub q1: LikertResponse,
    pub q2: LikertResponse,
    pub q3: LikertResponse,
    pub q4: LikertResponse,
    pub q5: LikertResponse,
}

impl SyntheticClientRecord {
    pub fn profile(&self) -> ClientFinancialProfile {
        ClientFinancialProfile {
            income: self.income,
            net_worth: self.net_worth,
            liabilities: self.liabilities,
            time_horizon_years: self.time_horizon_years,
            dependents: self.dependents,
            income_stability: self.income_stability,
        }
    }

    pub fn responses(&self) -> PsychometricResponses {
        PsychometricResponses::new(self.answers())
    }

    /// q1..q5 in order.
    pub fn answers(&self) -> [LikertResponse; 5] {
        [self.q1, self.q2, self.q3, self.q4, self.q5]
    }

    /// Bitwise equality, distinguishing `-0.0` from `0.0`.
    pub fn bit_identical(&self, other: &Self) -> bool {
        self.income.to_bits() == other.income.to_bits()
            && self.net_worth.to_bits() == other.net_worth.to_bits()
            && self.liabilities.to_bits() == other.liabilities.to_bits()
            && self.time_horizon_years == other.time_horizon_years
            && self.dependents == other.dependents
            && self.income_stability == other.income_stability
            && self.answers() == other.answers()
    }
}
