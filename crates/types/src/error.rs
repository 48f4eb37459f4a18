//! Range violations for collaborator-supplied inputs.

/// An input value outside its declared domain.
///
/// Returned by the `validate()` helpers and checked constructors. The scoring
/// engine never produces this; keeping inputs in domain is the caller's job.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("income must be non-negative, got {0}")]
    NegativeIncome(f64),

    #[error("liabilities must be non-negative, got {0}")]
    NegativeLiabilities(f64),

    #[error("time horizon must be between {min} and {max} years, got {value}")]
    TimeHorizonOutOfRange { value: u8, min: u8, max: u8 },

    #[error("Likert response must be between {min} and {max}, got {value}")]
    LikertOutOfRange { value: u8, min: u8, max: u8 },

    #[error("unknown income stability: {0:?} (expected Stable, Fluctuating or Variable)")]
    UnknownIncomeStability(String),

    #[error("maximum acceptable loss must be between 0 and 100 percent, got {0}")]
    MaxLossOutOfRange(f64),

    #[error("benchmark outperformance must be between 0 and 10 percent, got {0}")]
    OutperformanceOutOfRange(f64),
}
