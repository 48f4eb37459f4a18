//! Core types for the risk profiler.
//!
//! This crate provides the entity model shared by the scoring engine and the
//! synthetic client generator: financial profiles, psychometric responses,
//! risk objectives and score outputs.
//!
//! The two components never call each other. They compose only through the
//! types defined here.

mod client;
mod error;
mod questionnaire;
mod score;

pub use client::{ClientFinancialProfile, IncomeStability, RiskObjective};
pub use error::InputError;
pub use questionnaire::{
    LIKERT_MAX, LIKERT_MIN, LikertResponse, PsychometricResponses, QUESTION_COUNT,
};
pub use score::{RiskAssessment, RiskQuadrant, RiskToleranceCategory, ScoreResult};

// =============================================================================
// Domain Constants
// =============================================================================

/// Shortest investment horizon accepted by the questionnaire, in years.
pub const MIN_TIME_HORIZON_YEARS: u8 = 1;

/// Longest investment horizon accepted by the questionnaire, in years.
pub const MAX_TIME_HORIZON_YEARS: u8 = 30;
