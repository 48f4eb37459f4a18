//! Risk scoring engine for the risk profiler.
//!
//! Maps a client's financial profile and questionnaire answers to an ability
//! score, a normalized ability score, a willingness score and a
//! risk-tolerance category.
//!
//! # Modules
//!
//! - [`ability`] - Ability to bear risk and its normalization
//! - [`willingness`] - Polarity-aware willingness score
//! - [`classify`] - Quadrant classification
//! - [`config`] - Bounds, thresholds and polarity
//! - [`questionnaire`] - Named question sets and their polarity
//! - [`engine`] - Full pipeline, bound engine and batch tallies
//!
//! # Example
//!
//! ```
//! use scoring::{ScoringConfig, score};
//! use types::{ClientFinancialProfile, PsychometricResponses, RiskToleranceCategory};
//!
//! let result = score(
//!     &ClientFinancialProfile::default(),
//!     &PsychometricResponses::neutral(),
//!     &ScoringConfig::default(),
//! );
//! assert_eq!(result.willingness_score, 15);
//! assert_eq!(result.risk_tolerance_category, RiskToleranceCategory::AboveAverage);
//! ```
//!
//! # Design Notes
//!
//! - Every function is pure: no I/O, no shared state, no caching
//! - Inputs are trusted to be in domain; the engine never fails
//! - Formula variants are configuration, never branches

pub mod ability;
pub mod classify;
pub mod config;
pub mod engine;
pub mod questionnaire;
pub mod willingness;

pub use ability::{compute_ability_score, normalize_ability_score};
pub use classify::{classify_risk_tolerance, locate_quadrant};
pub use config::{AbilityBounds, ConfigError, Polarity, QuestionPolarity, ScoringConfig, Thresholds};
pub use engine::{CategoryTally, RiskScoringEngine, score, score_assessment};
pub use questionnaire::{Question, Questionnaire};
pub use willingness::compute_willingness_score;
