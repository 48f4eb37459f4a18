//! Psychometric questionnaire responses ("willingness to take risk" inputs).

use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Lowest point on the Likert scale.
pub const LIKERT_MIN: u8 = 1;

/// Highest point on the Likert scale.
pub const LIKERT_MAX: u8 = 5;

/// Number of questions in the questionnaire.
pub const QUESTION_COUNT: usize = 5;

// =============================================================================
// LikertResponse
// =============================================================================

/// A single answer on the 1..=5 Likert scale.
///
/// The checked constructor makes out-of-scale values unrepresentable, so
/// anything holding a `LikertResponse` is already in domain.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    Into,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct LikertResponse(u8);

impl LikertResponse {
    pub const MIDPOINT: LikertResponse = LikertResponse(3);

    /// Every point on the scale, lowest first.
    pub const SCALE: [LikertResponse; 5] = [
        LikertResponse(1),
        LikertResponse(2),
        LikertResponse(3),
        LikertResponse(4),
        LikertResponse(5),
    ];

    pub fn new(value: u8) -> Result<Self, InputError> {
        if (LIKERT_MIN..=LIKERT_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InputError::LikertOutOfRange {
                value,
                min: LIKERT_MIN,
                max: LIKERT_MAX,
            })
        }
    }

    /// Raw value.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Mirror the answer around the scale midpoint (1<->5, 2<->4, 3<->3).
    #[inline]
    pub fn inverted(self) -> Self {
        Self(LIKERT_MAX + LIKERT_MIN - self.0)
    }
}

impl TryFrom<u8> for LikertResponse {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// =============================================================================
// PsychometricResponses
// =============================================================================

/// Answers to the five willingness questions, q1 through q5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PsychometricResponses {
    answers: [LikertResponse; QUESTION_COUNT],
}

impl PsychometricResponses {
    pub fn new(answers: [LikertResponse; QUESTION_COUNT]) -> Self {
        Self { answers }
    }

    /// Build from raw values, rejecting anything off the scale.
    pub fn from_values(values: [u8; QUESTION_COUNT]) -> Result<Self, InputError> {
        let mut answers = [LikertResponse::MIDPOINT; QUESTION_COUNT];
        for (slot, value) in answers.iter_mut().zip(values) {
            *slot = LikertResponse::new(value)?;
        }
        Ok(Self { answers })
    }

    /// Every question answered at the midpoint.
    pub fn neutral() -> Self {
        Self::new([LikertResponse::MIDPOINT; QUESTION_COUNT])
    }

    /// Answers in question order.
    pub fn answers(&self) -> &[LikertResponse; QUESTION_COUNT] {
        &self.answers
    }

    /// Raw values in question order.
    pub fn values(&self) -> [u8; QUESTION_COUNT] {
        self.answers.map(LikertResponse::get)
    }
}

impl Default for PsychometricResponses {
    fn default() -> Self {
        Self::neutral()
    }
}
