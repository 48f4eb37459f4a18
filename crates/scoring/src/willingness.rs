//! Willingness to take risk.

use types::PsychometricResponses;

use crate::config::{Polarity, QuestionPolarity};

/// Sum of the willingness-aligned answers.
///
/// Inverted questions contribute `(max + 1) - answer`. Each contribution is
/// 1..=5, so the result is 5..=25 whatever the polarity mix.
pub fn compute_willingness_score(responses: &PsychometricResponses, polarity: &Polarity) -> u8 {
    responses
        .answers()
        .iter()
        .zip(polarity.iter())
        .map(|(answer, p)| match p {
            QuestionPolarity::Direct => answer.get(),
            QuestionPolarity::Inverted => answer.inverted().get(),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responses(values: [u8; 5]) -> PsychometricResponses {
        PsychometricResponses::from_values(values).unwrap()
    }

    #[test]
    fn test_midpoint_is_polarity_invariant() {
        let r = responses([3, 3, 3, 3, 3]);
        assert_eq!(compute_willingness_score(&r, &Polarity::all_direct()), 15);
        assert_eq!(
            compute_willingness_score(&r, &Polarity::inverting(&[0, 1, 2])),
            15
        );
    }

    #[test]
    fn test_inversion_off_midpoint() {
        let r = responses([1, 1, 1, 5, 5]);
        assert_eq!(compute_willingness_score(&r, &Polarity::all_direct()), 13);
        assert_eq!(
            compute_willingness_score(&r, &Polarity::inverting(&[0, 1, 2])),
            25
        );
    }

    #[test]
    fn test_range_holds_for_any_polarity() {
        let lowest = responses([1; 5]);
        let highest = responses([5; 5]);
        assert_eq!(compute_willingness_score(&lowest, &Polarity::all_direct()), 5);
        assert_eq!(compute_willingness_score(&highest, &Polarity::all_direct()), 25);

        let all_inverted = Polarity::inverting(&[0, 1, 2, 3, 4]);
        assert_eq!(compute_willingness_score(&lowest, &all_inverted), 25);
        assert_eq!(compute_willingness_score(&highest, &all_inverted), 5);
    }

    #[test]
    fn test_single_question_polarity() {
        // Only q4 inverted: 2 + 2 + 2 + (6 - 4) + 2
        let r = responses([2, 2, 2, 4, 2]);
        assert_eq!(compute_willingness_score(&r, &Polarity::inverting(&[3])), 10);
    }
}
