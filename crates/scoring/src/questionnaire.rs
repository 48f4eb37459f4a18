//! Named questionnaire designs.
//!
//! Two question sets are in circulation. Their statements are worded in
//! different directions, so each preset carries the polarity vector that
//! orients every answer toward "more willing".

use serde::{Deserialize, Serialize};
use types::QUESTION_COUNT;

use crate::config::{ConfigError, Polarity, QuestionPolarity};

/// A questionnaire preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Questionnaire {
    /// Answers are summed as given.
    #[default]
    Standard,
    /// q1-q3 are reverse-worded ("1 = Strongly Agree") and get inverted.
    ReverseWorded,
}

/// One question: its statement and how the answer is oriented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub statement: &'static str,
    /// Scale anchors as `(label for 1, label for 5)`.
    pub anchors: (&'static str, &'static str),
    pub polarity: QuestionPolarity,
}

const AGREE_FIRST: (&str, &str) = ("Strongly Agree", "Strongly Disagree");
const DISAGREE_FIRST: (&str, &str) = ("Strongly Disagree", "Strongly Agree");

const STANDARD: [Question; QUESTION_COUNT] = [
    Question {
        statement: "Investing is too difficult to understand.",
        anchors: AGREE_FIRST,
        polarity: QuestionPolarity::Direct,
    },
    Question {
        statement: "I get nervous when the stock market goes down.",
        anchors: AGREE_FIRST,
        polarity: QuestionPolarity::Direct,
    },
    Question {
        statement: "I am comfortable with the possibility of losing money on my investments.",
        anchors: DISAGREE_FIRST,
        polarity: QuestionPolarity::Direct,
    },
    Question {
        statement: "I prefer investments with guaranteed returns, even if the returns are lower.",
        anchors: DISAGREE_FIRST,
        polarity: QuestionPolarity::Direct,
    },
    Question {
        statement: "I actively seek out high-risk, high-reward investment opportunities.",
        anchors: DISAGREE_FIRST,
        polarity: QuestionPolarity::Direct,
    },
];

const REVERSE_WORDED: [Question; QUESTION_COUNT] = [
    Question {
        statement: "Investing is too difficult to understand.",
        anchors: AGREE_FIRST,
        polarity: QuestionPolarity::Inverted,
    },
    Question {
        statement: "I get anxious when the market fluctuates.",
        anchors: AGREE_FIRST,
        polarity: QuestionPolarity::Inverted,
    },
    Question {
        statement: "I prefer investments with guaranteed returns, even if the returns are lower.",
        anchors: AGREE_FIRST,
        polarity: QuestionPolarity::Inverted,
    },
    Question {
        statement: "I am comfortable with the possibility of losing money on my investments.",
        anchors: DISAGREE_FIRST,
        polarity: QuestionPolarity::Direct,
    },
    Question {
        statement: "I like to take risks in other areas of my life.",
        anchors: DISAGREE_FIRST,
        polarity: QuestionPolarity::Direct,
    },
];

impl Questionnaire {
    pub fn questions(self) -> &'static [Question; QUESTION_COUNT] {
        match self {
            Questionnaire::Standard => &STANDARD,
            Questionnaire::ReverseWorded => &REVERSE_WORDED,
        }
    }

    /// Polarity vector matching this question set.
    pub fn polarity(self) -> Polarity {
        let questions = *self.questions();
        Polarity(questions.map(|q| q.polarity))
    }

    pub fn name(self) -> &'static str {
        match self {
            Questionnaire::Standard => "standard",
            Questionnaire::ReverseWorded => "reverse_worded",
        }
    }
}

impl std::str::FromStr for Questionnaire {
    type Err = ConfigError;

    /// Accepts the snake_case name, with `-` allowed in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "standard" => Ok(Questionnaire::Standard),
            "reverse_worded" => Ok(Questionnaire::ReverseWorded),
            _ => Err(ConfigError::UnknownQuestionnaire(s.to_string())),
        }
    }
}
