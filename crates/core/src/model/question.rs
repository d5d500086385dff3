use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::language::Localized;

/// Every question offers exactly four answer options.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id}: correct answer index {index} is out of range")]
    CorrectAnswerOutOfRange { id: QuestionId, index: usize },

    #[error("question {id}: prompt is empty")]
    EmptyPrompt { id: QuestionId },

    #[error("question {id}: option {index} is empty")]
    EmptyOption { id: QuestionId, index: usize },
}

//
// ─── IDS ───────────────────────────────────────────────────────────────────────
//

/// Unique identifier for a catalog question.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(u32);

impl QuestionId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a `QuestionId` from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseQuestionIdError;

impl fmt::Display for ParseQuestionIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse QuestionId from string")
    }
}

impl std::error::Error for ParseQuestionIdError {}

impl FromStr for QuestionId {
    type Err = ParseQuestionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(QuestionId::new)
            .map_err(|_| ParseQuestionIdError)
    }
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Fixed difficulty classification on each catalog question.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Immutable catalog entry for one quiz question.
///
/// Answer options keep the same order across all languages, so
/// `correct_answer` is language independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: Localized<&'static str>,
    pub options: Localized<[&'static str; OPTION_COUNT]>,
    pub correct_answer: usize,
    pub explanation: Localized<&'static str>,
    pub difficulty: Difficulty,
}

impl Question {
    /// Check the structural invariants of a catalog entry.
    ///
    /// The catalog is static and trusted; this backs the content
    /// integrity tests rather than any runtime path.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when an invariant is violated.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.correct_answer >= OPTION_COUNT {
            return Err(QuestionError::CorrectAnswerOutOfRange {
                id: self.id,
                index: self.correct_answer,
            });
        }

        for language in crate::model::Language::ALL {
            if self.prompt.get(language).trim().is_empty() {
                return Err(QuestionError::EmptyPrompt { id: self.id });
            }
            for (index, option) in self.options.get(language).iter().enumerate() {
                if option.trim().is_empty() {
                    return Err(QuestionError::EmptyOption { id: self.id, index });
                }
            }
        }

        Ok(())
    }

    /// Returns true when the given option index is the correct one.
    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question {
            id: QuestionId::new(1),
            prompt: Localized {
                de: "Was ist Bitcoin?",
                en: "What is Bitcoin?",
                es: "¿Qué es Bitcoin?",
            },
            options: Localized {
                de: ["a", "b", "c", "d"],
                en: ["a", "b", "c", "d"],
                es: ["a", "b", "c", "d"],
            },
            correct_answer: 1,
            explanation: Localized {
                de: "x",
                en: "x",
                es: "x",
            },
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn valid_question_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn out_of_range_answer_is_rejected() {
        let mut question = sample();
        question.correct_answer = 4;
        assert_eq!(
            question.validate(),
            Err(QuestionError::CorrectAnswerOutOfRange {
                id: QuestionId::new(1),
                index: 4,
            })
        );
    }

    #[test]
    fn empty_option_is_rejected() {
        let mut question = sample();
        question.options.es[2] = " ";
        assert!(matches!(
            question.validate(),
            Err(QuestionError::EmptyOption { index: 2, .. })
        ));
    }

    #[test]
    fn is_correct_matches_index() {
        let question = sample();
        assert!(question.is_correct(1));
        assert!(!question.is_correct(0));
    }

    #[test]
    fn question_id_display_and_parse() {
        let id = QuestionId::new(42);
        assert_eq!(id.to_string(), "42");
        let parsed: QuestionId = "42".parse().unwrap();
        assert_eq!(parsed, id);
        assert!("nope".parse::<QuestionId>().is_err());
    }
}
