use rand::rng;
use rand::seq::SliceRandom;

use bitkids_core::model::{Difficulty, Question};

/// Pick a session's worth of questions from the shipped catalog.
///
/// Filters by difficulty, shuffles uniformly and truncates to
/// `min(requested, available)`. Reshuffles on every call; there is no
/// caching. A short or empty result is valid, never an error.
#[must_use]
pub fn select_questions(difficulty: Difficulty, requested: usize) -> Vec<Question> {
    select_from(content::CATALOG, difficulty, requested)
}

/// Same as [`select_questions`], over an explicit catalog slice.
#[must_use]
pub fn select_from(catalog: &[Question], difficulty: Difficulty, requested: usize) -> Vec<Question> {
    let mut picked: Vec<Question> = catalog
        .iter()
        .filter(|question| question.difficulty == difficulty)
        .copied()
        .collect();

    picked.shuffle(&mut rng());
    picked.truncate(requested);
    picked
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use bitkids_core::model::{Localized, QuestionId};

    use super::*;

    fn question(id: u32, difficulty: Difficulty) -> Question {
        Question {
            id: QuestionId::new(id),
            prompt: Localized {
                de: "?",
                en: "?",
                es: "?",
            },
            options: Localized {
                de: ["a", "b", "c", "d"],
                en: ["a", "b", "c", "d"],
                es: ["a", "b", "c", "d"],
            },
            correct_answer: 0,
            explanation: Localized {
                de: "!",
                en: "!",
                es: "!",
            },
            difficulty,
        }
    }

    fn catalog() -> Vec<Question> {
        vec![
            question(1, Difficulty::Easy),
            question(2, Difficulty::Easy),
            question(3, Difficulty::Easy),
            question(4, Difficulty::Medium),
            question(5, Difficulty::Hard),
        ]
    }

    #[test]
    fn truncates_to_the_requested_count() {
        let selected = select_from(&catalog(), Difficulty::Easy, 2);
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|q| q.difficulty == Difficulty::Easy));
    }

    #[test]
    fn short_catalog_returns_all_available() {
        // Three easy questions exist; asking for ten yields all three.
        let selected = select_from(&catalog(), Difficulty::Easy, 10);
        assert_eq!(selected.len(), 3);

        let ids: HashSet<_> = selected.iter().map(|q| q.id).collect();
        let expected: HashSet<_> = [1, 2, 3].into_iter().map(QuestionId::new).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn no_duplicates_and_matching_difficulty() {
        for _ in 0..20 {
            let selected = select_from(&catalog(), Difficulty::Easy, 3);
            let ids: HashSet<_> = selected.iter().map(|q| q.id).collect();
            assert_eq!(ids.len(), selected.len());
            assert!(selected.iter().all(|q| q.difficulty == Difficulty::Easy));
        }
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let empty: Vec<Question> = Vec::new();
        assert!(select_from(&empty, Difficulty::Hard, 5).is_empty());
    }

    #[test]
    fn selection_from_the_shipped_catalog_respects_the_count() {
        for difficulty in Difficulty::ALL {
            let selected = select_questions(difficulty, 5);
            assert_eq!(selected.len(), 5);
            assert!(selected.iter().all(|q| q.difficulty == difficulty));
        }
    }
}
