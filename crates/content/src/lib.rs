//! Static trusted content: question catalog, level table, facts gallery
//! and UI string tables.
//!
//! Everything here is `const` data defined at compile time. There is no
//! loading step and nothing is ever mutated; the integrity tests below
//! stand in for the validation a dynamic data source would need.

#![forbid(unsafe_code)]

mod facts;
mod levels;
mod questions;
pub mod strings;

pub use facts::{FACTS, Fact};
pub use levels::LEVELS;
pub use questions::CATALOG;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use bitkids_core::model::{Difficulty, validate_table};

    use super::*;

    #[test]
    fn catalog_entries_are_valid() {
        for question in CATALOG {
            question
                .validate()
                .unwrap_or_else(|err| panic!("invalid catalog entry: {err}"));
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut seen = HashSet::new();
        for question in CATALOG {
            assert!(seen.insert(question.id), "duplicate id {}", question.id);
        }
    }

    #[test]
    fn every_difficulty_is_represented() {
        for difficulty in Difficulty::ALL {
            let count = CATALOG
                .iter()
                .filter(|question| question.difficulty == difficulty)
                .count();
            assert!(count > 0, "no {difficulty} questions in the catalog");
        }
    }

    #[test]
    fn level_table_is_well_formed() {
        validate_table(LEVELS).expect("level table invariants");
        assert_eq!(LEVELS.len(), 13);
        assert_eq!(LEVELS.last().map(|entry| entry.threshold), Some(1_000_000));
    }

    #[test]
    fn facts_have_content_in_every_language() {
        assert!(!FACTS.is_empty());
        for fact in FACTS {
            for language in bitkids_core::model::Language::ALL {
                assert!(!fact.title.get(language).is_empty());
                assert!(!fact.description.get(language).is_empty());
            }
        }
    }
}
