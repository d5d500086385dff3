use serde::Serialize;
use thiserror::Error;

use crate::model::language::Localized;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelTableError {
    #[error("level table is empty")]
    Empty,

    #[error("first level threshold must be 0, got {0}")]
    NonZeroFirstThreshold(u64),

    #[error("level thresholds must be strictly increasing ({previous} then {current})")]
    NotStrictlyIncreasing { previous: u64, current: u64 },
}

/// Immutable milestone in the savings adventure.
///
/// `threshold` is in sats; display metadata is localized per entry so the
/// whole table is defined once instead of three parallel tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LevelEntry {
    pub threshold: u64,
    pub icon: &'static str,
    pub name: Localized<&'static str>,
    pub message: Localized<&'static str>,
}

/// Check the ordering invariants of a level table.
///
/// Backs the content integrity tests; the progression lookups assume a
/// table that passed this check.
///
/// # Errors
///
/// Returns `LevelTableError` when the table is empty, does not start at
/// threshold 0, or is not strictly ascending.
pub fn validate_table(table: &[LevelEntry]) -> Result<(), LevelTableError> {
    let Some(first) = table.first() else {
        return Err(LevelTableError::Empty);
    };
    if first.threshold != 0 {
        return Err(LevelTableError::NonZeroFirstThreshold(first.threshold));
    }

    for pair in table.windows(2) {
        if pair[1].threshold <= pair[0].threshold {
            return Err(LevelTableError::NotStrictlyIncreasing {
                previous: pair[0].threshold,
                current: pair[1].threshold,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(threshold: u64) -> LevelEntry {
        LevelEntry {
            threshold,
            icon: "🐷",
            name: Localized {
                de: "Stufe",
                en: "Level",
                es: "Nivel",
            },
            message: Localized {
                de: "Weiter so!",
                en: "Keep going!",
                es: "¡Sigue así!",
            },
        }
    }

    #[test]
    fn valid_table_passes() {
        let table = [entry(0), entry(100), entry(500)];
        assert!(validate_table(&table).is_ok());
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(validate_table(&[]), Err(LevelTableError::Empty));
    }

    #[test]
    fn nonzero_first_threshold_is_rejected() {
        let table = [entry(10), entry(100)];
        assert_eq!(
            validate_table(&table),
            Err(LevelTableError::NonZeroFirstThreshold(10))
        );
    }

    #[test]
    fn duplicate_threshold_is_rejected() {
        let table = [entry(0), entry(100), entry(100)];
        assert_eq!(
            validate_table(&table),
            Err(LevelTableError::NotStrictlyIncreasing {
                previous: 100,
                current: 100,
            })
        );
    }
}
