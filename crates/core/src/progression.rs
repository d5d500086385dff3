//! Pure lookups over the savings level table.
//!
//! The table is sorted strictly ascending by threshold with the first
//! entry at 0 (see `model::validate_table`). The balance feeding these
//! functions comes from a randomized simulator and is not guaranteed
//! monotonic, so the progress fraction clamps defensively.

use crate::model::LevelEntry;

/// The entry with the greatest threshold not exceeding `balance`.
///
/// Returns `None` only for an empty table; a valid table starts at
/// threshold 0 and therefore always matches.
#[must_use]
pub fn current_level(balance: u64, table: &[LevelEntry]) -> Option<&LevelEntry> {
    table
        .iter()
        .rev()
        .find(|entry| balance >= entry.threshold)
        .or_else(|| table.first())
}

/// The first entry with a threshold above `balance`, or the last entry
/// when the balance has reached the top of the table.
///
/// Returns `None` only for an empty table.
#[must_use]
pub fn next_level(balance: u64, table: &[LevelEntry]) -> Option<&LevelEntry> {
    table
        .iter()
        .find(|entry| balance < entry.threshold)
        .or_else(|| table.last())
}

/// Linear progress between the current and next level, in `[0.0, 1.0]`.
///
/// At the max tier (`current == next`) the progress is complete.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_fraction(balance: u64, current: &LevelEntry, next: &LevelEntry) -> f64 {
    if current.threshold == next.threshold {
        return 1.0;
    }

    let span = next.threshold.saturating_sub(current.threshold);
    let gained = balance.saturating_sub(current.threshold);
    let fraction = gained as f64 / span as f64;
    fraction.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Localized;

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

    fn table() -> [LevelEntry; 3] {
        [entry(0), entry(100), entry(500)]
    }

    #[test]
    fn zero_balance_sits_on_first_level() {
        let table = table();
        assert_eq!(current_level(0, &table).unwrap().threshold, 0);
        assert_eq!(next_level(0, &table).unwrap().threshold, 100);
    }

    #[test]
    fn balance_between_thresholds() {
        let table = table();
        let current = current_level(250, &table).unwrap();
        let next = next_level(250, &table).unwrap();
        assert_eq!(current.threshold, 100);
        assert_eq!(next.threshold, 500);

        let fraction = progress_fraction(250, current, next);
        assert!((fraction - 0.375).abs() < f64::EPSILON);
    }

    #[test]
    fn balance_at_or_past_the_top_is_max_tier() {
        let table = table();
        for balance in [500, 501, 1_000_000] {
            let current = current_level(balance, &table).unwrap();
            let next = next_level(balance, &table).unwrap();
            assert_eq!(current.threshold, 500);
            assert_eq!(next.threshold, 500);
            assert!((progress_fraction(balance, current, next) - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn exact_threshold_belongs_to_the_reached_level() {
        let table = table();
        assert_eq!(current_level(100, &table).unwrap().threshold, 100);
        assert_eq!(next_level(100, &table).unwrap().threshold, 500);
    }

    #[test]
    fn fraction_is_clamped_for_non_monotonic_balances() {
        let table = table();
        let current = &table[1];
        let next = &table[2];
        // Balance dipped below the current threshold after a level was reached.
        assert!(progress_fraction(50, current, next).abs() < f64::EPSILON);
        // Balance above the next threshold before the lookup caught up.
        assert!((progress_fraction(900, current, next) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_table_yields_none() {
        assert!(current_level(10, &[]).is_none());
        assert!(next_level(10, &[]).is_none());
    }
}
