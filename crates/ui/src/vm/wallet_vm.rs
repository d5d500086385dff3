use bitkids_core::model::Language;
use bitkids_core::progression::{current_level, next_level, progress_fraction};

#[derive(Clone, Debug, PartialEq)]
pub struct LevelVm {
    pub icon: &'static str,
    pub name: &'static str,
    pub message: &'static str,
    /// Progress towards the next level, 0..=100.
    pub progress_percent: u8,
    /// Absent once the top level is reached.
    pub next_name: Option<&'static str>,
    pub sats_to_next: Option<u64>,
}

/// Map a balance onto the shipped level ladder for display.
///
/// Returns `None` only if the ladder were empty, which the catalog
/// tests rule out.
#[must_use]
pub fn map_level(balance: u64, language: Language) -> Option<LevelVm> {
    let current = current_level(balance, content::LEVELS)?;
    let next = next_level(balance, content::LEVELS)?;

    let fraction = progress_fraction(balance, current, next);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let progress_percent = (fraction * 100.0).round() as u8;

    let at_top = next.threshold == current.threshold;
    Some(LevelVm {
        icon: current.icon,
        name: *current.name.get(language),
        message: *current.message.get(language),
        progress_percent,
        next_name: (!at_top).then(|| *next.name.get(language)),
        sats_to_next: (!at_top).then(|| next.threshold.saturating_sub(balance)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_piggy_sits_on_the_first_level() {
        let level = map_level(0, Language::En).unwrap();
        assert_eq!(level.progress_percent, 0);
        assert!(level.next_name.is_some());
        assert_eq!(level.sats_to_next, Some(100));
    }

    #[test]
    fn mid_ladder_balance_reports_partial_progress() {
        // 300 sats: level starts at 100, next at 500.
        let level = map_level(300, Language::De).unwrap();
        assert_eq!(level.progress_percent, 50);
        assert_eq!(level.sats_to_next, Some(200));
    }

    #[test]
    fn top_level_has_no_next() {
        let level = map_level(2_000_000, Language::Es).unwrap();
        assert_eq!(level.progress_percent, 100);
        assert!(level.next_name.is_none());
        assert!(level.sats_to_next.is_none());
    }
}
