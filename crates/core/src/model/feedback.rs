use serde::{Deserialize, Serialize};

/// End-of-quiz feedback tier, derived from the score percentage.
///
/// Boundaries are inclusive and checked from the top down; the first
/// match wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    /// 100%
    Perfect,
    /// >= 80%
    Great,
    /// >= 60%
    Good,
    /// >= 40%
    Okay,
    /// everything else, including the empty session
    KeepGoing,
}

impl FeedbackTier {
    /// Map a final score onto a feedback tier.
    ///
    /// A zero-question session has no percentage to speak of and lands in
    /// the encouraging bottom tier.
    #[must_use]
    pub fn for_score(score: usize, total: usize) -> Self {
        if total == 0 {
            return FeedbackTier::KeepGoing;
        }

        // Integer comparison avoids float rounding at the boundaries:
        // score/total >= p/100  <=>  score * 100 >= p * total.
        let scaled = score * 100;
        if score == total {
            FeedbackTier::Perfect
        } else if scaled >= 80 * total {
            FeedbackTier::Great
        } else if scaled >= 60 * total {
            FeedbackTier::Good
        } else if scaled >= 40 * total {
            FeedbackTier::Okay
        } else {
            FeedbackTier::KeepGoing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_requires_full_score() {
        assert_eq!(FeedbackTier::for_score(5, 5), FeedbackTier::Perfect);
        assert_eq!(FeedbackTier::for_score(4, 5), FeedbackTier::Great);
    }

    #[test]
    fn boundaries_are_inclusive() {
        // 8/10 = 80% exactly.
        assert_eq!(FeedbackTier::for_score(8, 10), FeedbackTier::Great);
        // 6/10 = 60% exactly.
        assert_eq!(FeedbackTier::for_score(6, 10), FeedbackTier::Good);
        // 4/10 = 40% exactly.
        assert_eq!(FeedbackTier::for_score(4, 10), FeedbackTier::Okay);
        assert_eq!(FeedbackTier::for_score(3, 10), FeedbackTier::KeepGoing);
    }

    #[test]
    fn odd_totals_do_not_round_up() {
        // 2/3 ≈ 66.7%: Good, not Great.
        assert_eq!(FeedbackTier::for_score(2, 3), FeedbackTier::Good);
        // 1/3 ≈ 33.3%: below every threshold.
        assert_eq!(FeedbackTier::for_score(1, 3), FeedbackTier::KeepGoing);
    }

    #[test]
    fn empty_session_lands_in_bottom_tier() {
        assert_eq!(FeedbackTier::for_score(0, 0), FeedbackTier::KeepGoing);
    }
}
