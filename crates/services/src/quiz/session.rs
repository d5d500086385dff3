use chrono::{DateTime, Utc};

use bitkids_core::model::{FeedbackTier, OPTION_COUNT, Question, QuestionId};

use super::progress::QuizProgress;
use crate::error::QuizError;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Outcome of checking the current question's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedAnswer {
    pub correct: bool,
    /// True only on the first check of a correct answer, so the UI can
    /// fire its celebration exactly once per question.
    pub celebrate: bool,
}

/// Outcome of advancing past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Next,
    Completed,
}

/// Record of one answered question within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: QuestionId,
    pub selected: usize,
    pub correct: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory tracker for one run through a selected question list.
///
/// The question list is fixed at construction. The tracker steps through
/// it with a per-question sub-cycle (select an option, check it, advance)
/// and counts correct answers. Invalid transitions are rejected with
/// [`QuizError`] and leave the state untouched.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    selected_option: Option<usize>,
    answered: Option<CheckedAnswer>,
    results: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a session over an already-selected question list.
    ///
    /// `started_at` should come from the services layer clock. An empty
    /// list yields a session that is complete from the start, so nothing
    /// ever indexes into it.
    #[must_use]
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Self {
        let completed_at = questions.is_empty().then_some(started_at);
        Self {
            questions,
            current: 0,
            selected_option: None,
            answered: None,
            results: Vec::new(),
            started_at,
            completed_at,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Number of correctly answered questions so far.
    ///
    /// Derived from the answer records, so it can never double-count.
    #[must_use]
    pub fn score(&self) -> usize {
        self.results.iter().filter(|record| record.correct).count()
    }

    /// 0-based index of the question currently shown.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_complete() {
            return None;
        }
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    /// True once the current question has been checked.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered.is_some()
    }

    /// The answers recorded so far, in question order.
    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.results
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total(),
            answered: self.results.len(),
            score: self.score(),
            is_complete: self.is_complete(),
        }
    }

    /// Feedback tier for the final score.
    #[must_use]
    pub fn feedback_tier(&self) -> FeedbackTier {
        FeedbackTier::for_score(self.score(), self.total())
    }

    /// Select an answer option for the current question.
    ///
    /// Selecting again replaces the previous choice. Once the question
    /// has been checked the call is ignored, so a stale click cannot
    /// disturb the recorded answer.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after the session finished and
    /// `QuizError::InvalidOption` for an out-of-range index.
    pub fn select_option(&mut self, index: usize) -> Result<(), QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        if index >= OPTION_COUNT {
            return Err(QuizError::InvalidOption(index));
        }
        if self.answered.is_some() {
            return Ok(());
        }

        self.selected_option = Some(index);
        Ok(())
    }

    /// Check the selected option against the current question.
    ///
    /// Idempotent: a repeated check returns the recorded outcome with
    /// `celebrate` cleared and does not change the score.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after the session finished and
    /// `QuizError::NoSelection` when no option has been selected.
    pub fn check_answer(&mut self) -> Result<CheckedAnswer, QuizError> {
        if let Some(checked) = self.answered {
            return Ok(CheckedAnswer {
                celebrate: false,
                ..checked
            });
        }

        let Some(question) = self.current_question().copied() else {
            return Err(QuizError::Completed);
        };
        let Some(selected) = self.selected_option else {
            return Err(QuizError::NoSelection);
        };

        let correct = question.is_correct(selected);
        self.results.push(AnswerRecord {
            question_id: question.id,
            selected,
            correct,
        });

        let checked = CheckedAnswer {
            correct,
            celebrate: correct,
        };
        self.answered = Some(checked);
        Ok(checked)
    }

    /// Move past the current, answered question.
    ///
    /// On the last question this completes the session; otherwise the
    /// per-question sub-cycle resets for the next one. `now` should come
    /// from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after the session finished and
    /// `QuizError::NotAnswered` when the current question has not been
    /// checked yet.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<AdvanceOutcome, QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        if self.answered.is_none() {
            return Err(QuizError::NotAnswered);
        }

        self.selected_option = None;
        self.answered = None;

        if self.current + 1 >= self.questions.len() {
            self.completed_at = Some(now);
            return Ok(AdvanceOutcome::Completed);
        }

        self.current += 1;
        Ok(AdvanceOutcome::Next)
    }
}

#[cfg(test)]
mod tests {
    use bitkids_core::model::{Difficulty, Localized};
    use bitkids_core::time::fixed_now;

    use super::*;

    fn question(id: u32, correct: usize) -> Question {
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
            correct_answer: correct,
            explanation: Localized {
                de: "!",
                en: "!",
                es: "!",
            },
            difficulty: Difficulty::Easy,
        }
    }

    fn session(count: u32) -> QuizSession {
        let questions = (1..=count).map(|id| question(id, 0)).collect();
        QuizSession::new(questions, fixed_now())
    }

    #[test]
    fn empty_session_is_complete_immediately() {
        let session = QuizSession::new(Vec::new(), fixed_now());
        assert!(session.is_complete());
        assert!(session.current_question().is_none());
        assert_eq!(session.score(), 0);
        assert_eq!(session.feedback_tier(), FeedbackTier::KeepGoing);
    }

    #[test]
    fn correct_answer_scores_once() {
        let mut session = session(1);
        session.select_option(0).unwrap();
        let checked = session.check_answer().unwrap();
        assert!(checked.correct);
        assert!(checked.celebrate);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn repeated_check_does_not_change_the_score() {
        let mut session = session(1);
        session.select_option(0).unwrap();
        session.check_answer().unwrap();

        let again = session.check_answer().unwrap();
        assert!(again.correct);
        assert!(!again.celebrate, "celebration must fire only once");
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn selection_after_answering_is_ignored() {
        let mut session = session(1);
        session.select_option(1).unwrap();
        let checked = session.check_answer().unwrap();
        assert!(!checked.correct);

        session.select_option(0).unwrap();
        assert_eq!(session.selected_option(), Some(1));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let mut session = session(1);
        assert_eq!(session.select_option(4), Err(QuizError::InvalidOption(4)));
        assert_eq!(session.selected_option(), None);
    }

    #[test]
    fn check_without_selection_is_rejected() {
        let mut session = session(1);
        assert_eq!(session.check_answer(), Err(QuizError::NoSelection));
    }

    #[test]
    fn advance_before_checking_is_rejected() {
        let mut session = session(2);
        assert_eq!(session.advance(fixed_now()), Err(QuizError::NotAnswered));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn advancing_the_last_question_completes_the_session() {
        let mut session = session(1);
        session.select_option(0).unwrap();
        session.check_answer().unwrap();

        let now = fixed_now();
        assert_eq!(session.advance(now), Ok(AdvanceOutcome::Completed));
        assert!(session.is_complete());
        assert_eq!(session.completed_at(), Some(now));

        // No further interaction is valid.
        assert_eq!(session.select_option(0), Err(QuizError::Completed));
        assert_eq!(session.check_answer(), Err(QuizError::Completed));
        assert_eq!(session.advance(now), Err(QuizError::Completed));
    }

    #[test]
    fn five_question_run_scores_three() {
        // Questions 1..=5, correct answer is always option 0. Answer the
        // first three correctly and the last two wrong.
        let mut session = session(5);
        for index in 0..5 {
            let pick = if index < 3 { 0 } else { 1 };
            session.select_option(pick).unwrap();
            let checked = session.check_answer().unwrap();
            assert_eq!(checked.correct, index < 3);
            session.advance(fixed_now()).unwrap();
        }

        assert!(session.is_complete());
        assert_eq!(session.score(), 3);
        assert_eq!(session.progress().answered, 5);
        assert_eq!(session.feedback_tier(), FeedbackTier::Good);

        // The score is exactly the count of answers whose selection hit
        // the correct index.
        let matching = session
            .answers()
            .iter()
            .filter(|record| record.selected == 0)
            .count();
        assert_eq!(session.score(), matching);
    }

    #[test]
    fn score_never_exceeds_answered_count() {
        let mut session = session(3);
        for _ in 0..3 {
            session.select_option(0).unwrap();
            session.check_answer().unwrap();
            let answered = session.progress().answered;
            assert!(session.score() <= answered);
            session.advance(fixed_now()).unwrap();
        }
    }
}
