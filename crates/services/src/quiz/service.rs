use bitkids_core::model::Difficulty;
use tracing::debug;

use super::select::select_questions;
use super::session::QuizSession;
use crate::Clock;

/// Orchestrates quiz session starts.
///
/// Holds the services layer clock so sessions get deterministic
/// timestamps in tests. Selection is re-randomized on every start.
#[derive(Clone, Copy)]
pub struct QuizService {
    clock: Clock,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Start a new session for the given difficulty and question count.
    ///
    /// A short or empty selection still yields a valid session; an empty
    /// one is complete from the start.
    #[must_use]
    pub fn start_session(&self, difficulty: Difficulty, requested: usize) -> QuizSession {
        let questions = select_questions(difficulty, requested);
        debug!(
            difficulty = %difficulty,
            requested,
            selected = questions.len(),
            "starting quiz session"
        );
        QuizSession::new(questions, self.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use bitkids_core::time::{fixed_clock, fixed_now};

    use super::*;

    #[test]
    fn started_session_uses_the_service_clock() {
        let service = QuizService::new(fixed_clock());
        let session = service.start_session(Difficulty::Easy, 5);
        assert_eq!(session.started_at(), fixed_now());
        assert_eq!(session.total(), 5);
        assert!(!session.is_complete());
    }
}
