//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the quiz session tracker.
///
/// These are contract violations by the caller, not user-facing
/// failures; the UI keeps buttons disabled so they stay unreachable in
/// practice, and the tracker rejects them without touching its state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("option index {0} is out of range")]
    InvalidOption(usize),

    #[error("no option selected yet")]
    NoSelection,

    #[error("current question has not been answered yet")]
    NotAnswered,

    #[error("quiz session is already completed")]
    Completed,
}
