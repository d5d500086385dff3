mod progress;
mod select;
mod service;
mod session;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use progress::QuizProgress;
pub use select::{select_from, select_questions};
pub use service::QuizService;
pub use session::{AdvanceOutcome, AnswerRecord, CheckedAnswer, QuizSession};
