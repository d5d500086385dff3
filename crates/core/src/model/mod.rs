mod feedback;
mod language;
mod level;
mod question;

pub use feedback::FeedbackTier;
pub use language::{Language, Localized, ParseLanguageError};
pub use level::{LevelEntry, LevelTableError, validate_table};
pub use question::{
    Difficulty, OPTION_COUNT, ParseQuestionIdError, Question, QuestionError, QuestionId,
};
