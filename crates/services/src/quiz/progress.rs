/// Aggregated view of quiz session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub score: usize,
    pub is_complete: bool,
}
