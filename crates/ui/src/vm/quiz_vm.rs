use chrono::{DateTime, Utc};

use bitkids_core::model::{Difficulty, Language};
use content::strings::{QuizStrings, fill};
use services::{QuizService, QuizSession};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Setup,
    Question,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    Correct,
    Wrong,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionVm {
    pub label: &'static str,
    pub state: OptionState,
}

/// Verdict shown after the current answer has been checked.
#[derive(Clone, Debug, PartialEq)]
pub struct VerdictVm {
    pub correct: bool,
    /// True only immediately after a correct first check.
    pub celebrate: bool,
    pub header: &'static str,
    pub explanation: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    /// 1-based position within the session.
    pub number: usize,
    pub total: usize,
    pub score: usize,
    pub prompt: &'static str,
    pub options: Vec<OptionVm>,
    pub verdict: Option<VerdictVm>,
    pub can_check: bool,
    pub is_last: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryVm {
    pub title: &'static str,
    pub score_line: String,
    pub feedback: &'static str,
    /// Set when the selection produced no questions at all.
    pub empty: bool,
}

/// Drives one quiz screen through setup, questions and the summary.
///
/// The vm owns the session; views keep it in a `Signal` and rebuild
/// their display structs from it on every render.
pub struct QuizVm {
    service: QuizService,
    session: Option<QuizSession>,
    celebrate: bool,
}

impl QuizVm {
    #[must_use]
    pub fn new(service: QuizService) -> Self {
        Self {
            service,
            session: None,
            celebrate: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match &self.session {
            None => QuizPhase::Setup,
            Some(session) if session.is_complete() => QuizPhase::Completed,
            Some(_) => QuizPhase::Question,
        }
    }

    pub fn start(&mut self, difficulty: Difficulty, requested: usize) {
        self.session = Some(self.service.start_session(difficulty, requested));
        self.celebrate = false;
    }

    /// Back to the setup screen for a fresh round.
    pub fn restart(&mut self) {
        self.session = None;
        self.celebrate = false;
    }

    pub fn select(&mut self, index: usize) {
        if let Some(session) = &mut self.session {
            // Stale clicks after checking or completion are ignored.
            session.select_option(index).ok();
        }
    }

    pub fn check(&mut self) {
        if let Some(session) = &mut self.session
            && let Ok(checked) = session.check_answer()
        {
            self.celebrate = checked.celebrate;
        }
    }

    pub fn advance(&mut self, now: DateTime<Utc>) {
        if let Some(session) = &mut self.session {
            session.advance(now).ok();
            self.celebrate = false;
        }
    }

    #[must_use]
    pub fn question(&self, language: Language) -> Option<QuestionVm> {
        let session = self.session.as_ref()?;
        let question = session.current_question()?;
        let strings = QuizStrings::get(language);

        let selected = session.selected_option();
        let answered = session.is_answered();
        let correct_answer = question.correct_answer;

        let labels = question.options.get(language);
        let options = labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let state = if answered {
                    if index == correct_answer {
                        OptionState::Correct
                    } else if selected == Some(index) {
                        OptionState::Wrong
                    } else {
                        OptionState::Idle
                    }
                } else if selected == Some(index) {
                    OptionState::Selected
                } else {
                    OptionState::Idle
                };
                OptionVm { label: *label, state }
            })
            .collect();

        let verdict = answered.then(|| {
            let correct = session
                .answers()
                .last()
                .map(|record| record.correct)
                .unwrap_or_default();
            VerdictVm {
                correct,
                celebrate: self.celebrate,
                header: if correct {
                    strings.correct_header
                } else {
                    strings.incorrect_header
                },
                explanation: *question.explanation.get(language),
            }
        });

        Some(QuestionVm {
            number: session.current_index() + 1,
            total: session.total(),
            score: session.score(),
            prompt: *question.prompt.get(language),
            options,
            verdict,
            can_check: selected.is_some() && !answered,
            is_last: session.current_index() + 1 == session.total(),
        })
    }

    #[must_use]
    pub fn summary(&self, language: Language) -> Option<SummaryVm> {
        let session = self.session.as_ref()?;
        if !session.is_complete() {
            return None;
        }
        let strings = QuizStrings::get(language);
        let empty = session.total() == 0;

        let score_line = if empty {
            strings.no_questions.to_string()
        } else {
            fill(
                strings.correct_answers,
                &[
                    ("score", session.score().to_string()),
                    ("total", session.total().to_string()),
                ],
            )
        };

        Some(SummaryVm {
            title: strings.quiz_completed,
            score_line,
            feedback: strings.feedback(session.feedback_tier()),
            empty,
        })
    }
}

#[cfg(test)]
mod tests {
    use bitkids_core::model::OPTION_COUNT;
    use bitkids_core::time::{fixed_clock, fixed_now};

    use super::*;

    fn vm_with_session() -> QuizVm {
        let mut vm = QuizVm::new(QuizService::new(fixed_clock()));
        vm.start(Difficulty::Easy, 3);
        vm
    }

    #[test]
    fn phase_walks_setup_question_completed() {
        let mut vm = QuizVm::new(QuizService::new(fixed_clock()));
        assert_eq!(vm.phase(), QuizPhase::Setup);

        vm.start(Difficulty::Easy, 1);
        assert_eq!(vm.phase(), QuizPhase::Question);

        vm.select(0);
        vm.check();
        vm.advance(fixed_now());
        assert_eq!(vm.phase(), QuizPhase::Completed);

        vm.restart();
        assert_eq!(vm.phase(), QuizPhase::Setup);
    }

    #[test]
    fn question_card_reflects_selection_and_verdict() {
        let mut vm = vm_with_session();
        let card = vm.question(Language::De).unwrap();
        assert_eq!(card.number, 1);
        assert_eq!(card.total, 3);
        assert_eq!(card.options.len(), OPTION_COUNT);
        assert!(!card.can_check);
        assert!(card.verdict.is_none());

        vm.select(2);
        let card = vm.question(Language::De).unwrap();
        assert_eq!(card.options[2].state, OptionState::Selected);
        assert!(card.can_check);

        vm.check();
        let card = vm.question(Language::De).unwrap();
        let verdict = card.verdict.unwrap();
        assert!(!card.can_check);
        assert_eq!(verdict.correct, verdict.celebrate);
        // The correct option is always highlighted once checked.
        let correct_marks = card
            .options
            .iter()
            .filter(|option| option.state == OptionState::Correct)
            .count();
        assert_eq!(correct_marks, 1);
    }

    #[test]
    fn summary_appears_only_after_completion() {
        let mut vm = vm_with_session();
        assert!(vm.summary(Language::En).is_none());

        for _ in 0..3 {
            vm.select(0);
            vm.check();
            vm.advance(fixed_now());
        }

        let summary = vm.summary(Language::En).unwrap();
        assert!(!summary.empty);
        assert!(summary.score_line.contains("3 questions"));
        assert!(!summary.feedback.is_empty());
    }

    #[test]
    fn empty_selection_summary_uses_the_no_questions_line() {
        let mut vm = QuizVm::new(QuizService::new(fixed_clock()));
        vm.start(Difficulty::Easy, 0);
        assert_eq!(vm.phase(), QuizPhase::Completed);

        let summary = vm.summary(Language::En).unwrap();
        assert!(summary.empty);
        assert_eq!(
            summary.score_line,
            "There are no questions for this selection right now."
        );
    }
}
