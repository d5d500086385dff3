use std::sync::Arc;

use bitkids_core::model::Language;
use services::{Clock, QuizService};

pub trait UiApp: Send + Sync {
    fn initial_language(&self) -> Language;

    fn quiz(&self) -> QuizService;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    initial_language: Language,
    quiz: QuizService,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_language: app.initial_language(),
            quiz: app.quiz(),
            clock: app.clock(),
        }
    }

    /// The language selected at startup. The live selection is a
    /// `Signal<Language>` provided by the layout.
    #[must_use]
    pub fn initial_language(&self) -> Language {
        self.initial_language
    }

    #[must_use]
    pub fn quiz(&self) -> QuizService {
        self.quiz
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
