use bitkids_core::model::{Difficulty, Language};
use content::strings::QuizStrings;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{OptionState, QuizPhase, QuizVm};

const QUESTION_COUNTS: [usize; 3] = [5, 10, 15];

fn option_class(state: OptionState) -> &'static str {
    match state {
        OptionState::Idle => "",
        OptionState::Selected => "selected",
        OptionState::Correct => "correct",
        OptionState::Wrong => "wrong",
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let language = use_context::<Signal<Language>>();
    let clock = ctx.clock();
    let mut vm = use_signal(|| QuizVm::new(ctx.quiz()));
    let mut difficulty = use_signal(|| Difficulty::Easy);
    let mut requested = use_signal(|| QUESTION_COUNTS[0]);

    let strings = QuizStrings::get(language());
    let phase = vm.read().phase();
    let question = vm.read().question(language());
    let summary = vm.read().summary(language());

    let body = match (phase, question, summary) {
        (QuizPhase::Setup, _, _) => rsx! {
            p { class: "view-subtitle", "{strings.quiz_subtitle}" }
            section { class: "quiz-setup",
                h3 { "{strings.difficulty_title}" }
                div { class: "choice-row",
                    for level in Difficulty::ALL {
                        button {
                            class: if difficulty() == level { "choice selected" } else { "choice" },
                            onclick: move |_| difficulty.set(level),
                            {match level {
                                Difficulty::Easy => strings.easy,
                                Difficulty::Medium => strings.medium,
                                Difficulty::Hard => strings.hard,
                            }}
                        }
                    }
                }
                h3 { "{strings.question_count_title}" }
                div { class: "choice-row",
                    for count in QUESTION_COUNTS {
                        button {
                            class: if requested() == count { "choice selected" } else { "choice" },
                            onclick: move |_| requested.set(count),
                            "{count}"
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| vm.write().start(difficulty(), requested()),
                    "{strings.start_quiz}"
                }
            }
        },
        (QuizPhase::Question, Some(card), _) => {
            let percent = card.number * 100 / card.total;
            let advance_label = if card.is_last {
                strings.show_result
            } else {
                strings.next_question
            };
            let verdict = card.verdict.clone();
            rsx! {
                div { class: "quiz-progress",
                    span { "{strings.question} {card.number} {strings.of} {card.total}" }
                    span { class: "quiz-score", "{card.score} {strings.points}" }
                }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {percent}%" }
                }
                h3 { class: "quiz-prompt", "{card.prompt}" }
                div { class: "quiz-options",
                    for (index, option) in card.options.clone().into_iter().enumerate() {
                        button {
                            class: "option {option_class(option.state)}",
                            onclick: move |_| vm.write().select(index),
                            "{option.label}"
                        }
                    }
                }
                match verdict {
                    Some(verdict) => rsx! {
                        div {
                            class: if verdict.correct { "verdict correct" } else { "verdict wrong" },
                            if verdict.celebrate {
                                span { class: "confetti", "🎉" }
                            }
                            h4 { "{verdict.header}" }
                            p { "{verdict.explanation}" }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| vm.write().advance(clock.now()),
                            "{advance_label}"
                        }
                    },
                    None => rsx! {
                        button {
                            class: "btn btn-primary",
                            disabled: !card.can_check,
                            onclick: move |_| vm.write().check(),
                            "{strings.check_answer}"
                        }
                    },
                }
            }
        }
        (QuizPhase::Completed, _, Some(summary)) => {
            let restart_label = if summary.empty {
                strings.keep_learning
            } else {
                strings.new_quiz
            };
            rsx! {
                div { class: "quiz-summary",
                    span { class: "summary-icon", "🏆" }
                    h3 { "{summary.title}" }
                    p { class: "summary-score", "{summary.score_line}" }
                    p { class: "summary-feedback", "{summary.feedback}" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| vm.write().restart(),
                        "{restart_label}"
                    }
                }
            }
        }
        _ => rsx! {},
    };

    rsx! {
        div { class: "page quiz-page",
            h2 { class: "view-title", "{strings.quiz_title}" }
            {body}
        }
    }
}
