use bitkids_core::model::Language;
use content::strings::HomeStrings;
use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{FactsView, HomeView, PiggyWallet, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/facts", FactsView)] Facts {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    // The live language selection, shared by every view below the layout.
    let language = use_context_provider(|| Signal::new(ctx.initial_language()));
    let strings = HomeStrings::get(language());

    rsx! {
        div { class: "app",
            header { class: "topbar",
                span { class: "topbar-coin", "₿" }
                h1 { class: "topbar-title", "{strings.title}" }
                LanguageSelect {}
            }
            nav { class: "tabs",
                Link { to: Route::Home {}, class: "tab", "{strings.knowledge_tab}" }
                Link { to: Route::Quiz {}, class: "tab", "{strings.quiz_tab}" }
                Link { to: Route::Facts {}, class: "tab", "{strings.facts_tab}" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "footer", "{strings.footer_text}" }
            PiggyWallet {}
        }
    }
}

#[component]
fn LanguageSelect() -> Element {
    let mut language = use_context::<Signal<Language>>();

    rsx! {
        select {
            class: "language-select",
            value: "{language().code()}",
            onchange: move |event| {
                if let Ok(parsed) = event.value().parse::<Language>() {
                    language.set(parsed);
                }
            },
            option { value: "de", "🇩🇪 Deutsch" }
            option { value: "en", "🇬🇧 English" }
            option { value: "es", "🇪🇸 Español" }
        }
    }
}
