use bitkids_core::model::Language;
use content::strings::FactsStrings;
use dioxus::prelude::*;

#[component]
pub fn FactsView() -> Element {
    let language = use_context::<Signal<Language>>();
    let mut open_fact = use_signal(|| None::<usize>);
    let strings = FactsStrings::get(language());

    rsx! {
        div { class: "page facts-page",
            h2 { class: "view-title", "{strings.title}" }
            div { class: "facts-grid",
                for (index, fact) in content::FACTS.iter().enumerate() {
                    div {
                        class: if open_fact() == Some(index) { "fact-card open" } else { "fact-card" },
                        onclick: move |_| {
                            let next = if open_fact() == Some(index) {
                                None
                            } else {
                                Some(index)
                            };
                            open_fact.set(next);
                        },
                        span { class: "fact-icon", "{fact.icon}" }
                        h3 { "{fact.title.get(language())}" }
                        if open_fact() == Some(index) {
                            p { "{fact.description.get(language())}" }
                        }
                    }
                }
            }
            div { class: "fact-callout",
                h3 { "{strings.did_you_know}" }
                p { "{strings.did_you_know_text}" }
            }
        }
    }
}
