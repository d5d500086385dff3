use bitkids_core::model::Language;
use content::strings::HomeStrings;
use dioxus::prelude::*;

#[component]
pub fn HomeView() -> Element {
    let language = use_context::<Signal<Language>>();
    let strings = HomeStrings::get(language());

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                h2 { class: "hero-title", "{strings.welcome_title}" }
                p { class: "hero-subtitle", "{strings.welcome_subtitle}" }
            }

            div { class: "card-row",
                div { class: "card",
                    span { class: "card-icon", "🪄" }
                    h3 { "{strings.what_is_bitcoin_title}" }
                    p { "{strings.what_is_bitcoin_content}" }
                }
                div { class: "card",
                    span { class: "card-icon", "🐷" }
                    h3 { "{strings.digital_piggy_bank_title}" }
                    p { "{strings.digital_piggy_bank_content}" }
                }
            }

            section { class: "basics",
                h2 { "{strings.bitcoin_basics_title}" }
                div { class: "basics-section",
                    h3 { "{strings.what_is_bitcoin_section_title}" }
                    p { "{strings.what_is_bitcoin_section_content}" }
                }
                div { class: "basics-section",
                    h3 { "{strings.how_bitcoin_works_title}" }
                    p { "{strings.how_bitcoin_works_content}" }
                }
                div { class: "basics-section",
                    h3 { "{strings.why_bitcoin_special_title}" }
                    p { "{strings.why_bitcoin_special_content}" }
                }
                div { class: "basics-section",
                    h3 { "{strings.how_to_get_bitcoin_title}" }
                    p { "{strings.how_to_get_bitcoin_content}" }
                }
            }
        }
    }
}
