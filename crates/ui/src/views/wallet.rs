use std::time::Duration;

use bitkids_core::model::Language;
use content::strings::WalletStrings;
use dioxus::prelude::*;
use services::{Wallet, WalletState};

use crate::context::AppContext;
use crate::vm::map_level;

const TICK_INTERVAL: Duration = Duration::from_secs(5);
const CONNECT_DELAY: Duration = Duration::from_millis(1_500);

/// Floating piggy-bank widget, rendered once at the layout level.
#[component]
pub fn PiggyWallet() -> Element {
    let ctx = use_context::<AppContext>();
    let language = use_context::<Signal<Language>>();
    let mut open = use_signal(|| false);
    let mut wallet = use_signal(|| Wallet::simulated(ctx.clock()));

    // Savings trickle in while the piggy stays connected.
    use_future(move || async move {
        loop {
            tokio::time::sleep(TICK_INTERVAL).await;
            wallet.write().tick();
        }
    });

    let strings = WalletStrings::get(language());
    let state = wallet.read().state();
    let level = match state {
        WalletState::Connected { balance, .. } => map_level(balance, language()),
        WalletState::Disconnected | WalletState::Connecting => None,
    };

    rsx! {
        div { class: "piggy",
            button {
                class: "piggy-toggle",
                onclick: move |_| {
                    let was_open = open();
                    open.set(!was_open);
                },
                "🐷"
            }
            if open() {
                div { class: "piggy-panel",
                    h3 { "{strings.my_piggy_bank}" }
                    span { class: "piggy-subtitle", "{strings.savings_adventure}" }
                    match state {
                        WalletState::Disconnected => rsx! {
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| {
                                    wallet.write().begin_connect();
                                    spawn(async move {
                                        tokio::time::sleep(CONNECT_DELAY).await;
                                        wallet.write().complete_connect();
                                    });
                                },
                                "{strings.connect}"
                            }
                        },
                        WalletState::Connecting => rsx! {
                            p { class: "piggy-connecting", "{strings.connecting}" }
                        },
                        WalletState::Connected { balance, .. } => rsx! {
                            p { class: "piggy-connected", "{strings.connected}" }
                            div { class: "piggy-balance",
                                span { class: "piggy-balance-label", "{strings.your_balance}" }
                                span { class: "piggy-balance-value", "{balance} {strings.sats}" }
                            }
                            match level.clone() {
                                Some(level) => rsx! {
                                    div { class: "piggy-level",
                                        span { class: "level-icon", "{level.icon}" }
                                        h4 { "{level.name}" }
                                        p { "{level.message}" }
                                        div { class: "progress-track",
                                            div {
                                                class: "progress-fill",
                                                style: "width: {level.progress_percent}%",
                                            }
                                        }
                                        match (level.next_name, level.sats_to_next) {
                                            (Some(next_name), Some(missing)) => rsx! {
                                                p { class: "level-next",
                                                    "{strings.next_level}: {next_name} ({missing} {strings.sats})"
                                                }
                                            },
                                            _ => rsx! {},
                                        }
                                    }
                                },
                                None => rsx! {},
                            }
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| wallet.write().disconnect(),
                                "{strings.disconnect}"
                            }
                        },
                    }
                }
            }
        }
    }
}
