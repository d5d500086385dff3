use bitkids_core::model::Language;

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_localized_hero() {
    let mut harness = setup_view_harness(ViewKind::Home, Language::De);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Willkommen in der Bitcoin-Welt!"),
        "missing hero in {html}"
    );
    assert!(html.contains("Bitcoin-Grundlagen"), "missing basics in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_respects_startup_language() {
    let mut harness = setup_view_harness(ViewKind::Home, Language::Es);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("¡Bienvenido al Mundo Bitcoin!"),
        "missing Spanish hero in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_the_setup_screen() {
    let mut harness = setup_view_harness(ViewKind::Quiz, Language::De);
    harness.rebuild();
    let html = harness.render();
    for label in ["Schwierigkeitsgrad", "Leicht", "Mittel", "Schwer"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("Quiz starten"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn facts_view_smoke_renders_every_fact() {
    let mut harness = setup_view_harness(ViewKind::Facts, Language::En);
    harness.rebuild();
    let html = harness.render();
    for fact in content::FACTS {
        assert!(
            html.contains(fact.title.en),
            "missing fact {} in {html}",
            fact.title.en
        );
    }
    assert!(html.contains("Did you know?"), "missing callout in {html}");
    // Descriptions stay hidden until a card is expanded.
    let first = &content::FACTS[0];
    assert!(!html.contains(first.description.en));
}

#[tokio::test(flavor = "current_thread")]
async fn wallet_widget_smoke_starts_collapsed() {
    let mut harness = setup_view_harness(ViewKind::Wallet, Language::En);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("🐷"), "missing piggy toggle in {html}");
    assert!(
        !html.contains("Connect Piggy"),
        "panel should start collapsed: {html}"
    );
}
