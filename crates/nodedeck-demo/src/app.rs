/// Demo application
///
/// A single page that exercises every card state: an interactive grid
/// wired to selection and an event log, documentation of the states
/// and semantic colors, and the preset gallery from the catalog.

use chrono::Local;
use leptos::*;
use leptos_meta::{provide_meta_context, Style, Title};

use nodedeck_ui::{catalog, CardKind, FilterCard, FILTER_CARD_CSS};

use crate::state::HarnessState;

/// Fixed line-up for the interactive grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoCard {
    pub kind: CardKind,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const DEMO_CARDS: [DemoCard; 4] = [
    DemoCard {
        kind: CardKind::Critical,
        title: "4 critical alerts",
        subtitle: "Review nodes with critical alerts",
    },
    DemoCard {
        kind: CardKind::Info,
        title: "3 new nodes",
        subtitle: "Last week",
    },
    DemoCard {
        kind: CardKind::Success,
        title: "95% CPU health",
        subtitle: "Click to improve CPU health",
    },
    DemoCard {
        kind: CardKind::Alert,
        title: "60 offline nodes",
        subtitle: "For the last week",
    },
];

/// Demo page shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = create_rw_signal(HarnessState::new());

    view! {
        <Title text="Filter Card Component Demo"/>
        <Style>{FILTER_CARD_CSS}</Style>

        <div class="demo-container">
            <header class="demo-header">
                <h1>"Filter Card Component Demo"</h1>
                <p class="demo-description">
                    "Interactive card component with hover, selected states, and ripple effects"
                </p>
            </header>

            <main class="demo-main">
                <CardsSection state=state/>
                <EventLogSection state=state/>
                <StatesSection/>
                <ColorsSection/>
                <AccessibilitySection/>
                <UsageSection/>
                <GallerySection/>
            </main>

            <footer class="demo-footer">
                <p>"Filter Card Component • Built with Rust & Leptos"</p>
            </footer>
        </div>
    }
}

/// Interactive grid wired to the shared harness state.
#[component]
fn CardsSection(state: RwSignal<HarnessState>) -> impl IntoView {
    view! {
        <section class="demo-section">
            <h2>"All Card Variants"</h2>
            <p class="section-description">
                "Click any card to select it. Click again to deselect. Hover to see the hover state."
            </p>
            <div class="cards-grid">
                {DEMO_CARDS
                    .into_iter()
                    .enumerate()
                    .map(|(index, card)| {
                        let selected =
                            Signal::derive(move || state.with(|s| s.selected() == Some(index)));
                        view! {
                            <FilterCard
                                kind=card.kind
                                title=card.title
                                subtitle=card.subtitle
                                selected=selected
                                on_click=Callback::new(move |_| {
                                    state.update(|s| {
                                        s.activate(index, card.kind, card.title, Local::now())
                                    });
                                    log::info!("activated {} card", card.kind);
                                })
                                test_id=format!("card-{}", card.kind)
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <div class="demo-controls">
                <button
                    class="demo-button"
                    disabled=move || state.with(|s| s.selected().is_none())
                    on:click=move |_| state.update(|s| s.clear_selection())
                >
                    "Clear Selection"
                </button>
            </div>
        </section>
    }
}

/// Bounded activity feed of card activations.
#[component]
fn EventLogSection(state: RwSignal<HarnessState>) -> impl IntoView {
    view! {
        <section class="demo-section">
            <div class="log-header">
                <h2>"Event Log"</h2>
                <button
                    class="demo-button-small"
                    disabled=move || state.with(|s| s.log().is_empty())
                    on:click=move |_| state.update(|s| s.clear_log())
                >
                    "Clear Log"
                </button>
            </div>
            <div class="event-log">
                <Show
                    when=move || state.with(|s| !s.log().is_empty())
                    fallback=|| {
                        view! {
                            <p class="log-empty">
                                "No events yet. Click a card to see events here."
                            </p>
                        }
                    }
                >
                    <ul class="log-list">
                        {move || {
                            state.with(|s| {
                                s.log()
                                    .iter()
                                    .map(|entry| {
                                        view! { <li class="log-item">{entry.clone()}</li> }
                                    })
                                    .collect_view()
                            })
                        }}
                    </ul>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn StatesSection() -> impl IntoView {
    view! {
        <section class="demo-section">
            <h2>"Component States"</h2>
            <div class="states-grid">
                <div class="state-card">
                    <h3>"Default State"</h3>
                    <p>"Background: "<code>"#2c2826"</code></p>
                    <p>"Initial appearance of the card"</p>
                </div>
                <div class="state-card">
                    <h3>"Hover State"</h3>
                    <p>"Background: "<code>"#332f2b"</code></p>
                    <p>"When mouse hovers over the card"</p>
                </div>
                <div class="state-card">
                    <h3>"Selected State"</h3>
                    <p>"Background: "<code>"#332f2b"</code></p>
                    <p>"Border in the card's semantic color (2px)"</p>
                    <p>"Persists after click"</p>
                </div>
                <div class="state-card">
                    <h3>"Ripple Effect"</h3>
                    <p>"White ripple with opacity"</p>
                    <p>"Triggered on click"</p>
                    <p>"600ms animation duration"</p>
                </div>
            </div>
        </section>
    }
}

const COLOR_NOTES: [(CardKind, &str, &str); 4] = [
    (
        CardKind::Critical,
        "Critical",
        "Urgent issues requiring immediate attention",
    ),
    (CardKind::Alert, "Alert", "Warnings or issues requiring review"),
    (CardKind::Info, "Info", "Informational updates or new items"),
    (CardKind::Success, "Success", "Positive metrics or healthy status"),
];

#[component]
fn ColorsSection() -> impl IntoView {
    view! {
        <section class="demo-section">
            <h2>"Semantic Colors"</h2>
            <div class="colors-grid">
                {COLOR_NOTES
                    .into_iter()
                    .map(|(kind, label, blurb)| {
                        view! {
                            <div class="color-card">
                                <div
                                    class="color-swatch"
                                    style=format!("background: {}", kind.style().accent)
                                ></div>
                                <h3>{label}</h3>
                                <p><code>{kind.style().accent}</code></p>
                                <p>{blurb}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn AccessibilitySection() -> impl IntoView {
    view! {
        <section class="demo-section">
            <h2>"Accessibility Features"</h2>
            <ul class="features-list">
                <li>
                    <strong>"Keyboard Navigation: "</strong>
                    "Use "<kbd>"Tab"</kbd>" to navigate between cards"
                </li>
                <li>
                    <strong>"Keyboard Activation: "</strong>
                    "Press "<kbd>"Enter"</kbd>" or "<kbd>"Space"</kbd>
                    " to activate a focused card"
                </li>
                <li>
                    <strong>"Focus Indicators: "</strong>
                    "A semantic-colored outline appears when a card is focused via keyboard"
                </li>
                <li>
                    <strong>"Screen Reader Support: "</strong>
                    "Cards include proper ARIA labels and roles"
                </li>
                <li>
                    <strong>"Touch Targets: "</strong>
                    "Minimum 44x44px touch targets on mobile devices"
                </li>
                <li>
                    <strong>"High Contrast Mode: "</strong>
                    "Enhanced borders in high contrast mode"
                </li>
                <li>
                    <strong>"Reduced Motion: "</strong>
                    "Respects prefers-reduced-motion preference"
                </li>
            </ul>
        </section>
    }
}

const USAGE_EXAMPLE: &str = r#"use leptos::*;
use nodedeck_ui::{CardKind, FilterCard};

#[component]
fn CriticalSummary() -> impl IntoView {
    let (selected, set_selected) = create_signal(false);

    view! {
        <FilterCard
            kind=CardKind::Critical
            title="4 critical alerts"
            subtitle="Review nodes with critical alerts"
            selected=selected
            on_click=Callback::new(move |_| set_selected.update(|s| *s = !*s))
        />
    }
}"#;

#[component]
fn UsageSection() -> impl IntoView {
    view! {
        <section class="demo-section">
            <h2>"Usage Example"</h2>
            <pre class="code-block">
                <code>{USAGE_EXAMPLE}</code>
            </pre>
        </section>
    }
}

/// Read-only rendering of every scene in the component catalog.
#[component]
fn GallerySection() -> impl IntoView {
    view! {
        <section class="demo-section">
            <h2>"Preset Gallery"</h2>
            <p class="section-description">
                "Every named scene from the component catalog, rendered read-only."
            </p>
            {catalog::scenes()
                .into_iter()
                .map(|scene| {
                    view! {
                        <div class="gallery-scene">
                            <h3 class="gallery-scene-name">{scene.name}</h3>
                            <p class="section-description">{scene.description}</p>
                            <div class="cards-grid">
                                {scene
                                    .cards
                                    .into_iter()
                                    .map(|card| {
                                        view! {
                                            <FilterCard
                                                kind=card.kind
                                                title=card.title
                                                subtitle=card.subtitle
                                                selected=card.selected
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
