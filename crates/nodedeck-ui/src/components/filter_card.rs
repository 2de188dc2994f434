/// Interactive status filter card
///
/// A clickable summary card with hover, selection, keyboard, and
/// click-ripple feedback. Cards expose their category and selection
/// state through data attributes so dashboards and tests can target
/// them.

use leptos::*;

use crate::types::{CardKind, CardRect, Ripple, RIPPLE_DURATION_MS};

/// Class list for the card root, derived from its interaction state.
fn card_class(kind: CardKind, selected: bool, hovered: bool, extra: &str) -> String {
    let mut class = String::from("filter-card");
    if hovered {
        class.push_str(" filter-card-hover");
    }
    if selected {
        class.push_str(" filter-card-selected ");
        class.push_str(kind.style().selected_border);
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Accessible label combining the headline and its context line.
fn card_label(title: &str, subtitle: &str) -> String {
    format!("{}. {}", title, subtitle)
}

/// Keys that activate a focused card. Matches native button behavior.
fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// Inline position and size for one ripple span.
fn ripple_style(ripple: &Ripple) -> String {
    format!(
        "left: {}px; top: {}px; width: {}px; height: {}px;",
        ripple.x, ripple.y, ripple.size, ripple.size
    )
}

/// Status summary card for fleet dashboards.
///
/// Selection is owned by the parent: the card renders whatever
/// `selected` says and reports activations through `on_click` without
/// keeping selection state of its own.
#[component]
pub fn FilterCard(
    /// Category that drives the icon and color treatment.
    #[prop(into)]
    kind: CardKind,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    /// Called on every click or keyboard activation.
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    /// Extra classes appended to the card root.
    #[prop(optional, into)]
    class: String,
    /// Value for the `data-testid` attribute.
    #[prop(optional, into)]
    test_id: Option<String>,
) -> impl IntoView {
    let (hovered, set_hovered) = create_signal(false);
    let (ripples, set_ripples) = create_signal::<Vec<Ripple>>(Vec::new());
    let ripple_seq = store_value(0u64);
    let card_ref = create_node_ref::<html::Div>();

    let style = kind.style();
    let label = card_label(&title, &subtitle);

    // Spawns a ripple and schedules its removal. Does nothing when the
    // card has no layout geometry yet; activation still goes through.
    let spawn_ripple = move |point: Option<(f64, f64)>| {
        let card = match card_ref.get() {
            Some(card) => card,
            None => return,
        };
        let bounds = card.get_bounding_client_rect();
        let rect = CardRect {
            left: bounds.left(),
            top: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
        };
        let id = ripple_seq.get_value();
        ripple_seq.set_value(id + 1);
        let ripple = match point {
            Some((x, y)) => Ripple::at_point(id, &rect, x, y),
            None => Ripple::at_center(id, &rect),
        };
        set_ripples.update(|ripples| ripples.push(ripple));

        gloo_timers::callback::Timeout::new(RIPPLE_DURATION_MS, move || {
            // try_update: the card may have been unmounted in the meantime
            set_ripples.try_update(|ripples| {
                ripples.retain(|r| r.id != id);
            });
        })
        .forget();
    };

    view! {
        <div
            node_ref=card_ref
            class=move || card_class(kind, selected.get(), hovered.get(), &class)
            role="button"
            tabindex="0"
            aria-label=label
            aria-pressed=move || selected.get().to_string()
            data-type=kind.as_str()
            data-selected=move || selected.get().to_string()
            data-testid=test_id
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
            on:click=move |ev| {
                spawn_ripple(Some((ev.client_x() as f64, ev.client_y() as f64)));
                if let Some(on_click) = on_click {
                    on_click.call(());
                }
            }
            on:keydown=move |ev| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    if let Some(on_click) = on_click {
                        on_click.call(());
                    }
                    spawn_ripple(None);
                }
            }
        >
            <div class="filter-card-content">
                <div class=format!("filter-card-icon {}", style.background)>
                    <span class=format!("material-symbols-outlined {}", style.foreground)>
                        {style.icon}
                    </span>
                </div>
                <div class="filter-card-text">
                    <p class="filter-card-title">{title}</p>
                    <p class="filter-card-subtitle">{subtitle}</p>
                </div>
            </div>
            <div class="filter-card-ripples">
                <For
                    each=move || ripples.get()
                    key=|ripple| ripple.id
                    children=move |ripple: Ripple| {
                        view! { <span class="filter-card-ripple" style=ripple_style(&ripple)></span> }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_class_is_bare() {
        assert_eq!(card_class(CardKind::Info, false, false, ""), "filter-card");
    }

    #[test]
    fn hover_adds_the_hover_class() {
        assert_eq!(
            card_class(CardKind::Info, false, true, ""),
            "filter-card filter-card-hover"
        );
    }

    #[test]
    fn selection_adds_the_kind_specific_border() {
        assert_eq!(
            card_class(CardKind::Success, true, false, ""),
            "filter-card filter-card-selected filter-card-selected-success"
        );
        assert_eq!(
            card_class(CardKind::Alert, true, false, ""),
            "filter-card filter-card-selected filter-card-selected-alert"
        );
    }

    #[test]
    fn fallback_kinds_select_with_the_critical_border() {
        assert_eq!(
            card_class(CardKind::from("unknown-value"), true, false, ""),
            "filter-card filter-card-selected filter-card-selected-critical"
        );
    }

    #[test]
    fn caller_classes_come_last() {
        assert_eq!(
            card_class(CardKind::Critical, true, true, "dashboard-card"),
            "filter-card filter-card-hover filter-card-selected filter-card-selected-critical dashboard-card"
        );
    }

    #[test]
    fn label_joins_title_and_subtitle() {
        assert_eq!(
            card_label("4 critical alerts", "Review nodes with critical alerts"),
            "4 critical alerts. Review nodes with critical alerts"
        );
    }

    #[test]
    fn only_enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Escape"));
        assert!(!is_activation_key("Spacebar"));
        assert!(!is_activation_key("a"));
    }

    #[test]
    fn ripple_style_positions_the_bounding_square() {
        let ripple = Ripple {
            x: -50.0,
            y: -60.0,
            size: 200.0,
            id: 3,
        };
        assert_eq!(
            ripple_style(&ripple),
            "left: -50px; top: -60px; width: 200px; height: 200px;"
        );
    }
}
