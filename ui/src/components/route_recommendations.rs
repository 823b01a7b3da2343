use crate::components::empty_state::EmptyState;
use crate::components::pico::Badge;
use crate::components::pico::Card;
use dioxus::prelude::*;
use phishguard_types::transit::JourneyPlan;
use phishguard_types::transit::TransportMode;

fn mode_color(mode: TransportMode) -> &'static str {
    match mode {
        TransportMode::Bus => "#2563eb",
        TransportMode::Metro => "#10b981",
        TransportMode::Mixed => "#8b5cf6",
    }
}

/// The ranked list of route options for the current plan. Index 0 is always
/// the fastest; clicking a card selects it for the map overlay.
#[component]
pub fn RouteRecommendations(
    plan: ReadOnlySignal<Option<JourneyPlan>>,
    selected: Signal<Option<usize>>,
) -> Element {
    let plan_read = plan.read();
    let Some(plan) = plan_read.as_ref() else {
        return rsx! {
            Card {
                h3 { "Recommended Routes" }
                EmptyState {
                    title: "No routes yet",
                    description: "Enter your journey details to see the best options.",
                    icon: rsx! { span { "🚌" } },
                }
            }
        };
    };

    let margin = plan.fastest_margin_min().unwrap_or(5);

    rsx! {
        Card {
            h3 { "Recommended Routes" }
            if let Some(fastest) = plan.fastest() {
                p {
                    style: "padding: 0.5rem 0.75rem; border-radius: var(--pico-border-radius);
                            background-color: color-mix(in srgb, #10b981, transparent 88%);",
                    "⚡ Fastest option: {fastest.mode.label()} saves you {margin} min"
                }
            }
            for (index, option) in plan.options.iter().enumerate() {
                {
                    let color = mode_color(option.mode);
                    let is_selected = selected() == Some(index);
                    let border = if is_selected {
                        format!("2px solid {color}")
                    } else {
                        "1px solid var(--pico-card-border-color)".to_string()
                    };
                    let label = option.mode.label();
                    let detail = option.mode.detail();
                    let duration = option.duration_min;
                    let walk = option.walk_min;
                    let wait = option.wait_min;
                    let cost = option.cost_rupees;
                    let reliability = option.reliability_pct;
                    rsx! {
                        div {
                            style: "border: {border}; border-radius: var(--pico-border-radius);
                                    padding: 0.75rem 1rem; margin-bottom: 0.75rem; cursor: pointer;",
                            onclick: move |_| selected.set(Some(index)),
                            div {
                                style: "display: flex; justify-content: space-between; align-items: center;",
                                div {
                                    strong { style: "color: {color};", "{label}" }
                                    br {}
                                    small { style: "color: var(--pico-muted-color);", "{detail}" }
                                }
                                div {
                                    style: "text-align: right;",
                                    strong { "{duration} min" }
                                    br {}
                                    small { style: "color: var(--pico-muted-color);", "₹{cost}" }
                                }
                            }
                            div {
                                style: "display: flex; gap: 1rem; margin-top: 0.5rem; align-items: center;",
                                small { "🚶 {walk} min walk" }
                                small { "⏱ {wait} min wait" }
                                small { "✓ {reliability}% reliable" }
                                if index == 0 {
                                    Badge { color: "#10b981", "Fastest" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
