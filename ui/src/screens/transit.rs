//=============================================================================
// File: src/screens/transit.rs
//=============================================================================
use crate::components::route_planner::RoutePlanner;
use crate::components::route_recommendations::RouteRecommendations;
use crate::components::stat_card::StatCard;
use crate::components::transport_map::TransportMap;
use dioxus::prelude::*;
use phishguard_types::transit::JourneyPlan;

/// The landing screen: journey planner, ranked recommendations and the live
/// map side by side, headed by a row of fixed showcase metrics.
#[allow(non_snake_case)]
#[component]
pub fn TransitScreen() -> Element {
    let mut plan = use_signal(|| None::<JourneyPlan>);
    let mut selected = use_signal(|| None::<usize>);

    rsx! {
        div {
            class: "grid",
            StatCard { label: "Active Buses", value: "127" }
            StatCard { label: "Metro Trains", value: "42", color: "#10b981" }
            StatCard { label: "Daily Riders", value: "8.2k", color: "#8b5cf6" }
            StatCard { label: "On-Time Rate", value: "94%", color: "#d97706" }
        }
        div {
            class: "grid",
            div {
                RoutePlanner {
                    on_planned: move |new_plan: JourneyPlan| {
                        plan.set(Some(new_plan));
                        // Default to the fastest option whenever a plan lands.
                        selected.set(Some(0));
                    },
                }
                RouteRecommendations {
                    plan,
                    selected,
                }
            }
            div {
                TransportMap {
                    plan,
                    selected,
                }
                article {
                    style: "padding: 0.75rem 1rem;",
                    small {
                        style: "color: var(--pico-muted-color);",
                        "🔄 Bus positions refresh every 5 seconds. Route timings are estimates."
                    }
                }
            }
        }
    }
}
