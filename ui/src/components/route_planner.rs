use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Input;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use phishguard_types::transit::JourneyPlan;
use phishguard_types::transit::JourneyQuery;

/// The journey request form. Both fields must be non-blank before the
/// button enables; while the simulated call runs the button shows a
/// spinner and stays disabled so a request cannot be double-submitted.
#[component]
pub fn RoutePlanner(on_planned: EventHandler<JourneyPlan>) -> Element {
    let mut start = use_signal(String::new);
    let mut end = use_signal(String::new);
    let mut is_calculating = use_signal(|| false);

    let query = JourneyQuery::new(start(), end());
    let can_submit = query.is_complete() && !is_calculating();

    rsx! {
        Card {
            h3 { "Plan Your Journey" }
            Input {
                label: "From",
                name: "journey-start",
                placeholder: "Enter starting point",
                value: "{start}",
                disabled: is_calculating(),
                on_input: move |evt: FormEvent| start.set(evt.value()),
            }
            Input {
                label: "To",
                name: "journey-end",
                placeholder: "Enter destination",
                value: "{end}",
                disabled: is_calculating(),
                on_input: move |evt: FormEvent| end.set(evt.value()),
            }
            Button {
                disabled: !can_submit,
                busy: is_calculating(),
                on_click: move |_| {
                    let query = JourneyQuery::new(start(), end());
                    if !query.is_complete() || is_calculating() {
                        return;
                    }
                    is_calculating.set(true);
                    spawn(async move {
                        match api::plan_journey(query).await {
                            Ok(plan) => on_planned.call(plan),
                            // The mock never fails, but keep the arm honest.
                            Err(e) => tracing::error!("journey planning failed: {e}"),
                        }
                        is_calculating.set(false);
                    });
                },
                if is_calculating() {
                    "Calculating Routes..."
                } else {
                    "Find Best Routes"
                }
            }
        }
    }
}
