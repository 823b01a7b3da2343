//=============================================================================
// File: src/screens/history.rs
//=============================================================================
use crate::components::action_link::ActionLink;
use crate::components::pico::Badge;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::stat_card::StatCard;
use crate::Screen;
use dioxus::prelude::*;
use phishguard_types::risk::Feedback;
use phishguard_types::risk::HistoryFilter;
use phishguard_types::risk::RiskBand;
use phishguard_types::risk::ScanRecord;
use phishguard_types::risk::ScanStatus;
use std::collections::HashMap;
use std::str::FromStr;
use strum::IntoEnumIterator;

fn score_color(score: u8) -> &'static str {
    match RiskBand::from_score(score) {
        RiskBand::High => "#dc2626",
        RiskBand::Medium => "#d97706",
        RiskBand::Low => "#16a34a",
    }
}

/// A single history row. Feedback submitted this session lives in the
/// `overrides` map; the fixture itself never changes.
#[component]
fn HistoryRow(
    record: ScanRecord,
    feedback: Option<Feedback>,
    is_submitting: bool,
    on_feedback: EventHandler<Feedback>,
) -> Element {
    let active_screen = use_context::<Signal<Screen>>();
    let color = score_color(record.risk_score);
    let (status_label, status_color) = match record.status {
        ScanStatus::Phishing => ("Phishing", "#dc2626"),
        ScanStatus::Safe => ("Safe", "#16a34a"),
    };

    rsx! {
        tr {
            td {
                small { style: "color: var(--pico-muted-color);", "{record.kind}" }
                br {}
                ActionLink {
                    state: active_screen,
                    to: Screen::Result(record.id),
                    "{record.content}"
                }
            }
            td {
                strong { style: "color: {color};", "{record.risk_score}" }
            }
            td {
                Badge { color: status_color, "{status_label}" }
            }
            td { small { "{record.timestamp}" } }
            td {
                match feedback {
                    Some(f) => rsx! {
                        small { "Marked {f}" }
                    },
                    None => rsx! {
                        div {
                            style: "display: flex; gap: 0.5rem;",
                            Button {
                                button_type: ButtonType::Secondary,
                                outline: true,
                                disabled: is_submitting,
                                busy: is_submitting,
                                on_click: move |_| on_feedback.call(Feedback::Correct),
                                "✓ Correct"
                            }
                            Button {
                                button_type: ButtonType::Secondary,
                                outline: true,
                                disabled: is_submitting,
                                on_click: move |_| on_feedback.call(Feedback::Incorrect),
                                "✗ Incorrect"
                            }
                        }
                    },
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn HistoryScreen() -> Element {
    let mut history = use_resource(move || async move { api::scan_history().await });

    let mut filter = use_signal(HistoryFilter::default);
    // Session-only feedback, keyed by scan id. Overlays the fixture rows.
    let mut overrides = use_signal(HashMap::<u32, Feedback>::new);
    let mut submitting = use_signal(|| None::<u32>);

    rsx! {
        match &*history.read() {
            None => rsx! {
                Card {
                    h3 { "Scan History" }
                    p { "Loading..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load scan history: {e}" }
                    button { onclick: move |_| history.restart(), "Retry" }
                }
            },
            Some(Ok(records)) => {
                let total = records.len();
                let phishing = records.iter().filter(|r| r.status == ScanStatus::Phishing).count();
                let safe = total - phishing;
                let needs_feedback = records
                    .iter()
                    .filter(|r| r.feedback.is_none() && !overrides.read().contains_key(&r.id))
                    .count();
                let visible: Vec<ScanRecord> = records
                    .iter()
                    .filter(|r| {
                        // Session feedback counts for the needs-feedback filter.
                        let mut effective = (*r).clone();
                        if effective.feedback.is_none() {
                            effective.feedback = overrides.read().get(&r.id).copied();
                        }
                        filter().matches(&effective)
                    })
                    .cloned()
                    .collect();

                rsx! {
                    div {
                        class: "grid",
                        StatCard { label: "Total Scans", value: "{total}" }
                        StatCard { label: "Phishing Detected", value: "{phishing}", color: "#dc2626" }
                        StatCard { label: "Safe Items", value: "{safe}", color: "#16a34a" }
                        StatCard { label: "Awaiting Feedback", value: "{needs_feedback}", color: "#d97706" }
                    }
                    Card {
                        div {
                            style: "display: flex; justify-content: space-between; align-items: center;",
                            h3 { style: "margin-bottom: 0;", "Scan History" }
                            select {
                                style: "width: auto; margin-bottom: 0;",
                                onchange: move |evt| {
                                    if let Ok(parsed) = HistoryFilter::from_str(&evt.value()) {
                                        filter.set(parsed);
                                    }
                                },
                                for option in HistoryFilter::iter() {
                                    option {
                                        value: "{option}",
                                        selected: filter() == option,
                                        "{option}"
                                    }
                                }
                            }
                        }
                        table {
                            thead { tr {
                                th { "Content" }
                                th { "Risk" }
                                th { "Status" }
                                th { "Time" }
                                th { "Feedback" }
                            }}
                            tbody {
                                for record in visible {
                                    {
                                        let id = record.id;
                                        let feedback = record
                                            .feedback
                                            .or_else(|| overrides.read().get(&id).copied());
                                        rsx! {
                                            HistoryRow {
                                                key: "{id}",
                                                record,
                                                feedback,
                                                is_submitting: submitting() == Some(id),
                                                on_feedback: move |choice: Feedback| {
                                                    if submitting().is_some() {
                                                        return;
                                                    }
                                                    submitting.set(Some(id));
                                                    spawn(async move {
                                                        if api::submit_feedback(id, choice).await.is_ok() {
                                                            overrides.write().insert(id, choice);
                                                        }
                                                        submitting.set(None);
                                                    });
                                                },
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
