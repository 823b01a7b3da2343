//=============================================================================
// File: src/screens/result.rs
//=============================================================================
use crate::components::action_link::ActionLink;
use crate::components::pico::Badge;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::risk_meter::RiskMeter;
use crate::Screen;
use dioxus::prelude::*;
use phishguard_types::risk::Feedback;
use phishguard_types::risk::ScanStatus;

/// Detection report for one scan. Only the demo scans carry a full report;
/// everything else gets the not-found panel with a way back.
#[allow(non_snake_case)]
#[component]
pub fn ResultScreen(scan_id: u32) -> Element {
    let active_screen = use_context::<Signal<Screen>>();
    let mut report = use_resource(move || async move { api::scan_report(scan_id).await });

    let mut is_reporting = use_signal(|| false);
    let mut reported = use_signal(|| false);

    rsx! {
        ActionLink {
            state: active_screen,
            to: Screen::History,
            "← Back to Scan History"
        }
        match &*report.read() {
            None => rsx! {
                Card {
                    h3 { "Detection Result" }
                    p { "Loading..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load the detection report: {e}" }
                    button { onclick: move |_| report.restart(), "Retry" }
                }
            },
            Some(Ok(None)) => rsx! {
                Card {
                    h3 { "Report Not Found" }
                    p { "No detailed report exists for scan #{scan_id}." }
                }
            },
            Some(Ok(Some(report))) => {
                let (status_label, status_color) = match report.status {
                    ScanStatus::Phishing => ("⚠ Phishing Detected", "#dc2626"),
                    ScanStatus::Safe => ("✓ Verified Safe", "#16a34a"),
                };
                rsx! {
                    Card {
                        div {
                            style: "display: flex; justify-content: space-between; align-items: center;",
                            h3 { style: "margin-bottom: 0;", "Detection Result" }
                            Badge { color: status_color, "{status_label}" }
                        }
                        p {
                            style: "word-break: break-all; color: var(--pico-muted-color);",
                            "{report.content}"
                        }
                        RiskMeter { score: report.risk_score }
                    }
                    Grid {
                        Card {
                            h4 { "Detected Indicators" }
                            ul {
                                for indicator in report.indicators.clone() {
                                    li { "{indicator}" }
                                }
                            }
                        }
                        Card {
                            h4 { "Action Taken" }
                            p {
                                strong { "{report.action_taken}" }
                            }
                            p {
                                small {
                                    style: "color: var(--pico-muted-color);",
                                    "{report.action_taken.explanation()}"
                                }
                            }
                            p {
                                small {
                                    "Analyzed by {report.model} at {report.timestamp}. "
                                    ActionLink {
                                        state: active_screen,
                                        to: Screen::Ledger,
                                        "View blockchain record"
                                    }
                                }
                            }
                        }
                    }
                    Card {
                        h4 { "Was this detection wrong?" }
                        if reported() {
                            p { "✓ Thank you. Your report helps improve the model." }
                        } else {
                            Button {
                                button_type: ButtonType::Secondary,
                                outline: true,
                                disabled: is_reporting(),
                                busy: is_reporting(),
                                on_click: move |_| {
                                    if is_reporting() {
                                        return;
                                    }
                                    is_reporting.set(true);
                                    spawn(async move {
                                        if api::submit_feedback(scan_id, Feedback::Incorrect)
                                            .await
                                            .is_ok()
                                        {
                                            reported.set(true);
                                        }
                                        is_reporting.set(false);
                                    });
                                },
                                if is_reporting() {
                                    "Submitting..."
                                } else {
                                    "Report False Positive"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
