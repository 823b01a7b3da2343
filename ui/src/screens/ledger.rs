//=============================================================================
// File: src/screens/ledger.rs
//=============================================================================
use crate::components::empty_state::EmptyState;
use crate::components::pico::Badge;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Input;
use crate::components::stat_card::StatCard;
use dioxus::prelude::*;
use phishguard_types::ledger::LedgerEntry;
use phishguard_types::ledger::LedgerStatus;

fn status_badge(status: LedgerStatus) -> (&'static str, &'static str) {
    match status {
        LedgerStatus::Verified => ("✓ Verified", "#16a34a"),
        LedgerStatus::Pending => ("⏳ Pending", "#d97706"),
    }
}

/// Details pane for one selected entry.
#[component]
fn EntryDetails(entry: LedgerEntry) -> Element {
    let payload = serde_json::to_string_pretty(&entry.payload)
        .unwrap_or_else(|_| entry.payload.to_string());
    let (label, color) = status_badge(entry.status);

    rsx! {
        Card {
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h4 { style: "margin-bottom: 0;", "{entry.action.display_name()}" }
                Badge { color, "{label}" }
            }
            p {
                style: "word-break: break-all;",
                small { "Transaction Hash" }
                br {}
                code { "{entry.hash}" }
            }
            Grid {
                div {
                    small { "Block" }
                    br {}
                    strong { "#{entry.block_number}" }
                }
                div {
                    small { "Gas Used" }
                    br {}
                    strong { "{entry.gas_used}" }
                }
                div {
                    small { "User" }
                    br {}
                    strong { "{entry.user_id}" }
                }
            }
            p {
                small { "Recorded at {entry.timestamp}" }
            }
            h5 { "Payload" }
            pre {
                style: "max-height: 16rem; overflow: auto;",
                code { "{payload}" }
            }
        }
    }
}

/// The "blockchain" audit log: searchable entry list on the left, the
/// selected entry's full record on the right.
#[allow(non_snake_case)]
#[component]
pub fn LedgerScreen() -> Element {
    let mut entries = use_resource(move || async move { api::ledger_entries().await });
    let stats = use_resource(move || async move { api::ledger_stats().await });

    let mut search = use_signal(String::new);
    let mut selected_hash = use_signal(|| None::<String>);

    rsx! {
        if let Some(Ok(stats)) = &*stats.read() {
            div {
                class: "grid",
                StatCard { label: "Verified Entries", value: "{stats.verified_entries}", color: "#16a34a" }
                StatCard { label: "Pending Entries", value: "{stats.pending_entries}", color: "#d97706" }
                StatCard { label: "Latest Block", value: "#{stats.latest_block}" }
            }
        }
        match &*entries.read() {
            None => rsx! {
                Card {
                    h3 { "Blockchain Security Log" }
                    p { "Loading..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load the ledger: {e}" }
                    button { onclick: move |_| entries.restart(), "Retry" }
                }
            },
            Some(Ok(all_entries)) => {
                let visible: Vec<LedgerEntry> = all_entries
                    .iter()
                    .filter(|e| e.matches_search(&search()))
                    .cloned()
                    .collect();
                let selected = selected_hash()
                    .and_then(|hash| all_entries.iter().find(|e| e.hash == hash).cloned());

                rsx! {
                    Grid {
                        Card {
                            h3 { "Blockchain Security Log" }
                            Input {
                                label: "",
                                name: "ledger-search",
                                placeholder: "Search by hash, user or action...",
                                value: "{search}",
                                on_input: move |evt: FormEvent| search.set(evt.value()),
                            }
                            if visible.is_empty() {
                                EmptyState {
                                    title: "No matching entries",
                                    description: "Try a different hash, user id or action name.",
                                }
                            }
                            for entry in visible {
                                {
                                    let hash = entry.hash.clone();
                                    let is_selected = selected_hash().as_deref() == Some(entry.hash.as_str());
                                    let border = if is_selected {
                                        "2px solid var(--pico-primary)".to_string()
                                    } else {
                                        "1px solid var(--pico-card-border-color)".to_string()
                                    };
                                    let (label, color) = status_badge(entry.status);
                                    rsx! {
                                        div {
                                            style: "border: {border}; border-radius: var(--pico-border-radius);
                                                    padding: 0.75rem 1rem; margin-bottom: 0.75rem; cursor: pointer;",
                                            onclick: move |_| selected_hash.set(Some(hash.clone())),
                                            div {
                                                style: "display: flex; justify-content: space-between; align-items: center;",
                                                strong { "{entry.action.display_name()}" }
                                                Badge { color, "{label}" }
                                            }
                                            small {
                                                style: "color: var(--pico-muted-color);",
                                                code { "{entry.short_hash()}..." }
                                                " · {entry.user_id} · {entry.timestamp}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        div {
                            match selected {
                                Some(entry) => rsx! {
                                    EntryDetails { entry }
                                },
                                None => rsx! {
                                    EmptyState {
                                        title: "Select an entry",
                                        description: "Pick a log entry to inspect its full on-chain record.",
                                        icon: rsx! { span { "🔗" } },
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
