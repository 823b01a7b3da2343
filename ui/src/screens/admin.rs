//=============================================================================
// File: src/screens/admin.rs
//=============================================================================
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Input;
use crate::components::stat_card::StatCard;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use phishguard_types::admin::DomainListKind;

/// Sub-tabs of the admin dashboard. "AI Models" renders as a disabled,
/// coming-soon tab.
#[derive(Clone, Copy, PartialEq, Eq, Default, strum::Display)]
enum AdminTab {
    #[default]
    Overview,
    Blacklist,
    Whitelist,
}

impl AdminTab {
    fn domain_kind(&self) -> Option<DomainListKind> {
        match self {
            AdminTab::Overview => None,
            AdminTab::Blacklist => Some(DomainListKind::Blacklist),
            AdminTab::Whitelist => Some(DomainListKind::Whitelist),
        }
    }
}

#[component]
fn OverviewTab() -> Element {
    let mut stats = use_resource(move || async move { api::system_stats().await });
    let metrics = use_resource(move || async move { api::model_metrics().await });
    let activity = use_resource(move || async move { api::recent_activity().await });

    let mut is_retraining = use_signal(|| false);

    rsx! {
        match &*stats.read() {
            None => rsx! {
                p { "Loading..." }
                progress {}
            },
            Some(Err(e)) => rsx! {
                p { "Failed to load system stats: {e}" }
                button { onclick: move |_| stats.restart(), "Retry" }
            },
            Some(Ok(stats)) => rsx! {
                div {
                    class: "grid",
                    StatCard { label: "Total Scans", value: "{stats.total_scans}" }
                    StatCard { label: "Threats Detected", value: "{stats.threats_detected}", color: "#dc2626" }
                    StatCard { label: "Threats Blocked", value: "{stats.blocked_threats}", color: "#16a34a" }
                    StatCard { label: "Beta Testers", value: "{stats.beta_testers}", color: "#8b5cf6" }
                }
            },
        }
        Grid {
            Card {
                h4 { "Model Performance" }
                if let Some(Ok(metrics)) = &*metrics.read() {
                    for (label, value) in [
                        ("Accuracy", metrics.accuracy),
                        ("Precision", metrics.precision),
                        ("Recall", metrics.recall),
                    ] {
                        div {
                            style: "display: flex; justify-content: space-between;",
                            small { "{label}" }
                            small { "{value}%" }
                        }
                        progress { value: "{value}", max: "100" }
                    }
                } else {
                    progress {}
                }
                Button {
                    button_type: ButtonType::Secondary,
                    disabled: is_retraining(),
                    busy: is_retraining(),
                    on_click: move |_| {
                        if is_retraining() {
                            return;
                        }
                        is_retraining.set(true);
                        spawn(async move {
                            if let Err(e) = api::retrain_model().await {
                                tracing::error!("retrain request failed: {e}");
                            }
                            is_retraining.set(false);
                        });
                    },
                    if is_retraining() {
                        "Retraining Model..."
                    } else {
                        "Retrain Model"
                    }
                }
            }
            Card {
                h4 { "Recent Activity" }
                if let Some(Ok(events)) = &*activity.read() {
                    for event in events.clone() {
                        div {
                            style: "padding: 0.4rem 0; border-bottom: 1px solid var(--pico-muted-border-color);",
                            strong { "{event.action}" }
                            br {}
                            small {
                                style: "color: var(--pico-muted-color);",
                                "{event.user} · {event.timestamp}"
                            }
                        }
                    }
                } else {
                    progress {}
                }
            }
        }
    }
}

#[component]
fn DomainListTab(kind: DomainListKind) -> Element {
    let mut list = use_resource(move || async move { api::domain_list(kind).await });

    let mut new_domain = use_signal(String::new);
    let mut is_adding = use_signal(|| false);
    // Domains accepted this session; the fixture list itself never grows.
    let mut added = use_signal(Vec::<String>::new);

    let can_add = !new_domain().trim().is_empty() && !is_adding();

    rsx! {
        Card {
            h4 { "{kind}" }
            div {
                style: "display: flex; gap: 0.5rem; align-items: flex-end;",
                div {
                    style: "flex-grow: 1;",
                    Input {
                        label: "",
                        name: "new-domain",
                        placeholder: "example.com",
                        value: "{new_domain}",
                        disabled: is_adding(),
                        on_input: move |evt: FormEvent| new_domain.set(evt.value()),
                    }
                }
                Button {
                    disabled: !can_add,
                    busy: is_adding(),
                    on_click: move |_| {
                        let domain = new_domain().trim().to_string();
                        if domain.is_empty() || is_adding() {
                            return;
                        }
                        is_adding.set(true);
                        spawn(async move {
                            if api::add_domain(kind, domain.clone()).await.is_ok() {
                                added.write().push(domain);
                                new_domain.set(String::new());
                            }
                            is_adding.set(false);
                        });
                    },
                    "Add Domain"
                }
            }
            match &*list.read() {
                None => rsx! {
                    p { "Loading..." }
                    progress {}
                },
                Some(Err(e)) => rsx! {
                    p { "Failed to load the domain list: {e}" }
                    button { onclick: move |_| list.restart(), "Retry" }
                },
                Some(Ok(entries)) => rsx! {
                    table {
                        thead { tr {
                            th { "Domain" }
                            th { "Added By" }
                            th { "Date" }
                        }}
                        tbody {
                            for entry in entries.clone() {
                                tr {
                                    td { code { "{entry.domain}" } }
                                    td { "{entry.added_by}" }
                                    td { "{entry.date}" }
                                }
                            }
                            for domain in added.read().iter() {
                                tr {
                                    td { code { "{domain}" } }
                                    td { "you" }
                                    td { "just now" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

/// The admin dashboard: overview metrics plus the two domain lists.
#[allow(non_snake_case)]
#[component]
pub fn AdminScreen() -> Element {
    let mut tab = use_signal(AdminTab::default);

    rsx! {
        nav {
            ul {
                for candidate in [AdminTab::Overview, AdminTab::Blacklist, AdminTab::Whitelist] {
                    li {
                        a {
                            href: "#",
                            style: if tab() == candidate {
                                "font-weight: bold; color: var(--pico-primary);"
                            } else {
                                ""
                            },
                            onclick: move |evt| {
                                evt.prevent_default();
                                tab.set(candidate);
                            },
                            "{candidate}"
                        }
                    }
                }
                li {
                    // Placeholder tab; the model management console is not
                    // part of the beta.
                    a {
                        href: "#",
                        "aria-disabled": "true",
                        style: "color: var(--pico-muted-color); cursor: not-allowed;",
                        onclick: move |evt| evt.prevent_default(),
                        "AI Models (soon)"
                    }
                }
            }
        }
        match tab().domain_kind() {
            None => rsx! { OverviewTab {} },
            Some(kind) => rsx! {
                DomainListTab {
                    key: "{kind}",
                    kind,
                }
            },
        }
    }
}
