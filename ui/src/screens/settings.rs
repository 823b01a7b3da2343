//=============================================================================
// File: src/screens/settings.rs
//=============================================================================
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Input;
use dioxus::prelude::*;
use phishguard_types::prefs::NotificationPrefs;
use phishguard_types::prefs::Sensitivity;
use phishguard_types::prefs::UserProfile;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, PartialEq, Eq, Default, strum::Display)]
enum SettingsTab {
    #[default]
    Profile,
    Security,
    Notifications,
    Privacy,
}

const SETTINGS_TABS: [SettingsTab; 4] = [
    SettingsTab::Profile,
    SettingsTab::Security,
    SettingsTab::Notifications,
    SettingsTab::Privacy,
];

/// Editable copy of the loaded profile. Saving acknowledges after a delay
/// without persisting; edits survive only within this screen's lifetime.
#[component]
fn ProfileTab(profile: UserProfile) -> Element {
    let account = profile.clone();
    let mut name = use_signal(|| profile.name.clone());
    let mut email = use_signal(|| profile.email.clone());
    let mut sensitivity = use_signal(|| profile.sensitivity);
    let mut is_saving = use_signal(|| false);
    let mut saved = use_signal(|| false);

    rsx! {
        Card {
            h4 { "Profile" }
            p {
                small {
                    style: "color: var(--pico-muted-color);",
                    "Member since {profile.join_date} · {profile.total_scans} scans · role: {profile.role}"
                }
            }
            Input {
                label: "Name",
                name: "profile-name",
                value: "{name}",
                disabled: is_saving(),
                on_input: move |evt: FormEvent| {
                    name.set(evt.value());
                    saved.set(false);
                },
            }
            Input {
                label: "Email",
                name: "profile-email",
                input_type: "email",
                value: "{email}",
                disabled: is_saving(),
                on_input: move |evt: FormEvent| {
                    email.set(evt.value());
                    saved.set(false);
                },
            }
            label {
                "Detection Sensitivity"
                select {
                    disabled: is_saving(),
                    onchange: move |evt| {
                        if let Ok(level) = Sensitivity::from_str(&evt.value()) {
                            sensitivity.set(level);
                            saved.set(false);
                        }
                    },
                    for level in Sensitivity::iter() {
                        option {
                            value: "{level}",
                            selected: sensitivity() == level,
                            "{level.title()}"
                        }
                    }
                }
                small {
                    style: "color: var(--pico-muted-color);",
                    "{sensitivity().description()}"
                }
            }
            Button {
                disabled: is_saving(),
                busy: is_saving(),
                on_click: move |_| {
                    if is_saving() {
                        return;
                    }
                    let updated = UserProfile {
                        name: name(),
                        email: email(),
                        sensitivity: sensitivity(),
                        ..account.clone()
                    };
                    is_saving.set(true);
                    spawn(async move {
                        if api::save_profile(updated).await.is_ok() {
                            saved.set(true);
                        }
                        is_saving.set(false);
                    });
                },
                if is_saving() {
                    "Saving..."
                } else if saved() {
                    "✓ Saved"
                } else {
                    "Save Changes"
                }
            }
        }
    }
}

#[component]
fn SecurityTab() -> Element {
    let mut two_factor = use_signal(|| false);

    rsx! {
        Card {
            h4 { "Security" }
            Input {
                label: "Current Password",
                name: "current-password",
                input_type: "password",
                placeholder: "••••••••",
            }
            Input {
                label: "New Password",
                name: "new-password",
                input_type: "password",
                placeholder: "••••••••",
            }
            label {
                input {
                    r#type: "checkbox",
                    role: "switch",
                    checked: two_factor(),
                    onchange: move |evt| two_factor.set(evt.value() == "true"),
                }
                "Two-factor authentication"
            }
            Button {
                button_type: ButtonType::Secondary,
                "Update Password"
            }
        }
    }
}

#[component]
fn NotificationsTab() -> Element {
    let mut prefs = use_signal(NotificationPrefs::default);

    let toggle = [
        ("Phishing alerts", "Immediate notification when a threat is blocked"),
        ("System updates", "News about model and product releases"),
        ("Weekly reports", "A summary of your scan activity every Monday"),
    ];

    rsx! {
        Card {
            h4 { "Notifications" }
            for (index, (label, description)) in toggle.into_iter().enumerate() {
                {
                    let checked = {
                        let p = prefs.read();
                        match index {
                            0 => p.phishing_alerts,
                            1 => p.system_updates,
                            _ => p.weekly_reports,
                        }
                    };
                    rsx! {
                        label {
                            input {
                                r#type: "checkbox",
                                role: "switch",
                                checked,
                                onchange: move |evt: FormEvent| {
                                    let on = evt.value() == "true";
                                    prefs.with_mut(|p| match index {
                                        0 => p.phishing_alerts = on,
                                        1 => p.system_updates = on,
                                        _ => p.weekly_reports = on,
                                    });
                                },
                            }
                            "{label}"
                            br {}
                            small {
                                style: "color: var(--pico-muted-color);",
                                "{description}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PrivacyTab() -> Element {
    rsx! {
        Card {
            h4 { "Privacy" }
            p {
                "Scan contents are analyzed in memory and never stored. Detection "
                "verdicts are anchored to the audit ledger without the scanned text."
            }
            p {
                small {
                    style: "color: var(--pico-muted-color);",
                    "Data export and account deletion are handled by support during the beta."
                }
            }
        }
    }
}

/// The settings screen: profile form plus the static preference panes.
#[allow(non_snake_case)]
#[component]
pub fn SettingsScreen() -> Element {
    let mut profile = use_resource(move || async move { api::user_profile().await });
    let mut tab = use_signal(SettingsTab::default);

    rsx! {
        nav {
            ul {
                for candidate in SETTINGS_TABS {
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
            }
        }
        match tab() {
            SettingsTab::Profile => rsx! {
                match &*profile.read() {
                    None => rsx! {
                        Card {
                            h4 { "Profile" }
                            p { "Loading..." }
                            progress {}
                        }
                    },
                    Some(Err(e)) => rsx! {
                        Card {
                            h4 { "Error" }
                            p { "Failed to load your profile: {e}" }
                            button { onclick: move |_| profile.restart(), "Retry" }
                        }
                    },
                    Some(Ok(loaded)) => rsx! {
                        ProfileTab {
                            profile: loaded.clone(),
                        }
                    },
                }
            },
            SettingsTab::Security => rsx! { SecurityTab {} },
            SettingsTab::Notifications => rsx! { NotificationsTab {} },
            SettingsTab::Privacy => rsx! { PrivacyTab {} },
        }
    }
}
