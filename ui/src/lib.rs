// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod components;
mod screens;

use app_state::AppState;
use screens::admin::AdminScreen;
use screens::history::HistoryScreen;
use screens::ledger::LedgerScreen;
use screens::result::ResultScreen;
use screens::settings::SettingsScreen;
use screens::transit::TransitScreen;

/// Enum to represent the different screens in our application.
#[derive(Clone, PartialEq, Default)]
enum Screen {
    #[default]
    Transit,
    History,
    Ledger,
    Admin,
    Settings,
    /// Detection detail for one scan; reached from History, not the tab bar.
    Result(u32),
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Transit => "Home",
            Screen::History => "History",
            Screen::Ledger => "Blockchain",
            Screen::Admin => "Admin",
            Screen::Settings => "Settings",
            Screen::Result(_) => "Detection Result",
        }
    }
}

/// A list of all tab-reachable screens for easy iteration.
const NAV_SCREENS: [Screen; 5] = [
    Screen::Transit,
    Screen::History,
    Screen::Ledger,
    Screen::Admin,
    Screen::Settings,
];

/// The navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in NAV_SCREENS {
                    li {
                        a {
                            href: "#",
                            // Nested screens highlight their parent tab.
                            class: {
                                let is_active = match (&*active_screen.read(), &screen) {
                                    (Screen::Result(_), Screen::History) => true,
                                    (active, current) => active == current,
                                };
                                if is_active { "active-tab" } else { "" }
                            },
                            "aria-current": {
                                let is_active = match (&*active_screen.read(), &screen) {
                                    (Screen::Result(_), Screen::History) => true,
                                    (active, current) => active == current,
                                };
                                if is_active { "page" } else { "false" }
                            },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen.clone());
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        background-color: var(--pico-background-color);
    }

    /* --- APP FRAME --- */
    .app-main-container {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
    }

    .app-main-container header {
        flex-shrink: 0;
        padding: 0 1rem;
        margin-bottom: 0;
        border-bottom: 1px solid var(--pico-muted-border-color);
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .app-brand h1 {
        margin: 0;
        font-size: 1.35rem;
    }

    .app-brand small {
        color: var(--pico-muted-color);
    }

    /* --- NAVIGATION TABS --- */
    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-radius: 10px 10px 0 0;
        border: none;
        border-top: 3px solid color-mix(in srgb, var(--pico-primary), transparent 90%) !important;
        background: linear-gradient(
            to bottom,
            color-mix(in srgb, var(--pico-primary), transparent 95%),
            transparent
        ) center / 100% 100% no-repeat !important;
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    /* --- CONTENT AREA --- */
    .app-main-container .content {
        flex: 1;
        padding: 1rem;
        min-height: 0;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Provide the stable, non-reactive AppState.
    let app_state = use_context_provider(AppState::new);

    let active_screen = use_signal(Screen::default);

    // --- Provide the active_screen signal to the context ---
    use_context_provider(|| active_screen);

    rsx! {
        div {
            class: "app-main-container",
            header {
                nav {
                    ul {
                        li {
                            div {
                                class: "app-brand",
                                h1 { "{app_state.product}" }
                                small { "{app_state.tagline} · {app_state.model}" }
                            }
                        }
                    }
                    ul {
                        li {
                            Tabs {
                                active_screen,
                            }
                        }
                    }
                }
            }
            div {
                class: "content",
                match active_screen() {
                    Screen::Transit => rsx! {
                        TransitScreen {}
                    },
                    Screen::History => rsx! {
                        HistoryScreen {}
                    },
                    Screen::Ledger => rsx! {
                        LedgerScreen {}
                    },
                    Screen::Admin => rsx! {
                        AdminScreen {}
                    },
                    Screen::Settings => rsx! {
                        SettingsScreen {}
                    },
                    Screen::Result(scan_id) => rsx! {
                        ResultScreen {
                            key: "{scan_id}",
                            scan_id,
                        }
                    },
                }
            }
        }
    }
}
