// File: src/components/empty_state.rs
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
    #[props(default)]
    icon: Option<Element>,
}

/// A dashed placeholder panel shown where data has not arrived yet, e.g.
/// the recommendations column before a journey is planned.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                padding: 2rem;
                text-align: center;
                color: var(--pico-muted-color);
                border: 2px dashed var(--pico-card-border-color);
                border-radius: var(--pico-border-radius);
                background-color: var(--pico-card-sectioning-background-color);
                margin: 1rem 0;
            ",

            if let Some(icon) = props.icon {
                div {
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 8vmin;
                        height: 8vmin;
                        font-size: 8vmin;
                        margin-bottom: 1rem;
                        color: var(--pico-primary-background);
                        opacity: 0.8;
                    ",
                    {icon}
                }
            }

            h4 {
                style: "margin-bottom: 0.5rem; color: var(--pico-h4-color);",
                "{props.title}"
            }

            if let Some(desc) = props.description {
                p {
                    style: "max-width: 400px; margin: 0 auto 0.5rem auto;",
                    "{desc}"
                }
            }
        }
    }
}
