use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    pub label: String,
    pub value: String,
    /// Accent color for the value; defaults to the primary color.
    #[props(optional)]
    pub color: Option<&'static str>,
}

/// A compact metric tile used on the dashboard headers.
#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    let color = props.color.unwrap_or("var(--pico-primary)");
    rsx! {
        article {
            style: "text-align: center; padding: 1rem; margin: 0;",
            p {
                style: "margin: 0; font-size: 1.6rem; font-weight: 700; color: {color};",
                "{props.value}"
            }
            small {
                style: "color: var(--pico-muted-color);",
                "{props.label}"
            }
        }
    }
}
