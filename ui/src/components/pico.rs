//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure the pico stylesheet is linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Renders Pico's inline spinner while a simulated call is in flight.
    #[props(default = false)]
    busy: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let mut classes: Vec<&str> = Vec::new();
    match props.button_type {
        ButtonType::Primary => {}
        ButtonType::Secondary => classes.push("secondary"),
        ButtonType::Contrast => classes.push("contrast"),
    }
    if props.outline {
        classes.push("outline");
    }
    let class_str = classes.join(" ");
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            "aria-busy": if props.busy { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(default = String::new())]
    value: String,
    #[props(default = false)]
    disabled: bool,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
}

/// A labeled form input field.
pub fn Input(props: InputProps) -> Element {
    let placeholder = props.placeholder.clone().unwrap_or_default();
    rsx! {
        label {
            "{props.label}",
            input {
                r#type: "{props.input_type}",
                name: "{props.name}",
                placeholder: "{placeholder}",
                value: "{props.value}",
                disabled: props.disabled,
                oninput: move |evt| {
                    if let Some(handler) = &props.on_input {
                        handler.call(evt);
                    }
                },
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct BadgeProps {
    children: Element,
    /// Any CSS color; defaults to the muted foreground.
    #[props(optional)]
    color: Option<&'static str>,
}

/// A small inline status label.
pub fn Badge(props: BadgeProps) -> Element {
    let color = props.color.unwrap_or("var(--pico-muted-color)");
    rsx! {
        span {
            style: "display: inline-block; padding: 0.1rem 0.55rem; border-radius: 1rem;
                    font-size: 0.75rem; font-weight: 600; white-space: nowrap;
                    color: {color}; border: 1px solid {color};",
            {props.children}
        }
    }
}
