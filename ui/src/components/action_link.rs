use crate::Screen;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    // Signals are Copy, so no lifetimes or references are needed here.
    #[props(optional)]
    pub state: Option<Signal<Screen>>,

    #[props(optional)]
    pub to: Option<Screen>,

    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,

    pub children: Element,
}

/// An anchor that navigates by writing to the active-screen signal and/or
/// runs a custom handler, without ever letting the browser follow the href.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    rsx! {
        a {
            href: "#",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();

                if let (Some(mut state_signal), Some(target)) = (props.state, &props.to) {
                    state_signal.set(target.clone());
                }

                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
