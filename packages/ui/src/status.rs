use dioxus::prelude::*;

use crate::icons::FaCircleExclamation;
use crate::Icon;

#[component]
pub fn Spinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "spinner-row",
            role: "status",
            div { class: "spinner" }
            span { "{label}" }
        }
    }
}

/// Inline error shown in place of page content.
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "error-message",
            role: "alert",
            Icon { icon: FaCircleExclamation, width: 14, height: 14 }
            span { "{message}" }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        p { class: "empty-state", "{message}" }
    }
}
