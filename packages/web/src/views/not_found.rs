use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "page not-found",
            h1 { "Page not found" }
            p { class: "muted", "Nothing lives at {path}." }
            Link { class: "btn btn-primary", to: Route::Landing {}, "Back to jobs" }
        }
    }
}
