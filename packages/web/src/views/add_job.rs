use dioxus::prelude::*;

use super::job_form::JobForm;
use crate::Route;

#[component]
pub fn AddJob() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "page",
            h1 { "Post a Job" }
            JobForm {
                on_created: move |_| {
                    nav.push(Route::Landing {});
                },
            }
        }
    }
}
