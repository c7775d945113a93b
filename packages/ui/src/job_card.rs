use api::Job;
use dioxus::prelude::*;

use crate::icons::{FaStar, FaUser};
use crate::Icon;

/// A single listing on the landing page or the employer dashboard.
///
/// `on_apply` receives the job id; the button only shows when `can_apply`.
#[component]
pub fn JobCard(
    job: Job,
    #[props(default)] can_apply: bool,
    on_apply: Option<EventHandler<String>>,
) -> Element {
    let id = job.id.clone();

    rsx! {
        article {
            class: if job.is_featured { "job-card featured" } else { "job-card" },

            if job.is_featured {
                span {
                    class: "job-badge",
                    Icon { icon: FaStar, width: 12, height: 12 }
                    " Featured"
                }
            }

            h3 { class: "job-title", "{job.title}" }
            p { class: "job-description", "{job.description}" }

            div {
                class: "job-meta",
                span {
                    Icon { icon: FaUser, width: 12, height: 12 }
                    " Posted by: {job.poster()}"
                }
                if !job.category_label().is_empty() {
                    span { class: "job-category", "Category: {job.category_label()}" }
                }
            }

            if can_apply {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        if let Some(handler) = on_apply {
                            handler.call(id.clone());
                        }
                    },
                    "Apply Now"
                }
            }
        }
    }
}
