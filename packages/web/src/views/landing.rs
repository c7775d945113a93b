//! Landing page: hero, job search and the job board.

use api::{CategoryFilter, Job, JobFilter};
use dioxus::prelude::*;
use ui::icons::FaMagnifyingGlass;
use ui::{
    notify_error, use_api, use_notifications, use_session, EmptyState, ErrorMessage, Icon,
    JobCard, Spinner,
};

use crate::Route;

const LOAD_FAILED: &str = "Failed to load jobs.";

#[component]
pub fn Landing() -> Element {
    let api = use_api();
    let session = use_session();
    let mut toasts = use_notifications();
    let nav = use_navigator();

    let mut search = use_signal(String::new);
    let mut category = use_signal(CategoryFilter::default);

    // Refetches when the signed-in identity changes.
    let jobs = use_resource(move || {
        let api = api.clone();
        let token = session.current().map(|s| s.token);
        async move {
            let result = api.list_jobs(token.as_deref()).await;
            if let Err(ref err) = result {
                notify_error(&mut toasts, &err.display_message(LOAD_FAILED));
            }
            result
        }
    });

    let visible = use_memo(move || match &*jobs.read() {
        Some(Ok(list)) => JobFilter::new(search(), category()).apply(list),
        _ => Vec::<Job>::new(),
    });

    let signed_in = session.is_signed_in();
    let can_apply = session.current().is_some_and(|s| s.is_applicant());

    rsx! {
        section {
            class: "hero",
            h1 { "Find your next role" }
            p { "Browse openings from teams hiring right now." }
            if !signed_in {
                div {
                    class: "hero-actions",
                    Link { class: "btn btn-primary", to: Route::Register {}, "Get Started" }
                    Link { class: "btn btn-secondary", to: Route::Login {}, "Sign In" }
                }
            }
        }

        section {
            class: "job-board",
            div {
                class: "filters",
                label {
                    class: "search-box",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        r#type: "search",
                        placeholder: "Search jobs by title or description",
                        value: search(),
                        oninput: move |evt: FormEvent| search.set(evt.value()),
                    }
                }
                select {
                    value: category().value().to_string(),
                    onchange: move |evt: FormEvent| category.set(CategoryFilter::from_value(&evt.value())),
                    for (value, label) in CategoryFilter::options() {
                        option { key: "{value}", value: value, "{label}" }
                    }
                }
            }

            {match &*jobs.read() {
                None => rsx! { Spinner { label: "Loading jobs..." } },
                Some(Err(err)) => rsx! {
                    ErrorMessage { message: err.display_message(LOAD_FAILED) }
                },
                Some(Ok(_)) if visible.read().is_empty() => rsx! {
                    EmptyState { message: "No jobs match your search" }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "job-grid",
                        for job in visible() {
                            JobCard {
                                key: "{job.id}",
                                job: job.clone(),
                                can_apply,
                                on_apply: move |job_id: String| {
                                    nav.push(Route::Apply { job_id });
                                },
                            }
                        }
                    }
                },
            }}
        }
    }
}
