//! Application page for a single job.

use std::time::Duration;

use api::ApiError;
use dioxus::prelude::*;
use ui::{
    notify_error, notify_success, sleep, use_api, use_notifications, use_session, ErrorMessage,
    Spinner,
};

use crate::Route;

const NOT_FOUND: &str = "Job not found";
const APPLY_FAILED: &str = "Failed to apply. Maybe already applied?";
/// Pause after a successful application before moving on.
const REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[component]
pub fn Apply(job_id: String) -> Element {
    let api = use_api();
    let session = use_session();
    let mut toasts = use_notifications();
    let nav = use_navigator();
    let mut submitting = use_signal(|| false);
    let mut submitted = use_signal(|| false);

    let fetch_api = api.clone();
    let job = use_resource(use_reactive((&job_id,), move |(job_id,)| {
        let api = fetch_api.clone();
        async move {
            let result = api.get_job(&job_id).await;
            if let Err(ref err) = result {
                tracing::warn!("Loading job {} failed: {}", job_id, err);
                notify_error(&mut toasts, NOT_FOUND);
            }
            result
        }
    }));

    let id = job_id.clone();
    let handle_apply = move |_: MouseEvent| {
        if submitting() || submitted() {
            return;
        }
        let api = api.clone();
        let job_id = id.clone();
        spawn(async move {
            submitting.set(true);
            let result = match session.current() {
                Some(current) => api.apply(&current, &job_id).await,
                None => Err(ApiError::NotSignedIn),
            };
            match result {
                Ok(_) => {
                    submitted.set(true);
                    notify_success(&mut toasts, "Application submitted successfully!");
                    sleep(REDIRECT_DELAY).await;
                    nav.push(Route::MyApplications {});
                }
                Err(err) => {
                    notify_error(&mut toasts, &err.display_message(APPLY_FAILED));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "page apply-page",
            {match &*job.read() {
                None => rsx! { Spinner { label: "Loading job..." } },
                Some(Err(_)) => rsx! { ErrorMessage { message: NOT_FOUND } },
                Some(Ok(listing)) => rsx! {
                    h1 { "Apply for {listing.title}" }
                    p { class: "job-description", "{listing.description}" }
                    if !listing.category_label().is_empty() {
                        p { class: "muted", "Category: {listing.category_label()}" }
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: submitting() || submitted(),
                        onclick: handle_apply.clone(),
                        if submitting() { "Submitting..." } else { "Submit Application" }
                    }
                },
            }}
        }
    }
}
