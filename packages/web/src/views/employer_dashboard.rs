//! Employer dashboard: post jobs and review the ones already posted.

use api::{ApiError, Job};
use dioxus::prelude::*;
use ui::{
    notify_error, use_api, use_notifications, use_session, EmptyState, ErrorMessage, JobCard,
    Spinner,
};

use super::job_form::JobForm;

const LOAD_FAILED: &str = "Failed to load jobs.";

#[component]
pub fn EmployerDashboard() -> Element {
    let api = use_api();
    let session = use_session();
    let mut toasts = use_notifications();

    let mut jobs = use_resource(move || {
        let api = api.clone();
        let current = session.current();
        async move {
            let Some(current) = current else {
                return Err(ApiError::NotSignedIn);
            };
            match api.list_jobs(Some(&current.token)).await {
                Ok(all) => Ok(all
                    .into_iter()
                    .filter(|job| job.is_posted_by(&current))
                    .collect::<Vec<Job>>()),
                Err(err) => {
                    notify_error(&mut toasts, &err.display_message(LOAD_FAILED));
                    Err(err)
                }
            }
        }
    });

    let greeting = session
        .current()
        .map(|s| s.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "page dashboard",
            h1 { "Employer Dashboard" }
            p { class: "muted", "Welcome, {greeting}" }

            section {
                h2 { "Post a new job" }
                JobForm {
                    on_created: move |_| jobs.restart(),
                }
            }

            section {
                h2 { "Your Jobs" }
                {match &*jobs.read() {
                    None => rsx! { Spinner { label: "Loading your jobs..." } },
                    Some(Err(err)) => rsx! {
                        ErrorMessage { message: err.display_message(LOAD_FAILED) }
                    },
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        EmptyState { message: "You have not posted any jobs yet." }
                    },
                    Some(Ok(list)) => rsx! {
                        div {
                            class: "job-grid",
                            for job in list.iter() {
                                JobCard { key: "{job.id}", job: job.clone() }
                            }
                        }
                    },
                }}
            }
        }
    }
}
