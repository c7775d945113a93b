use api::ApiError;
use dioxus::prelude::*;
use ui::{
    notify_error, use_api, use_notifications, use_session, EmptyState, ErrorMessage, Spinner,
};

const LOAD_FAILED: &str = "Failed to load applications.";

/// The signed-in applicant's submitted applications.
#[component]
pub fn MyApplications() -> Element {
    let api = use_api();
    let session = use_session();
    let mut toasts = use_notifications();

    let applications = use_resource(move || {
        let api = api.clone();
        let current = session.current();
        async move {
            let result = match current {
                Some(current) => api.list_applications(&current).await,
                None => Err(ApiError::NotSignedIn),
            };
            if let Err(ref err) = result {
                notify_error(&mut toasts, &err.display_message(LOAD_FAILED));
            }
            result
        }
    });

    rsx! {
        div {
            class: "page",
            h1 { "My Applications" }
            {match &*applications.read() {
                None => rsx! { Spinner { label: "Loading applications..." } },
                Some(Err(err)) => rsx! {
                    ErrorMessage { message: err.display_message(LOAD_FAILED) }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    EmptyState { message: "No applications yet." }
                },
                Some(Ok(list)) => rsx! {
                    ul {
                        class: "application-list",
                        for application in list.iter() {
                            li {
                                key: "{application.id}",
                                class: "application-card",
                                h3 { "{application.job_title}" }
                                p { "{application.job_description}" }
                                span { class: "status-badge", "Status: {application.status}" }
                            }
                        }
                    }
                },
            }}
        }
    }
}
