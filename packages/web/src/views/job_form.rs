//! Job posting form shared by the Add Job page and the employer dashboard.

use api::{ApiError, NewJob};
use dioxus::prelude::*;
use ui::{notify_error, notify_success, use_api, use_notifications, use_session, ErrorMessage};

const CREATE_FAILED: &str = "Failed to add job";

/// Posts a new job. Sends exactly one request per submit; the button stays
/// disabled while it is in flight. `on_created` fires after a success.
#[component]
pub fn JobForm(on_created: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut toasts = use_notifications();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);
        error.set(None);

        let api = api.clone();
        spawn(async move {
            let job = NewJob {
                title: title().trim().to_string(),
                description: description().trim().to_string(),
            };
            let result = match session.current() {
                Some(current) => api.create_job(&current, &job).await,
                None => Err(ApiError::NotSignedIn),
            };
            match result {
                Ok(created) => {
                    if let Some(created) = created {
                        tracing::info!("Created job {}", created.id);
                    }
                    title.set(String::new());
                    description.set(String::new());
                    notify_success(&mut toasts, "Job added successfully!");
                    on_created.call(());
                }
                Err(err) => {
                    let message = err.display_message(CREATE_FAILED);
                    error.set(Some(message.clone()));
                    notify_error(&mut toasts, &message);
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        form {
            class: "job-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                ErrorMessage { message: err }
            }

            input {
                r#type: "text",
                placeholder: "Job title",
                required: true,
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }

            textarea {
                placeholder: "Job description",
                required: true,
                rows: "6",
                value: description(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }

            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Posting..." } else { "Add Job" }
            }
        }
    }
}
