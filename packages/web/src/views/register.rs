//! Registration page view with name/email/password/role form.

use api::{ApiError, RegisterRequest, Role};
use dioxus::prelude::*;
use ui::{notify_error, notify_success, use_api, use_notifications, ErrorMessage};

use crate::Route;

const REGISTER_FAILED: &str = "Registration failed. Please try again.";

/// Message shown when registration fails: the server's message, else the
/// error's own description, else a generic fallback.
fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { message: None, .. } | ApiError::Network(_) => err.to_string(),
        _ => err.display_message(REGISTER_FAILED),
    }
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let api = use_api();
    let mut toasts = use_notifications();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(Role::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let api = api.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let request = RegisterRequest {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                role: role(),
            };

            match api.register(&request).await {
                Ok(user_id) => {
                    tracing::info!("Registered account {}", user_id);
                    notify_success(&mut toasts, "Registration successful! You can now log in.");
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    role.set(Role::default());
                }
                Err(err) => {
                    let message = failure_message(&err);
                    error.set(Some(message.clone()));
                    notify_error(&mut toasts, &message);
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Create Account" }
            p { class: "muted", "Join TalentHub as an applicant or an employer" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    ErrorMessage { message: err }
                }

                input {
                    r#type: "text",
                    placeholder: "Name",
                    required: true,
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                select {
                    value: role().as_str(),
                    onchange: move |evt: FormEvent| {
                        match evt.value().parse::<Role>() {
                            Ok(parsed) => role.set(parsed),
                            Err(err) => tracing::warn!("{}", err),
                        }
                    },
                    for option_role in [Role::Applicant, Role::Employer] {
                        option {
                            key: "{option_role.as_str()}",
                            value: option_role.as_str(),
                            "{option_role.label()}"
                        }
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            p {
                class: "muted",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
