//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{notify_error, notify_success, use_api, use_notifications, use_session, ErrorMessage};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut toasts = use_notifications();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let api = api.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let e = email().trim().to_string();
            let p = password();

            match api.login(&e, &p).await {
                Ok(signed_in) => {
                    session.sign_in(signed_in);
                    notify_success(&mut toasts, "Login successful! Welcome back!");
                    nav.push(Route::Landing {});
                }
                Err(err) => {
                    let message = err.display_message("Invalid credentials");
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

            h1 { "Welcome back" }
            p { class: "muted", "Sign in to your TalentHub account" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    ErrorMessage { message: err }
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

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Login" }
                }
            }

            p {
                class: "muted",
                "Don't have an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
