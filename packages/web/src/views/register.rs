//! Registration page. Registering does not sign the user in, so a
//! successful submit immediately logs in with the same credentials.

use api::{Credentials, Field, Registration};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorAlert, Input, Label};
use ui::{use_session, SessionState};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut username = use_signal(|| String::new());
    let mut email = use_signal(|| String::new());
    let mut first_name = use_signal(|| String::new());
    let mut last_name = use_signal(|| String::new());
    let mut password = use_signal(|| String::new());
    let mut password2 = use_signal(|| String::new());
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the project list
    if !session().loading && session().user.is_some() {
        nav.replace(Route::Projects {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let registration = Registration {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
                first_name: first_name().trim().to_string(),
                last_name: last_name().trim().to_string(),
                password: password(),
                password2: password2(),
            };

            // Confirmation mismatch never leaves the page
            if let Err(message) = registration.validate() {
                error.set(Some(message));
                return;
            }

            loading.set(true);
            if let Err(err) = api::auth::register(&registration).await {
                tracing::error!("registration failed: {err}");
                error.set(Some(err.message_or(
                    &[Field::Username, Field::Email, Field::Password, Field::Detail],
                    "Registration failed. Please try again.",
                )));
                loading.set(false);
                return;
            }

            // Fresh accounts have no session yet; log in with the same
            // credentials
            let credentials = Credentials {
                username: registration.username.clone(),
                password: registration.password.clone(),
            };
            match api::auth::login(&credentials).await {
                Ok(user) => {
                    session.set(SessionState {
                        user: Some(user),
                        loading: false,
                    });
                    nav.push(Route::Projects {});
                }
                Err(err) => {
                    tracing::error!("post-registration login failed: {err}");
                    error.set(Some(err.message_or(
                        &[Field::Error, Field::Detail],
                        "Login failed. Please try again.",
                    )));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Register" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                ErrorAlert { message: error() }

                div {
                    class: "form-field",
                    Label { html_for: "register-username", "Username" }
                    Input {
                        id: "register-username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "register-email", "Email" }
                    Input {
                        id: "register-email",
                        r#type: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "register-first-name", "First name" }
                    Input {
                        id: "register-first-name",
                        value: first_name(),
                        oninput: move |evt: FormEvent| first_name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "register-last-name", "Last name" }
                    Input {
                        id: "register-last-name",
                        value: last_name(),
                        oninput: move |evt: FormEvent| last_name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "register-password", "Password" }
                    Input {
                        id: "register-password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "register-password2", "Confirm password" }
                    Input {
                        id: "register-password2",
                        r#type: "password",
                        value: password2(),
                        oninput: move |evt: FormEvent| password2.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}
