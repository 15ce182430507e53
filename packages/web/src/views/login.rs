//! Login page with a username/password form.

use api::{Credentials, Field};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorAlert, Input, Label};
use ui::{use_session, SessionState};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut username = use_signal(|| String::new());
    let mut password = use_signal(|| String::new());
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the project list
    if !session().loading && session().user.is_some() {
        nav.replace(Route::Projects {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let credentials = Credentials {
                username: username().trim().to_string(),
                password: password(),
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
                    tracing::error!("login failed: {err}");
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
            h1 { "Login" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                ErrorAlert { message: error() }

                div {
                    class: "form-field",
                    Label { html_for: "login-username", "Username" }
                    Input {
                        id: "login-username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "login-password", "Password" }
                    Input {
                        id: "login-password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
