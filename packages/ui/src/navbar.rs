use dioxus::prelude::*;

use crate::session::{use_session, LogoutButton};

/// Top navigation bar: brand on the left, session controls on the right.
/// While the session check is still running the right side stays empty so
/// the auth links don't flash for signed-in users.
#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let state = session();
    let greeting = state.user.as_ref().map(|user| user.greeting());

    rsx! {
        header {
            class: "navbar",
            a { class: "navbar-brand", href: "/", "ProjectHub" }
            nav {
                class: "navbar-actions",
                if let Some(greeting) = greeting {
                    span { class: "navbar-welcome", "{greeting}" }
                    LogoutButton { class: "btn btn-outline" }
                } else if !state.loading {
                    a { class: "btn btn-outline", href: "/login", "Login" }
                    a { class: "btn btn-primary", href: "/register", "Register" }
                }
            }
        }
    }
}
