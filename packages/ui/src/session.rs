//! Session context and hooks for the UI.

use api::User;
use dioxus::prelude::*;

/// Who the backend says we are, if anyone.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True until the mount-time identity check has answered.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session signal.
/// Wrap the app with this component; it checks the session cookie once on
/// mount and leaves later updates to the login/logout flows.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(SessionState::default);

    // Ask the backend who the cookie belongs to on mount
    let _ = use_resource(move || async move {
        match api::auth::current_user().await {
            Ok(user) => {
                session.set(SessionState {
                    user: Some(user),
                    loading: false,
                });
            }
            Err(err) => {
                // Anonymous visitors land here too; nothing to report loudly.
                tracing::debug!("session check: {err}");
                session.set(SessionState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to end the session. Local state clears no matter what the server
/// answered, then the browser goes back to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| async move {
        if let Err(err) = api::auth::logout().await {
            tracing::error!("logout failed: {err}");
        }
        session.set(SessionState {
            user: None,
            loading: false,
        });
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
