use dioxus::prelude::*;

use ui::{Navbar, SessionProvider};
use views::{Login, ProjectDetail, Projects, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/projects")]
        Projects {},
        #[route("/projects/:id")]
        ProjectDetail { id: i64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Navbar above every page.
#[component]
fn AppShell() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}

/// Redirect `/` by session state: members to their projects, everyone else
/// to the login page.
#[component]
fn Root() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    if !session().loading {
        if session().user.is_some() {
            nav.replace(Route::Projects {});
        } else {
            nav.replace(Route::Login {});
        }
    }

    rsx! {}
}
