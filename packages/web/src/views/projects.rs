//! Project list page: one card per project the session user can see.

use api::Project;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::{truncate, use_session, ProjectDialog};

use crate::Route;

#[component]
pub fn Projects() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut show_editor = use_signal(|| false);

    // Anonymous visitors belong on the login page
    if !session().loading && session().user.is_none() {
        nav.replace(Route::Login {});
    }

    let mut projects = use_resource(move || async move {
        match api::projects::list_projects().await {
            Ok(list) => list,
            Err(err) => {
                tracing::error!("failed to fetch projects: {err}");
                Vec::new()
            }
        }
    });

    let body = match projects() {
        None => rsx! {
            p { class: "muted", "Loading projects..." }
        },
        Some(list) if list.is_empty() => rsx! {
            p { class: "muted", "No projects found. Create a new project to get started." }
        },
        Some(list) => rsx! {
            div {
                class: "project-grid",
                for project in list {
                    ProjectCard { key: "{project.id}", project: project.clone() }
                }
            }
        },
    };

    rsx! {
        section {
            class: "page-header",
            h1 { "Projects" }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| show_editor.set(true),
                "New Project"
            }
        }

        if show_editor() {
            ProjectDialog {
                editing: None::<Project>,
                on_saved: move |()| {
                    show_editor.set(false);
                    projects.restart();
                },
                on_cancel: move |()| show_editor.set(false),
            }
        }

        {body}
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let nav = use_navigator();
    let id = project.id;
    let summary = truncate(&project.description, 100);

    rsx! {
        div {
            class: "card project-card",
            h3 { class: "card-title", "{project.title}" }
            p { class: "card-text", "{summary}" }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    nav.push(Route::ProjectDetail { id });
                },
                "View Details"
            }
        }
    }
}
