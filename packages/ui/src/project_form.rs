use api::{ApiError, Field, Project, ProjectFields};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, ErrorAlert, Input, Label};
use crate::modal::ModalOverlay;

/// Modal form for creating or editing a project. `editing: None` creates;
/// `Some(project)` pre-fills the fields and updates in place.
#[component]
pub fn ProjectDialog(
    editing: Option<Project>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let project_id = editing.as_ref().map(|project| project.id);
    let initial_title = editing
        .as_ref()
        .map(|project| project.title.clone())
        .unwrap_or_default();
    let initial_description = editing
        .as_ref()
        .map(|project| project.description.clone())
        .unwrap_or_default();

    let mut title = use_signal(move || initial_title);
    let mut description = use_signal(move || initial_description);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let heading = if project_id.is_some() {
        "Edit Project"
    } else {
        "New Project"
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            saving.set(true);

            let fields = ProjectFields {
                title: title(),
                description: description(),
            };
            match api::projects::save_project(project_id, &fields).await {
                Ok(_) => on_saved.call(()),
                Err(err) => {
                    tracing::error!("save project failed: {err}");
                    let message = match &err {
                        ApiError::Rejected { status, body } => body
                            .as_ref()
                            .and_then(|body| {
                                body.first_message(&[
                                    Field::Title,
                                    Field::Description,
                                    Field::Detail,
                                ])
                            })
                            .unwrap_or_else(|| {
                                format!("Failed to save project. Status: {status}")
                            }),
                        _ => api::error::GENERIC_ERROR.to_string(),
                    };
                    error.set(Some(message));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            form {
                class: "dialog-body",
                onsubmit: handle_submit,
                h2 { "{heading}" }

                ErrorAlert { message: error() }

                div {
                    class: "form-field",
                    Label { html_for: "project-title", "Title" }
                    Input {
                        id: "project-title",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "project-description", "Description" }
                    textarea {
                        id: "project-description",
                        class: "input",
                        rows: "4",
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                }

                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
