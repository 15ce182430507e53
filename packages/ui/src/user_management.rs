use api::{Collaborator, Field, Role};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, ErrorAlert, Input, Label};
use crate::dialog;
use crate::modal::ModalOverlay;

/// Owner-only dialog listing every member with role controls, plus a form
/// to add a user by name. Every mutation reports back through `on_changed`
/// so the page re-fetches — the server stays the authority on membership.
#[component]
pub fn UserManagementDialog(
    project_id: i64,
    collaborators: Vec<Collaborator>,
    on_changed: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "dialog-body",
                h2 { "Manage Users" }

                div {
                    class: "collaborator-list",
                    for collaborator in collaborators {
                        CollaboratorRow {
                            key: "{collaborator.user}",
                            project_id: project_id,
                            collaborator: collaborator.clone(),
                            on_changed: move |()| on_changed.call(()),
                        }
                    }
                }

                AddCollaboratorForm {
                    project_id: project_id,
                    on_added: move |()| on_changed.call(()),
                }
            }
        }
    }
}

#[component]
fn CollaboratorRow(
    project_id: i64,
    collaborator: Collaborator,
    on_changed: EventHandler<()>,
) -> Element {
    let username = collaborator.user_details.username.clone();
    let user_id = collaborator.user;
    let role = collaborator.role;
    let role_label = role.label();

    // The owner row is display-only; the backend refuses to change or
    // remove it and the UI should not pretend otherwise.
    if role == Role::Owner {
        return rsx! {
            div {
                class: "collaborator-row",
                div {
                    class: "collaborator-name",
                    strong { "{username}" }
                    span { class: "muted", " ({role_label})" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: true,
                    "Cannot modify"
                }
            }
        };
    }

    let handle_role_change = move |evt: FormEvent| {
        let Some(new_role) = Role::parse(&evt.value()) else {
            return;
        };
        spawn(async move {
            if let Err(err) = api::projects::update_role(project_id, user_id, new_role).await {
                tracing::error!("role update failed: {err}");
            }
            // Re-fetch either way so a refused change snaps back visibly.
            on_changed.call(());
        });
    };

    let handle_remove = move |_| {
        if !dialog::confirm("Are you sure you want to remove this user from the project?") {
            return;
        }
        spawn(async move {
            if let Err(err) = api::projects::remove_collaborator(project_id, user_id).await {
                tracing::error!("remove collaborator failed: {err}");
            }
            on_changed.call(());
        });
    };

    rsx! {
        div {
            class: "collaborator-row",
            div {
                class: "collaborator-name",
                strong { "{username}" }
                span { class: "muted", " ({role_label})" }
            }
            div {
                class: "collaborator-actions",
                select {
                    class: "input role-select",
                    value: role.as_str(),
                    onchange: handle_role_change,
                    option { value: "editor", selected: role == Role::Editor, "Editor" }
                    option { value: "reader", selected: role == Role::Reader, "Reader" }
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: handle_remove,
                    "Remove"
                }
            }
        }
    }
}

#[component]
fn AddCollaboratorForm(project_id: i64, on_added: EventHandler<()>) -> Element {
    let mut username = use_signal(|| String::new());
    let mut role = use_signal(Role::default);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let name = username().trim().to_string();
            if name.is_empty() {
                return;
            }
            error.set(None);
            match api::projects::add_collaborator(project_id, &name, role()).await {
                Ok(_) => {
                    // Full form reset, role select included.
                    username.set(String::new());
                    role.set(Role::default());
                    on_added.call(());
                }
                Err(err) => {
                    tracing::error!("add collaborator failed: {err}");
                    error.set(Some(err.message_or(
                        &[Field::Detail, Field::Username],
                        "Failed to add user. Please try again.",
                    )));
                }
            }
        });
    };

    rsx! {
        form {
            class: "add-collaborator",
            onsubmit: handle_submit,
            h3 { "Add User" }

            ErrorAlert { message: error() }

            div {
                class: "form-field",
                Label { html_for: "add-user-name", "Username" }
                Input {
                    id: "add-user-name",
                    placeholder: "username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "add-user-role", "Role" }
                select {
                    id: "add-user-role",
                    class: "input role-select",
                    value: role().as_str(),
                    onchange: move |evt| {
                        if let Some(parsed) = Role::parse(&evt.value()) {
                            role.set(parsed);
                        }
                    },
                    option { value: "reader", "Reader" }
                    option { value: "editor", "Editor" }
                }
            }

            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "Add User"
                }
            }
        }
    }
}
