//! Project detail page: the record itself, role-gated actions, and the
//! comment feed. The user's role comes from the collaborator list, so the
//! page re-fetches everything after any mutation instead of patching state
//! locally.

use api::{ActionVisibility, ApiError, Role};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::{dialog, format_timestamp, use_session, CommentForm, CommentList, ProjectDialog, UserManagementDialog};

use crate::Route;

#[component]
pub fn ProjectDetail(id: i64) -> Element {
    // Track the id in a signal so use_resource re-runs on route param change
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let session = use_session();
    let nav = use_navigator();
    let mut show_editor = use_signal(|| false);
    let mut show_users = use_signal(|| false);

    let mut detail = use_resource(move || {
        let id = id_signal();
        async move {
            let result = api::projects::get_project_detail(id).await;
            if let Err(err) = &result {
                tracing::error!("failed to fetch project {id}: {err}");
            }
            result
        }
    });

    let body = match detail() {
        None => rsx! {
            p { class: "muted", "Loading project..." }
        },
        Some(Err(_)) => rsx! {
            p { class: "muted", "Failed to load project." }
            Link { to: Route::Projects {}, "Back to Projects" }
        },
        Some(Ok(d)) => {
            let state = session();
            let role = api::role_of(state.user.as_ref(), &d.collaborators);
            let visibility = ActionVisibility::for_role(role);

            let project_id = d.project.id;
            let owner_name = d
                .project
                .owner
                .as_ref()
                .map(|owner| owner.username.clone())
                .unwrap_or_default();
            let created = format_timestamp(&d.project.created_at);
            let updated = format_timestamp(&d.project.updated_at);

            // Ownership is re-checked at click time against the latest
            // collaborator fetch, not against whatever rendered the button.
            let handle_manage = move |_| {
                if role == Some(Role::Owner) {
                    show_users.set(true);
                } else {
                    dialog::alert("Only project owners can manage users.");
                }
            };

            let handle_delete = move |_| {
                if !dialog::confirm(
                    "Are you sure you want to delete this project? This action cannot be undone.",
                ) {
                    return;
                }
                spawn(async move {
                    match api::projects::delete_project(project_id).await {
                        Ok(()) => {
                            nav.push(Route::Projects {});
                        }
                        Err(err) => {
                            tracing::error!("delete project failed: {err}");
                            let message = match err {
                                ApiError::Rejected { .. } => {
                                    "Failed to delete project. Please try again."
                                }
                                _ => api::error::GENERIC_ERROR,
                            };
                            dialog::alert(message);
                        }
                    }
                });
            };

            rsx! {
                section {
                    class: "page-header",
                    h1 { "{d.project.title}" }
                    div {
                        class: "detail-actions",
                        if visibility.edit {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| show_editor.set(true),
                                "Edit"
                            }
                        }
                        if visibility.delete {
                            Button {
                                variant: ButtonVariant::Danger,
                                onclick: handle_delete,
                                "Delete"
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: handle_manage,
                            "Manage Users"
                        }
                    }
                }

                div {
                    class: "detail-meta",
                    if !owner_name.is_empty() {
                        span { "Owner: {owner_name}" }
                    }
                    span { "Created: {created}" }
                    span { "Updated: {updated}" }
                }

                p { class: "detail-description", "{d.project.description}" }

                if show_editor() {
                    ProjectDialog {
                        editing: Some(d.project.clone()),
                        on_saved: move |()| {
                            show_editor.set(false);
                            detail.restart();
                        },
                        on_cancel: move |()| show_editor.set(false),
                    }
                }

                if show_users() {
                    UserManagementDialog {
                        project_id: project_id,
                        collaborators: d.collaborators.clone(),
                        on_changed: move |()| detail.restart(),
                        on_close: move |()| show_users.set(false),
                    }
                }

                section {
                    class: "comments-section",
                    h2 { "Comments" }
                    CommentList { comments: d.comments.clone() }
                    if visibility.comment {
                        CommentForm {
                            project_id: project_id,
                            on_added: move |()| detail.restart(),
                        }
                    }
                }

                Link { class: "back-link", to: Route::Projects {}, "Back to Projects" }
            }
        }
    };

    rsx! {
        {body}
    }
}
