use api::{ApiError, Comment};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::dialog;
use crate::format::format_timestamp;

/// Read-only comment feed for the project detail page.
#[component]
pub fn CommentList(comments: Vec<Comment>) -> Element {
    if comments.is_empty() {
        return rsx! {
            p { class: "muted", "No comments yet." }
        };
    }

    rsx! {
        div {
            class: "comment-list",
            for comment in comments {
                div {
                    key: "{comment.id}",
                    class: "comment",
                    p { class: "comment-text", "{comment.text}" }
                    div {
                        class: "comment-meta",
                        small { "By: {comment.user.username}" }
                        small { "{format_timestamp(&comment.created_at)}" }
                    }
                }
            }
        }
    }
}

/// Comment box. Only rendered for roles that may comment; the backend
/// still checks on submit.
#[component]
pub fn CommentForm(project_id: i64, on_added: EventHandler<()>) -> Element {
    let mut text = use_signal(|| String::new());
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let body = text();
            if body.trim().is_empty() {
                return;
            }
            submitting.set(true);
            match api::projects::add_comment(project_id, &body).await {
                Ok(_) => {
                    text.set(String::new());
                    on_added.call(());
                }
                Err(err) => {
                    tracing::error!("add comment failed: {err}");
                    let message = match err {
                        ApiError::Rejected { .. } => "Failed to add comment. Please try again.",
                        _ => api::error::GENERIC_ERROR,
                    };
                    dialog::alert(message);
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        form {
            class: "comment-form",
            onsubmit: handle_submit,
            textarea {
                class: "input",
                rows: "3",
                placeholder: "Add a comment...",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
            }
            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                disabled: submitting(),
                "Add Comment"
            }
        }
    }
}
