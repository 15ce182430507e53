//! # Project, collaborator, and comment calls
//!
//! Thin typed wrappers over the backend routes. Request-only payloads that
//! no view needs to name are defined next to their call.

use futures::try_join;
use serde::Serialize;

use crate::endpoints;
use crate::error::ApiError;
use crate::http::{self, Method, NO_BODY};
use crate::models::{Collaborator, Comment, Project, ProjectDetail, ProjectFields, Role};

/// Projects visible to the session user (member of, or owner).
pub async fn list_projects() -> Result<Vec<Project>, ApiError> {
    http::get_json(&endpoints::projects()).await
}

pub async fn get_project(id: i64) -> Result<Project, ApiError> {
    http::get_json(&endpoints::project(id)).await
}

/// Create (`id: None`) or update (`id: Some(..)`) a project. The caller's
/// form state decides which.
pub async fn save_project(id: Option<i64>, fields: &ProjectFields) -> Result<Project, ApiError> {
    let (method, path) = endpoints::project_save_target(id);
    http::send_json(method, &path, fields).await
}

pub async fn delete_project(id: i64) -> Result<(), ApiError> {
    http::send_empty(Method::Delete, &endpoints::project(id), NO_BODY).await
}

/// Membership rows for a project, owner included.
pub async fn list_collaborators(project: i64) -> Result<Vec<Collaborator>, ApiError> {
    http::get_json(&endpoints::project_users(project)).await
}

#[derive(Serialize)]
struct RoleChange {
    role: Role,
}

/// Change a member's role. The backend refuses to touch the owner row.
pub async fn update_role(project: i64, user: i64, role: Role) -> Result<Collaborator, ApiError> {
    http::send_json(
        Method::Patch,
        &endpoints::update_role(project, user),
        &RoleChange { role },
    )
    .await
}

pub async fn remove_collaborator(project: i64, user: i64) -> Result<(), ApiError> {
    http::send_empty(Method::Delete, &endpoints::remove_user(project, user), NO_BODY).await
}

#[derive(Serialize)]
struct AddCollaborator<'a> {
    username: &'a str,
    role: Role,
}

/// Add a user to the project by username. 404 when no such user, 400 when
/// already a member — both arrive as [`ApiError::Rejected`] with a `detail`
/// message worth showing.
pub async fn add_collaborator(
    project: i64,
    username: &str,
    role: Role,
) -> Result<Collaborator, ApiError> {
    http::send_json(
        Method::Post,
        &endpoints::add_user(project),
        &AddCollaborator { username, role },
    )
    .await
}

pub async fn list_comments(project: i64) -> Result<Vec<Comment>, ApiError> {
    http::get_json(&endpoints::comments(project)).await
}

#[derive(Serialize)]
struct NewComment<'a> {
    text: &'a str,
}

pub async fn add_comment(project: i64, text: &str) -> Result<Comment, ApiError> {
    http::send_json(
        Method::Post,
        &endpoints::add_comment(project),
        &NewComment { text },
    )
    .await
}

/// Everything the detail view needs, fetched concurrently. The three
/// requests share one failure path: if any is rejected the whole detail
/// load fails rather than rendering a partial page.
pub async fn get_project_detail(id: i64) -> Result<ProjectDetail, ApiError> {
    let (project, collaborators, comments) = try_join!(
        get_project(id),
        list_collaborators(id),
        list_comments(id),
    )?;
    Ok(ProjectDetail {
        project,
        collaborators,
        comments,
    })
}
