//! # Backend routes
//!
//! All paths are same-origin under `/api` and keep their trailing slash —
//! the backend router redirects without one, and a redirect drops the CSRF
//! header from a mutation.

use crate::http::Method;

pub const API_ROOT: &str = "/api";

pub fn auth_me() -> String {
    format!("{API_ROOT}/auth/me/")
}

pub fn auth_login() -> String {
    format!("{API_ROOT}/auth/login/")
}

pub fn auth_register() -> String {
    format!("{API_ROOT}/auth/register/")
}

pub fn auth_logout() -> String {
    format!("{API_ROOT}/auth/logout/")
}

pub fn projects() -> String {
    format!("{API_ROOT}/projects/")
}

pub fn project(id: i64) -> String {
    format!("{API_ROOT}/projects/{id}/")
}

pub fn project_users(project: i64) -> String {
    format!("{API_ROOT}/projects/{project}/users/")
}

pub fn update_role(project: i64, user: i64) -> String {
    format!("{API_ROOT}/projects/{project}/update-role/{user}/")
}

pub fn remove_user(project: i64, user: i64) -> String {
    format!("{API_ROOT}/projects/{project}/remove-user/{user}/")
}

pub fn add_user(project: i64) -> String {
    format!("{API_ROOT}/projects/{project}/add_user/")
}

pub fn comments(project: i64) -> String {
    format!("{API_ROOT}/projects/{project}/comments/")
}

pub fn add_comment(project: i64) -> String {
    format!("{API_ROOT}/projects/{project}/add_comment/")
}

/// One entry point for the project form: no id creates, an id updates.
pub(crate) fn project_save_target(id: Option<i64>) -> (Method, String) {
    match id {
        None => (Method::Post, projects()),
        Some(id) => (Method::Put, project(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_keep_their_trailing_slash() {
        assert_eq!(auth_me(), "/api/auth/me/");
        assert_eq!(auth_login(), "/api/auth/login/");
        assert_eq!(auth_register(), "/api/auth/register/");
        assert_eq!(auth_logout(), "/api/auth/logout/");
        assert_eq!(projects(), "/api/projects/");
        assert_eq!(project(7), "/api/projects/7/");
        assert_eq!(project_users(7), "/api/projects/7/users/");
        assert_eq!(update_role(3, 7), "/api/projects/3/update-role/7/");
        assert_eq!(remove_user(3, 7), "/api/projects/3/remove-user/7/");
        assert_eq!(add_user(3), "/api/projects/3/add_user/");
        assert_eq!(comments(3), "/api/projects/3/comments/");
        assert_eq!(add_comment(3), "/api/projects/3/add_comment/");
    }

    #[test]
    fn save_target_creates_without_id_and_updates_with_one() {
        assert_eq!(
            project_save_target(None),
            (Method::Post, "/api/projects/".to_string())
        );
        assert_eq!(
            project_save_target(Some(7)),
            (Method::Put, "/api/projects/7/".to_string())
        );
    }
}
