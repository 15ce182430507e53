//! # Role lookup and action visibility
//!
//! The backend enforces permissions on every mutation; these helpers only
//! decide what the UI offers. The collaborator list is the single source of
//! truth for the session user's role — there is no separate "my role"
//! endpoint.

use crate::models::{Collaborator, Role, User};

/// The session user's role on a project, from its collaborator list.
/// `None` for anonymous visitors and non-members.
pub fn role_of(user: Option<&User>, collaborators: &[Collaborator]) -> Option<Role> {
    let user = user?;
    collaborators
        .iter()
        .find(|member| member.user == user.id)
        .map(|member| member.role)
}

/// Which detail-page actions a role may see.
///
/// Owners get everything, editors may edit and comment, readers and
/// non-members get a read-only page. "Manage users" is not listed here:
/// that button always renders and re-checks ownership when clicked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionVisibility {
    pub edit: bool,
    pub delete: bool,
    pub comment: bool,
}

impl ActionVisibility {
    pub fn for_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::Owner) => ActionVisibility {
                edit: true,
                delete: true,
                comment: true,
            },
            Some(Role::Editor) => ActionVisibility {
                edit: true,
                delete: false,
                comment: true,
            },
            Some(Role::Reader) | None => ActionVisibility::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, username: &str) -> User {
        User {
            id,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    fn member(user_id: i64, role: Role) -> Collaborator {
        Collaborator {
            id: user_id * 10,
            project: 1,
            user: user_id,
            user_details: user(user_id, "someone"),
            role,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn role_of_matches_on_user_id() {
        let members = vec![member(1, Role::Owner), member(2, Role::Editor)];
        assert_eq!(role_of(Some(&user(2, "grace")), &members), Some(Role::Editor));
        assert_eq!(role_of(Some(&user(1, "ada")), &members), Some(Role::Owner));
    }

    #[test]
    fn role_of_is_none_for_outsiders_and_anonymous() {
        let members = vec![member(1, Role::Owner)];
        assert_eq!(role_of(Some(&user(99, "mallory")), &members), None);
        assert_eq!(role_of(None, &members), None);
    }

    #[test]
    fn owners_see_every_action() {
        let v = ActionVisibility::for_role(Some(Role::Owner));
        assert!(v.edit && v.delete && v.comment);
    }

    #[test]
    fn editors_cannot_delete() {
        let v = ActionVisibility::for_role(Some(Role::Editor));
        assert!(v.edit);
        assert!(!v.delete);
        assert!(v.comment);
    }

    #[test]
    fn readers_and_non_members_get_a_read_only_page() {
        assert_eq!(
            ActionVisibility::for_role(Some(Role::Reader)),
            ActionVisibility::default()
        );
        assert_eq!(ActionVisibility::for_role(None), ActionVisibility::default());
    }
}
