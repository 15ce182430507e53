//! # JSON models exchanged with the backend
//!
//! Response shapes mirror the backend serializers field for field, so the
//! structs deserialize straight off the wire. Request payloads live here too
//! when more than one module needs them.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | An account as the backend exposes it. Also embedded in projects (owner) and collaborator rows. |
//! | [`Project`] | A project record with server-maintained timestamps and the owning user. |
//! | [`Collaborator`] | A membership row tying a user to a project with a [`Role`]. |
//! | [`Comment`] | A single comment with its author and creation time. |
//! | [`ProjectDetail`] | Client-side aggregate of the three detail fetches. |
//! | [`Role`] | `owner` / `editor` / `reader`, exactly as the wire spells them. |

use serde::{Deserialize, Serialize};

/// An account as returned by the auth and user endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// Navbar greeting: `Welcome, First Last (username)`.
    pub fn greeting(&self) -> String {
        format!(
            "Welcome, {} {} ({})",
            self.first_name, self.last_name, self.username
        )
    }
}

/// Membership level within a single project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Editor,
    Reader,
}

impl Role {
    /// Wire spelling, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Editor => "editor",
            Role::Reader => "reader",
        }
    }

    /// Capitalized form for display next to a username.
    pub fn label(self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Editor => "Editor",
            Role::Reader => "Reader",
        }
    }

    /// Parse a role out of a `<select>` value.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "owner" => Some(Role::Owner),
            "editor" => Some(Role::Editor),
            "reader" => Some(Role::Reader),
            _ => None,
        }
    }
}

/// New collaborators start at the least-privileged role.
impl Default for Role {
    fn default() -> Self {
        Role::Reader
    }
}

/// A project record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Server-maintained ISO-8601 timestamp.
    pub created_at: String,
    /// Server-maintained ISO-8601 timestamp.
    pub updated_at: String,
    /// The owning user. Absent in some list payloads, so optional.
    #[serde(default)]
    pub owner: Option<User>,
}

/// A membership row on a project's collaborator list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: i64,
    pub project: i64,
    /// The member's user id; matched against the session user for role checks.
    pub user: i64,
    /// Expanded account fields for display.
    pub user_details: User,
    pub role: Role,
    pub created_at: String,
}

/// A comment on a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub project: i64,
    pub user: User,
    pub text: String,
    pub created_at: String,
}

/// Everything the detail view renders, gathered from the three detail
/// endpoints in one round trip. See [`crate::projects::get_project_detail`].
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectDetail {
    pub project: Project,
    pub collaborators: Vec<Collaborator>,
    pub comments: Vec<Comment>,
}

/// Login payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration payload. `password2` is the confirmation field the backend
/// validates against `password`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password2: String,
}

impl Registration {
    /// Local confirmation check. A mismatch must abort before any request
    /// goes out.
    pub fn validate(&self) -> Result<(), String> {
        if self.password != self.password2 {
            return Err("Passwords do not match.".to_string());
        }
        Ok(())
    }
}

/// Title/description pair sent when creating or updating a project.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectFields {
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_includes_names_and_username() {
        let user = User {
            id: 1,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };
        assert_eq!(user.greeting(), "Welcome, Ada Lovelace (ada)");
    }

    #[test]
    fn role_round_trips_through_wire_spelling() {
        assert_eq!(serde_json::to_string(&Role::Editor).unwrap(), "\"editor\"");
        let role: Role = serde_json::from_str("\"owner\"").unwrap();
        assert_eq!(role, Role::Owner);
        assert_eq!(Role::parse("reader"), Some(Role::Reader));
        assert_eq!(Role::parse("admin"), None);
    }

    #[test]
    fn new_collaborators_default_to_reader() {
        assert_eq!(Role::default(), Role::Reader);
    }

    #[test]
    fn registration_rejects_mismatched_passwords() {
        let mut reg = Registration {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password: "secret".to_string(),
            password2: "secret".to_string(),
        };
        assert!(reg.validate().is_ok());

        reg.password2 = "different".to_string();
        assert_eq!(reg.validate(), Err("Passwords do not match.".to_string()));
    }

    #[test]
    fn project_deserializes_from_backend_shape() {
        let json = r#"{
            "id": 4,
            "title": "Website redesign",
            "description": "New marketing site",
            "created_at": "2024-01-15T10:30:00.123456Z",
            "updated_at": "2024-02-01T08:00:00Z",
            "owner": {
                "id": 1,
                "username": "ada",
                "email": "ada@example.com",
                "first_name": "Ada",
                "last_name": "Lovelace"
            }
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, 4);
        assert_eq!(project.owner.as_ref().unwrap().username, "ada");
    }

    #[test]
    fn collaborator_deserializes_with_expanded_user() {
        let json = r#"{
            "id": 9,
            "project": 4,
            "user": 2,
            "user_details": {
                "id": 2,
                "username": "grace",
                "email": "grace@example.com",
                "first_name": "Grace",
                "last_name": "Hopper"
            },
            "role": "editor",
            "created_at": "2024-01-16T09:00:00Z"
        }"#;
        let member: Collaborator = serde_json::from_str(json).unwrap();
        assert_eq!(member.user, 2);
        assert_eq!(member.role, Role::Editor);
        assert_eq!(member.user_details.username, "grace");
    }
}
